// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use strum_macros::Display;
use url::Url;

use super::{ContentKind, FormattableContent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum GroupKind {
    Text,
    Image,
    User,
    Comment,
    Actions,
    Subject,
    Header,
    Footer,
    Activity,
}

impl From<ContentKind> for GroupKind {
    fn from(value: ContentKind) -> Self {
        match value {
            ContentKind::Text => GroupKind::Text,
            ContentKind::Image => GroupKind::Image,
            ContentKind::User => GroupKind::User,
            ContentKind::Comment => GroupKind::Comment,
        }
    }
}

/// An ordered list of blocks rendered together.
#[derive(Debug, Clone)]
pub struct ContentGroup {
    pub kind: GroupKind,
    pub blocks: Vec<Arc<FormattableContent>>,
}

impl ContentGroup {
    pub fn new(kind: GroupKind, blocks: Vec<Arc<FormattableContent>>) -> Self {
        Self { kind, blocks }
    }

    /// Returns the first block of the given kind.
    pub fn block_of_kind(&self, kind: ContentKind) -> Option<&Arc<FormattableContent>> {
        self.blocks.iter().find(|block| block.kind() == kind)
    }

    pub fn first_block(&self) -> Option<&Arc<FormattableContent>> {
        self.blocks.first()
    }

    pub fn image_urls(&self) -> Vec<&Url> {
        self.blocks
            .iter()
            .flat_map(|block| block.image_urls())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::content::models::ContentBlock;

    use super::*;

    #[test]
    fn test_block_of_kind_returns_first_match() {
        let first = Arc::new(FormattableContent::User(
            ContentBlock::new(Some("first".to_string())).into(),
        ));
        let second = Arc::new(FormattableContent::User(
            ContentBlock::new(Some("second".to_string())).into(),
        ));
        let text = Arc::new(FormattableContent::Text(
            ContentBlock::new(Some("text".to_string())).into(),
        ));

        let group = ContentGroup::new(GroupKind::User, vec![text, first.clone(), second]);

        assert!(Arc::ptr_eq(
            &first,
            group.block_of_kind(ContentKind::User).unwrap()
        ));
        assert!(group.block_of_kind(ContentKind::Comment).is_none());
        assert_eq!("user", GroupKind::User.to_string());
    }
}
