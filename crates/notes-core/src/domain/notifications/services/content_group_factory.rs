// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::domain::content::models::{
    ContentGroup, ContentKind, ContentParent, FormattableContent, GroupKind,
};
use crate::domain::content::services::{ActionParser, ContentFactory};
use crate::domain::notifications::models::NotificationKind;
use crate::domain::shared::models::CommentId;

/// Arranges the blocks of a notification into the groups shown by the details screen.
pub struct ContentGroupFactory<'a> {
    content_factory: &'a ContentFactory,
    action_parser: &'a dyn ActionParser,
    parent: &'a ContentParent,
}

impl<'a> ContentGroupFactory<'a> {
    pub fn new(
        content_factory: &'a ContentFactory,
        action_parser: &'a dyn ActionParser,
        parent: &'a ContentParent,
    ) -> Self {
        Self {
            content_factory,
            action_parser,
            parent,
        }
    }

    pub fn subject_group(&self, raw: &[Value]) -> Option<ContentGroup> {
        self.single_group(GroupKind::Subject, raw)
    }

    pub fn header_group(&self, raw: &[Value]) -> Option<ContentGroup> {
        self.single_group(GroupKind::Header, raw)
    }

    pub fn body_groups(
        &self,
        raw: &[Value],
        kind: NotificationKind,
        reply_comment_id: Option<CommentId>,
    ) -> Vec<ContentGroup> {
        let blocks = self.blocks(raw);

        match kind {
            NotificationKind::Comment => comment_groups(blocks, reply_comment_id),
            _ => default_groups(blocks, kind.has_footer()),
        }
    }

    fn single_group(&self, kind: GroupKind, raw: &[Value]) -> Option<ContentGroup> {
        let blocks = self.blocks(raw);
        if blocks.is_empty() {
            return None;
        }
        Some(ContentGroup::new(kind, blocks))
    }

    fn blocks(&self, raw: &[Value]) -> Vec<Arc<FormattableContent>> {
        self.content_factory
            .content(raw, self.action_parser, self.parent)
    }
}

fn default_groups(blocks: Vec<Arc<FormattableContent>>, has_footer: bool) -> Vec<ContentGroup> {
    let count = blocks.len();

    blocks
        .into_iter()
        .enumerate()
        .map(|(idx, block)| {
            let kind = if has_footer && idx + 1 == count {
                GroupKind::Footer
            } else {
                block.kind().into()
            };
            ContentGroup::new(kind, vec![block])
        })
        .collect()
}

/// Comment notes show the comment with its author first, then everything else, then the
/// moderation actions. Without both a comment and a user block there is nothing to show.
fn comment_groups(
    blocks: Vec<Arc<FormattableContent>>,
    reply_comment_id: Option<CommentId>,
) -> Vec<ContentGroup> {
    let comment = blocks
        .iter()
        .find(|block| block.kind() == ContentKind::Comment)
        .cloned();
    let user = blocks
        .iter()
        .find(|block| block.kind() == ContentKind::User)
        .cloned();

    let (Some(comment), Some(user)) = (comment, user) else {
        debug!("Comment notification without a comment and a user block.");
        return vec![];
    };

    let mut groups = vec![ContentGroup::new(
        GroupKind::Comment,
        vec![comment.clone(), user.clone()],
    )];

    for block in blocks {
        if Arc::ptr_eq(&block, &comment) || Arc::ptr_eq(&block, &user) {
            continue;
        }

        let is_reply = reply_comment_id
            .map(|id| block.range_with_comment_id(id).is_some())
            .unwrap_or(false);

        let kind = if is_reply {
            GroupKind::Footer
        } else {
            block.kind().into()
        };
        groups.push(ContentGroup::new(kind, vec![block]));
    }

    groups.push(ContentGroup::new(GroupKind::Actions, vec![comment]));
    groups
}
