// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::content::models::{
    ContentBlock, ContentMedia, ContentMeta, ContentParent, FormattableContent,
};
use crate::util::ObjectExt;

use super::{ActionParser, ContentRangeFactory};

/// Builds typed content blocks from raw block dictionaries.
#[derive(Debug, Clone, Default)]
pub struct ContentFactory {
    range_factory: ContentRangeFactory,
}

impl ContentFactory {
    pub fn new(range_factory: ContentRangeFactory) -> Self {
        Self { range_factory }
    }

    pub fn range_factory(&self) -> &ContentRangeFactory {
        &self.range_factory
    }

    /// Returns one block per object in `raw_blocks`, in order.
    pub fn content(
        &self,
        raw_blocks: &[Value],
        action_parser: &dyn ActionParser,
        parent: &ContentParent,
    ) -> Vec<Arc<FormattableContent>> {
        raw_blocks
            .iter()
            .filter_map(|value| {
                let Some(raw) = value.as_object() else {
                    warn!("Skipping content block which is not an object: {value}");
                    return None;
                };
                Some(Arc::new(self.content_block(raw, action_parser, parent)))
            })
            .collect()
    }

    pub fn content_block(
        &self,
        raw: &Map<String, Value>,
        action_parser: &dyn ActionParser,
        parent: &ContentParent,
    ) -> FormattableContent {
        let block = ContentBlock::new(raw.string_for_key("text").map(ToString::to_string))
            .with_ranges(self.range_factory.content_ranges(raw.array_for_key("ranges")))
            .with_media(
                raw.array_for_key("media")
                    .iter()
                    .filter_map(Value::as_object)
                    .map(ContentMedia::from)
                    .collect(),
            )
            .with_meta(
                raw.object_for_key("meta")
                    .map(ContentMeta::from)
                    .unwrap_or_default(),
            )
            .with_actions(action_parser.parse(raw.object_for_key("actions")))
            .with_parent(parent.clone());

        match raw.string_for_key("type") {
            Some("comment") => FormattableContent::Comment(block.into()),
            Some("user") => FormattableContent::User(block.into()),
            _ => FormattableContent::Text(block.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::domain::actions::models::ActionId;
    use crate::domain::content::models::ContentKind;
    use crate::domain::content::services::{NoopActionParser, NotificationActionParser};
    use crate::domain::shared::models::{CommentId, NotificationId};

    use super::*;

    fn parent() -> ContentParent {
        ContentParent::Notification(NotificationId::from("1"))
    }

    #[test]
    fn test_variant_follows_type() {
        let blocks = ContentFactory::default().content(
            &[
                json!({ "type": "comment", "text": "Nice post!" }),
                json!({ "type": "user", "text": "Jane" }),
                json!({ "text": "Plain" }),
                json!(42),
                json!({ "type": "post", "text": "Unknown type" }),
            ],
            &NotificationActionParser,
            &parent(),
        );

        assert_eq!(
            vec![
                ContentKind::Comment,
                ContentKind::User,
                ContentKind::Text,
                ContentKind::Text
            ],
            blocks.iter().map(|b| b.kind()).collect::<Vec<_>>()
        );
        assert_eq!(Some(&parent()), blocks[0].parent());
    }

    #[test]
    fn test_block_fields() {
        let raw = json!({
            "type": "comment",
            "text": "Thanks for the follow",
            "ranges": [{ "type": "user", "indices": [0, 6], "id": 1 }],
            "media": [{ "type": "image", "url": "https://example.com/a.png" }],
            "meta": { "ids": { "comment": 77 } },
            "actions": { "like-comment": true, "approve-comment": false }
        });

        let factory = ContentFactory::default();
        let raw = raw.as_object().unwrap();
        let block = factory.content_block(raw, &NotificationActionParser, &parent());

        assert_eq!(Some("Thanks for the follow".to_string()), block.text());
        assert_eq!(1, block.ranges().len());
        assert_eq!(1, block.media().len());
        assert_eq!(Some(CommentId::new(77)), block.meta().ids.comment);
        assert!(block.is_action_on(ActionId::LikeComment));
        assert!(!block.is_action_on(ActionId::ApproveComment));
        assert!(block.is_action_enabled(ActionId::ApproveComment));

        let comment = block.as_comment().unwrap();
        assert!(comment.is_liked());
        assert!(!comment.is_approved());

        let block = factory.content_block(raw, &NoopActionParser, &parent());
        assert!(block.actions().is_empty());
    }
}
