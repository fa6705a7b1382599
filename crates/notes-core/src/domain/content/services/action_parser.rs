// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::actions::models::{Action, ActionId};
use crate::util::bool_value;

/// Builds the actions of a content block from its raw `actions` dictionary.
pub trait ActionParser: Send + Sync {
    fn parse(&self, raw: Option<&Map<String, Value>>) -> Vec<Arc<Action>>;
}

/// Reads a map of action identifiers to their current on/off state.
#[derive(Debug, Default, Clone, Copy)]
pub struct NotificationActionParser;

impl ActionParser for NotificationActionParser {
    fn parse(&self, raw: Option<&Map<String, Value>>) -> Vec<Arc<Action>> {
        let Some(raw) = raw else {
            return vec![];
        };

        raw.iter()
            .filter_map(|(key, value)| {
                let Ok(id) = key.parse::<ActionId>() else {
                    debug!("Ignoring unknown action '{key}'.");
                    return None;
                };
                let Some(on) = bool_value(value) else {
                    debug!("Ignoring action '{key}' with invalid state {value}.");
                    return None;
                };
                Some(Arc::new(Action::new(id, on)))
            })
            .collect()
    }
}

/// For content that never offers actions, like activity log entries.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopActionParser;

impl ActionParser for NoopActionParser {
    fn parse(&self, _raw: Option<&Map<String, Value>>) -> Vec<Arc<Action>> {
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_actions() {
        let raw = json!({
            "approve-comment": true,
            "like-comment": false,
            "replyto-comment": 1,
            "share-post": true,
            "spam-comment": "maybe"
        });

        let mut actions = NotificationActionParser
            .parse(raw.as_object())
            .into_iter()
            .map(|action| (action.id(), action.is_on()))
            .collect::<Vec<_>>();
        actions.sort_by_key(|(id, _)| id.to_string());

        assert_eq!(
            vec![
                (ActionId::ApproveComment, true),
                (ActionId::LikeComment, false),
                (ActionId::ReplyToComment, true),
            ],
            actions
        );
        assert!(NotificationActionParser.parse(None).is_empty());
        assert!(NoopActionParser.parse(raw.as_object()).is_empty());
    }
}
