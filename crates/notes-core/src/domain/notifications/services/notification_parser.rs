// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{error, warn};

use crate::domain::content::models::{ContentMeta, ContentParent};
use crate::domain::content::services::{ActionParser, ContentFactory};
use crate::domain::notifications::models::{Notification, NotificationKind, NotificationParseError};
use crate::domain::shared::models::NotificationId;
use crate::util::ObjectExt;

use super::ContentGroupFactory;

pub struct NotificationParser {
    content_factory: Arc<ContentFactory>,
    action_parser: Arc<dyn ActionParser>,
}

impl NotificationParser {
    pub fn new(content_factory: Arc<ContentFactory>, action_parser: Arc<dyn ActionParser>) -> Self {
        Self {
            content_factory,
            action_parser,
        }
    }

    pub fn parse(&self, raw: &Value) -> Result<Notification, NotificationParseError> {
        let raw = raw.as_object().ok_or(NotificationParseError::NotAnObject)?;
        let id = NotificationId::from(
            raw.identifier_for_key("id")
                .ok_or(NotificationParseError::MissingId)?,
        );

        let kind = raw
            .string_for_key("type")
            .map(NotificationKind::from_tag)
            .unwrap_or_default();
        let meta = raw
            .object_for_key("meta")
            .map(ContentMeta::from)
            .unwrap_or_default();
        let timestamp = raw.string_for_key("timestamp").and_then(|timestamp| {
            DateTime::parse_from_rfc3339(timestamp)
                .map(|date| date.with_timezone(&Utc))
                .map_err(|err| {
                    error!("Could not parse date '{timestamp}' of notification {id}. {err}")
                })
                .ok()
        });

        let parent = ContentParent::Notification(id.clone());
        let groups =
            ContentGroupFactory::new(&self.content_factory, self.action_parser.as_ref(), &parent);

        Ok(Notification {
            note_hash: raw.identifier_for_key("note_hash"),
            read: raw.bool_for_key("read").unwrap_or(false),
            icon: raw.string_for_key("icon").map(ToString::to_string),
            noticon: raw.string_for_key("noticon").map(ToString::to_string),
            url: raw.string_for_key("url").map(ToString::to_string),
            title: raw.string_for_key("title").map(ToString::to_string),
            subject_group: groups.subject_group(raw.array_for_key("subject")),
            header_group: groups.header_group(raw.array_for_key("header")),
            body_groups: groups.body_groups(
                raw.array_for_key("body"),
                kind,
                meta.ids.reply_comment,
            ),
            id,
            kind,
            timestamp,
            meta,
        })
    }

    /// Parses a list of notifications, dropping the ones that cannot be parsed.
    pub fn parse_all(&self, raw: &[Value]) -> Vec<Notification> {
        raw.iter()
            .filter_map(|raw| {
                self.parse(raw)
                    .map_err(|err| warn!("Dropping notification. {err}"))
                    .ok()
            })
            .collect()
    }
}
