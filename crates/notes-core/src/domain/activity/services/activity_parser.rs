// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::domain::activity::models::{
    Activity, ActivityActor, ActivityParseError, FormattableActivity,
};
use crate::domain::content::models::{ContentGroup, ContentParent, GroupKind};
use crate::domain::content::services::{ContentFactory, NoopActionParser};
use crate::domain::shared::models::ActivityId;
use crate::util::ObjectExt;

pub struct ActivityParser {
    content_factory: Arc<ContentFactory>,
}

impl ActivityParser {
    pub fn new(content_factory: Arc<ContentFactory>) -> Self {
        Self { content_factory }
    }

    pub fn parse(&self, raw: &Value) -> Result<FormattableActivity, ActivityParseError> {
        let raw = raw.as_object().ok_or(ActivityParseError::NotAnObject)?;

        let id = ActivityId::from(
            raw.identifier_for_key("activity_id")
                .ok_or(ActivityParseError::MissingActivityId)?,
        );
        let summary = raw
            .string_for_key("summary")
            .ok_or(ActivityParseError::MissingSummary)?;
        let content = raw
            .object_for_key("content")
            .ok_or(ActivityParseError::MissingContentText)?;
        let text = content
            .string_for_key("text")
            .ok_or(ActivityParseError::MissingContentText)?;
        let published = raw
            .string_for_key("published")
            .ok_or(ActivityParseError::MissingPublishedDate)?;
        let published = DateTime::parse_from_rfc3339(published)
            .map_err(|_| ActivityParseError::InvalidPublishedDate(published.to_string()))?
            .with_timezone(&Utc);

        let parent = ContentParent::Activity(id.clone());
        let block = self
            .content_factory
            .content_block(content, &NoopActionParser, &parent);

        let activity = Activity {
            id,
            summary: summary.to_string(),
            text: text.to_string(),
            name: string(raw, "name"),
            kind: string(raw, "type"),
            gridicon: string(raw, "gridicon"),
            status: string(raw, "status"),
            rewind_id: raw.string_for_key("rewind_id").map(ToString::to_string),
            published,
            actor: raw.object_for_key("actor").map(parse_actor),
            is_rewindable: raw.bool_for_key("is_rewindable").unwrap_or(false),
        };

        Ok(FormattableActivity {
            activity,
            content_group: ContentGroup::new(GroupKind::Activity, vec![Arc::new(block)]),
        })
    }
}

fn string(raw: &Map<String, Value>, key: &str) -> String {
    raw.string_for_key(key).unwrap_or_default().to_string()
}

fn parse_actor(raw: &Map<String, Value>) -> ActivityActor {
    ActivityActor {
        display_name: string(raw, "name"),
        kind: string(raw, "type"),
        wpcom_user_id: raw.number_for_key("wpcom_user_id"),
        avatar_url: raw.url_for_key("icon_url").or_else(|| {
            raw.object_for_key("icon")
                .and_then(|icon| icon.url_for_key("url"))
        }),
        role: string(raw, "role"),
    }
}
