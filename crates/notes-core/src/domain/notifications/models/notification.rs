// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use thiserror::Error;
use url::Url;

use crate::domain::actions::models::ActionId;
use crate::domain::content::models::{
    ContentGroup, ContentKind, ContentMeta, ContentRange, FormattableContent, GroupKind,
};
use crate::domain::shared::models::NotificationId;

use super::NotificationKind;

#[derive(Error, Debug, PartialEq)]
pub enum NotificationParseError {
    #[error("Expected the notification to be a JSON object.")]
    NotAnObject,
    #[error("The notification has no id.")]
    MissingId,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub note_hash: Option<String>,
    pub kind: NotificationKind,
    pub read: bool,
    pub icon: Option<String>,
    pub noticon: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub meta: ContentMeta,
    pub subject_group: Option<ContentGroup>,
    pub header_group: Option<ContentGroup>,
    pub body_groups: Vec<ContentGroup>,
}

impl Notification {
    pub fn subject_block(&self) -> Option<&FormattableContent> {
        self.subject_group
            .as_ref()
            .and_then(|group| group.blocks.first())
            .map(AsRef::as_ref)
    }

    /// The second subject block carries an excerpt of the commented or liked content.
    pub fn snippet_block(&self) -> Option<&FormattableContent> {
        let blocks = &self.subject_group.as_ref()?.blocks;
        if blocks.len() < 2 {
            return None;
        }
        blocks.last().map(AsRef::as_ref)
    }

    pub fn header_and_body_groups(&self) -> Vec<&ContentGroup> {
        self.header_group
            .iter()
            .chain(self.body_groups.iter())
            .collect()
    }

    pub fn content_group(&self, kind: GroupKind) -> Option<&ContentGroup> {
        self.body_groups.iter().find(|group| group.kind == kind)
    }

    /// Searches the body and header blocks for a range pointing at `url`.
    pub fn range_with_url(&self, url: &Url) -> Option<&ContentRange> {
        self.body_groups
            .iter()
            .chain(self.header_group.iter())
            .flat_map(|group| group.blocks.iter())
            .find_map(|block| block.range_with_url(url))
    }

    pub fn is_badge(&self) -> bool {
        self.body_groups
            .iter()
            .flat_map(|group| group.blocks.iter())
            .any(|block| block.media().iter().any(|media| media.is_badge()))
    }

    pub fn is_comment(&self) -> bool {
        self.kind == NotificationKind::Comment
    }

    pub fn is_replied_comment(&self) -> bool {
        self.is_comment() && self.meta.ids.reply_comment.is_some()
    }

    pub fn is_unapproved_comment(&self) -> bool {
        let Some(comment) = self
            .content_group(GroupKind::Comment)
            .and_then(|group| group.block_of_kind(ContentKind::Comment))
        else {
            return false;
        };
        comment.is_action_enabled(ActionId::ApproveComment)
            && !comment.is_action_on(ActionId::ApproveComment)
    }

    pub fn icon_url(&self) -> Option<Url> {
        self.icon.as_deref().and_then(|url| Url::parse(url).ok())
    }

    pub fn resource_url(&self) -> Option<Url> {
        self.url.as_deref().and_then(|url| Url::parse(url).ok())
    }
}
