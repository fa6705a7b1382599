// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Range;

use url::Url;

use crate::domain::shared::models::{CommentId, PostId, SiteId, UserId, Utf16Index};

use super::ContentRangeKind;

/// A styled or linked sub-span of a content block's text. `range` is measured in UTF-16
/// code units of the owning text.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRange {
    pub kind: ContentRangeKind,
    pub range: Range<Utf16Index>,
    pub value: RangeValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RangeValue {
    Link {
        url: Option<Url>,
    },
    Comment {
        comment_id: Option<CommentId>,
        user_id: Option<UserId>,
        site_id: Option<SiteId>,
        post_id: Option<PostId>,
        url: Option<Url>,
    },
    /// A glyph of the noticon font which is drawn in front of the range.
    Noticon {
        icon: String,
    },
    Post {
        site_id: Option<SiteId>,
        post_id: Option<PostId>,
        url: Option<Url>,
    },
    Site {
        site_id: Option<SiteId>,
        url: Option<Url>,
    },
    User {
        user_id: Option<UserId>,
        site_id: Option<SiteId>,
        url: Option<Url>,
    },
}

impl ContentRange {
    pub fn new(kind: ContentRangeKind, range: Range<Utf16Index>, value: RangeValue) -> Self {
        Self { kind, range, value }
    }

    pub fn location(&self) -> usize {
        self.range.start.value()
    }

    pub fn length(&self) -> usize {
        self.range.end.value().saturating_sub(self.range.start.value())
    }

    pub fn url(&self) -> Option<&Url> {
        match &self.value {
            RangeValue::Link { url }
            | RangeValue::Comment { url, .. }
            | RangeValue::Post { url, .. }
            | RangeValue::Site { url, .. }
            | RangeValue::User { url, .. } => url.as_ref(),
            RangeValue::Noticon { .. } => None,
        }
    }

    pub fn user_id(&self) -> Option<UserId> {
        match &self.value {
            RangeValue::Comment { user_id, .. } | RangeValue::User { user_id, .. } => *user_id,
            _ => None,
        }
    }

    pub fn site_id(&self) -> Option<SiteId> {
        match &self.value {
            RangeValue::Comment { site_id, .. }
            | RangeValue::Post { site_id, .. }
            | RangeValue::Site { site_id, .. }
            | RangeValue::User { site_id, .. } => *site_id,
            RangeValue::Link { .. } | RangeValue::Noticon { .. } => None,
        }
    }

    pub fn post_id(&self) -> Option<PostId> {
        match &self.value {
            RangeValue::Comment { post_id, .. } | RangeValue::Post { post_id, .. } => *post_id,
            _ => None,
        }
    }

    pub fn comment_id(&self) -> Option<CommentId> {
        match &self.value {
            RangeValue::Comment { comment_id, .. } => *comment_id,
            _ => None,
        }
    }

    pub fn icon(&self) -> Option<&str> {
        match &self.value {
            RangeValue::Noticon { icon } => Some(icon.as_str()),
            _ => None,
        }
    }
}
