// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use thiserror::Error;
use url::Url;

use crate::domain::shared::models::{ActivityId, UserId};

#[derive(Error, Debug, PartialEq)]
pub enum ActivityParseError {
    #[error("Expected the activity to be a JSON object.")]
    NotAnObject,
    #[error("The activity has no id.")]
    MissingActivityId,
    #[error("The activity has no summary.")]
    MissingSummary,
    #[error("The activity has no content text.")]
    MissingContentText,
    #[error("The activity has no published date.")]
    MissingPublishedDate,
    #[error("Invalid published date '{0}'.")]
    InvalidPublishedDate(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityActor {
    pub display_name: String,
    pub kind: String,
    pub wpcom_user_id: Option<UserId>,
    pub avatar_url: Option<Url>,
    pub role: String,
}

impl ActivityActor {
    pub fn is_jetpack(&self) -> bool {
        self.kind == "Application" && self.display_name == "Jetpack"
    }
}

/// An entry of a site's activity log.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: ActivityId,
    pub summary: String,
    pub text: String,
    pub name: String,
    pub kind: String,
    pub gridicon: String,
    pub status: String,
    pub rewind_id: Option<String>,
    pub published: DateTime<Utc>,
    pub actor: Option<ActivityActor>,
    pub(crate) is_rewindable: bool,
}

impl Activity {
    pub fn is_rewindable(&self) -> bool {
        self.is_rewindable && self.rewind_id.is_some()
    }

    pub fn is_rewind_complete(&self) -> bool {
        self.name == "rewind__complete"
    }
}
