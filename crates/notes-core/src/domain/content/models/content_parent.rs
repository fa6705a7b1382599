// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::{ActivityId, NotificationId};

/// Identifies the notification or activity a content block was parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentParent {
    Notification(NotificationId),
    Activity(ActivityId),
}
