// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use notification::{Notification, NotificationParseError};
pub use notification_kind::NotificationKind;

mod notification;
mod notification_kind;
