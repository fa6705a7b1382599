// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use notification_actions_service::NotificationActionsService;
pub use notifications_service::NotificationsService;

mod notification_actions_service;
mod notifications_service;
