// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use content_group_factory::ContentGroupFactory;
pub use notification_parser::NotificationParser;

mod content_group_factory;
mod notification_parser;
