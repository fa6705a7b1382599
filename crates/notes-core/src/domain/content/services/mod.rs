// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use action_parser::{ActionParser, NoopActionParser, NotificationActionParser};
pub use content_factory::ContentFactory;
pub use content_range_factory::{ContentRangeFactory, DEFAULT_POST_URL_TEMPLATE};

mod action_parser;
mod content_factory;
mod content_range_factory;
