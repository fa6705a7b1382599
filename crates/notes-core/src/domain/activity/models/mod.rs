// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use activity::{Activity, ActivityActor, ActivityParseError};
pub use formattable_activity::FormattableActivity;

mod activity;
mod formattable_activity;
