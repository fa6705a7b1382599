// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod actions;
pub mod activity;
pub mod content;
pub mod notifications;
pub mod shared;
