// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use action::{Action, ActionCommand, ActionId};
pub use action_context::ActionContext;
pub use action_error::ActionError;

mod action;
mod action_context;
mod action_error;
