// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::RwLock;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum ActionId {
    #[strum(serialize = "approve-comment")]
    ApproveComment,
    #[strum(serialize = "follow")]
    Follow,
    #[strum(serialize = "like-comment")]
    LikeComment,
    #[strum(serialize = "replyto-comment")]
    ReplyToComment,
    #[strum(serialize = "spam-comment")]
    MarkAsSpam,
    #[strum(serialize = "trash-comment")]
    TrashComment,
    #[strum(serialize = "edit-comment")]
    EditComment,
}

/// What executing an action does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionCommand {
    ToggleApproval,
    ToggleFollow,
    ToggleLike,
    Reply,
    Edit,
    MarkAsSpam,
    Trash,
}

impl ActionId {
    pub fn command(&self) -> ActionCommand {
        match self {
            Self::ApproveComment => ActionCommand::ToggleApproval,
            Self::Follow => ActionCommand::ToggleFollow,
            Self::LikeComment => ActionCommand::ToggleLike,
            Self::ReplyToComment => ActionCommand::Reply,
            Self::MarkAsSpam => ActionCommand::MarkAsSpam,
            Self::TrashComment => ActionCommand::Trash,
            Self::EditComment => ActionCommand::Edit,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ActionState {
    on: bool,
    override_value: Option<bool>,
}

/// A toggleable action offered by a content block. The state may be flipped by a request
/// completing on another thread while the block is being read.
#[derive(Debug)]
pub struct Action {
    id: ActionId,
    state: RwLock<ActionState>,
}

impl Action {
    pub fn new(id: ActionId, on: bool) -> Self {
        Self {
            id,
            state: RwLock::new(ActionState {
                on,
                override_value: None,
            }),
        }
    }

    pub fn id(&self) -> ActionId {
        self.id
    }

    pub fn command(&self) -> ActionCommand {
        self.id.command()
    }

    /// The optimistic override if one is set, the server state otherwise.
    pub fn is_on(&self) -> bool {
        let state = self.state.read();
        state.override_value.unwrap_or(state.on)
    }

    /// Commits `on` and drops any pending override.
    pub fn set_on(&self, on: bool) {
        let mut state = self.state.write();
        state.on = on;
        state.override_value = None;
    }

    pub fn set_override(&self, value: bool) {
        self.state.write().override_value = Some(value);
    }

    pub fn remove_override(&self) {
        self.state.write().override_value = None;
    }

    pub fn has_override(&self) -> bool {
        self.state.read().override_value.is_some()
    }
}
