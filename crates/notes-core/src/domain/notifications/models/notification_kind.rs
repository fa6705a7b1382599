// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum NotificationKind {
    Comment,
    CommentLike,
    Follow,
    Like,
    Automattcher,
    Post,
    NewPost,
    User,
    #[default]
    Unknown,
}

impl NotificationKind {
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }

    /// Notes whose last body block is rendered as a footer.
    pub fn has_footer(&self) -> bool {
        matches!(self, Self::Follow | Self::Like | Self::CommentLike)
    }
}
