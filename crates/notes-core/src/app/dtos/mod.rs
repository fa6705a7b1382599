// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use notes_markup::{Color, Font, StyledRun, StyledText, TextAttributes, Utf16Index};

pub use crate::app::deps::AppConfig;
pub use crate::domain::actions::models::{
    Action, ActionCommand, ActionContext, ActionError, ActionId,
};
pub use crate::domain::activity::models::{
    Activity, ActivityActor, ActivityParseError, FormattableActivity,
};
pub use crate::domain::content::models::{
    CommentContent, ContentBlock, ContentGroup, ContentKind, ContentMedia, ContentMeta,
    ContentParent, ContentRange, ContentRangeKind, FormattableContent, GroupKind, MediaKind,
    MetaIds, RangeValue, TextContent, UserContent,
};
pub use crate::domain::notifications::models::{
    Notification, NotificationKind, NotificationParseError,
};
pub use crate::domain::shared::models::{
    ActivityId, CommentId, NotificationId, PostId, SiteId, UserId,
};
