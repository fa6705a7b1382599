// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use content_group::{ContentGroup, GroupKind};
pub use content_media::{ContentMedia, MediaKind};
pub use content_meta::{ContentMeta, MetaIds};
pub use content_parent::ContentParent;
pub use content_range::{ContentRange, RangeValue};
pub use content_range_kind::ContentRangeKind;
pub use formattable_content::{
    CommentContent, ContentBlock, ContentKind, FormattableContent, TextContent, UserContent,
};

mod content_group;
mod content_media;
mod content_meta;
mod content_parent;
mod content_range;
mod content_range_kind;
mod formattable_content;
