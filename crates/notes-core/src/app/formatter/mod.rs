// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use content_formatter::{CacheValue, ContentFormatter};
pub use content_styles::{
    palette, ContentStyles, FooterContentStyles, HeaderContentStyles, RichTextContentStyles,
    SnippetContentStyles, SubjectContentStyles,
};

mod content_formatter;
mod content_styles;
