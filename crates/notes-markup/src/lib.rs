// notes-client/notes-markup
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use attributes::{Color, Font, TextAttributes};
pub use html_writer::HtmlWriter;
pub use string_index::{IndexError, Utf16Index, Utf16RangeExt};
pub use styled_text::{StyleSpan, StyledRun, StyledText};

mod attributes;
mod html_writer;
mod string_index;
mod styled_text;
