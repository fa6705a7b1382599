// notes-client/notes-markup
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Body,
    /// The icon font used to draw noticon glyphs.
    Noticon,
    Monospace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// A set of optional text attributes. Unset attributes inherit whatever lies underneath
/// when attribute sets are layered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextAttributes {
    pub font: Option<Font>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub color: Option<Color>,
    pub link: Option<Url>,
}

impl TextAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = Some(true);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_link(mut self, link: Url) -> Self {
        self.link = Some(link);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Layers `other` on top of `self`. Attributes set in `other` win.
    pub fn merging(&self, other: &TextAttributes) -> TextAttributes {
        TextAttributes {
            font: other.font.or(self.font),
            bold: other.bold.or(self.bold),
            italic: other.italic.or(self.italic),
            color: other.color.or(self.color),
            link: other.link.clone().or_else(|| self.link.clone()),
        }
    }
}
