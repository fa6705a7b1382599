// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use notes_markup::{Font, TextAttributes};

use crate::domain::content::models::ContentRangeKind;

pub mod palette {
    use notes_markup::Color;

    pub const BLUE: Color = Color::rgb(0, 135, 190);
    pub const DARK_GREY: Color = Color::rgb(46, 68, 83);
    pub const GREY: Color = Color::rgb(135, 166, 188);
    pub const LIGHT_GREY: Color = Color::rgb(168, 190, 206);
}

/// Describes how a content block is rendered.
pub trait ContentStyles: Send + Sync {
    /// Applied to the whole text before any range.
    fn attributes(&self) -> TextAttributes;

    /// Applied to every pair of double quotes and the text in between.
    fn quote_attributes(&self) -> Option<TextAttributes> {
        None
    }

    fn range_attributes(&self, _kind: ContentRangeKind) -> Option<TextAttributes> {
        None
    }

    /// Applied on top of the range attributes to ranges that carry a URL.
    fn link_attributes(&self) -> Option<TextAttributes> {
        None
    }

    fn noticon_attributes(&self) -> TextAttributes {
        TextAttributes::new().with_font(Font::Noticon)
    }

    /// Rendered output is cached under this key when set.
    fn key(&self) -> Option<&str> {
        None
    }
}

macro_rules! keyed_styles {
    ($(#[$meta:meta])* $t:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $t {
            key: Option<String>,
        }

        impl $t {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn with_key(key: impl Into<String>) -> Self {
                Self {
                    key: Some(key.into()),
                }
            }
        }
    };
}

keyed_styles!(
    /// The first line of a notification in the list.
    SubjectContentStyles
);
keyed_styles!(
    /// The excerpt below the subject.
    SnippetContentStyles
);
keyed_styles!(HeaderContentStyles);
keyed_styles!(FooterContentStyles);
keyed_styles!(
    /// Body text of the notification details.
    RichTextContentStyles
);

impl ContentStyles for SubjectContentStyles {
    fn attributes(&self) -> TextAttributes {
        TextAttributes::new()
            .with_font(Font::Body)
            .with_color(palette::DARK_GREY)
    }

    fn quote_attributes(&self) -> Option<TextAttributes> {
        Some(TextAttributes::new().italic())
    }

    fn range_attributes(&self, kind: ContentRangeKind) -> Option<TextAttributes> {
        match kind {
            ContentRangeKind::User => Some(TextAttributes::new().bold()),
            ContentRangeKind::Post | ContentRangeKind::Comment | ContentRangeKind::Italic => {
                Some(TextAttributes::new().italic())
            }
            ContentRangeKind::Blockquote => Some(TextAttributes::new().with_color(palette::GREY)),
            _ => None,
        }
    }

    fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

impl ContentStyles for SnippetContentStyles {
    fn attributes(&self) -> TextAttributes {
        TextAttributes::new()
            .with_font(Font::Body)
            .with_color(palette::GREY)
    }

    fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

impl ContentStyles for HeaderContentStyles {
    fn attributes(&self) -> TextAttributes {
        TextAttributes::new()
            .with_font(Font::Body)
            .with_color(palette::GREY)
    }

    fn range_attributes(&self, kind: ContentRangeKind) -> Option<TextAttributes> {
        match kind {
            ContentRangeKind::User => Some(TextAttributes::new().bold().with_color(palette::DARK_GREY)),
            ContentRangeKind::Post | ContentRangeKind::Comment => {
                Some(TextAttributes::new().italic())
            }
            _ => None,
        }
    }

    fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

impl ContentStyles for FooterContentStyles {
    fn attributes(&self) -> TextAttributes {
        TextAttributes::new()
            .with_font(Font::Body)
            .with_color(palette::LIGHT_GREY)
    }

    fn link_attributes(&self) -> Option<TextAttributes> {
        Some(TextAttributes::new().with_color(palette::BLUE))
    }

    fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

impl ContentStyles for RichTextContentStyles {
    fn attributes(&self) -> TextAttributes {
        TextAttributes::new()
            .with_font(Font::Body)
            .with_color(palette::DARK_GREY)
    }

    fn range_attributes(&self, kind: ContentRangeKind) -> Option<TextAttributes> {
        match kind {
            ContentRangeKind::Blockquote => {
                Some(TextAttributes::new().italic().with_color(palette::GREY))
            }
            ContentRangeKind::Italic => Some(TextAttributes::new().italic()),
            ContentRangeKind::Match => Some(TextAttributes::new().bold()),
            ContentRangeKind::User => Some(TextAttributes::new().bold()),
            _ => None,
        }
    }

    fn link_attributes(&self) -> Option<TextAttributes> {
        Some(TextAttributes::new().with_color(palette::BLUE))
    }

    fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}
