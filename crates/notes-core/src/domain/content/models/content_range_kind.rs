// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::{Display, EnumString};

/// Describes how the text covered by a `ContentRange` is styled or linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ContentRangeKind {
    User,
    Post,
    Site,
    Comment,
    Noticon,
    Blockquote,
    #[strum(to_string = "italic", serialize = "i")]
    Italic,
    Link,
    Match,
    #[strum(serialize = "stat")]
    Stats,
    Follow,
    Scan,
    #[default]
    Default,
}

impl ContentRangeKind {
    /// Parses a server tag. Unknown tags fall back to `ContentRangeKind::Default`.
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!(ContentRangeKind::User, ContentRangeKind::from_tag("user"));
        assert_eq!(ContentRangeKind::Italic, ContentRangeKind::from_tag("i"));
        assert_eq!(ContentRangeKind::Italic, ContentRangeKind::from_tag("italic"));
        assert_eq!(ContentRangeKind::Stats, ContentRangeKind::from_tag("stat"));
        assert_eq!(ContentRangeKind::Default, ContentRangeKind::from_tag("sparkles"));
        assert_eq!("italic", ContentRangeKind::Italic.to_string());
        assert_eq!("blockquote", ContentRangeKind::Blockquote.to_string());
    }
}
