// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Range;

use serde_json::{Map, Value};
use strum_macros::EnumString;
use url::Url;

use crate::domain::shared::models::Utf16Index;
use crate::util::ObjectExt;

#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum MediaKind {
    Image,
    Badge,
    Avatar,
    Video,
    #[strum(default)]
    Other(String),
}

/// An image, avatar or badge attached to a content block.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentMedia {
    pub kind: MediaKind,
    pub url: Option<Url>,
    pub range: Range<Utf16Index>,
    pub width: Option<u64>,
    pub height: Option<u64>,
}

impl ContentMedia {
    pub fn is_image(&self) -> bool {
        self.kind == MediaKind::Image
    }

    pub fn is_badge(&self) -> bool {
        self.kind == MediaKind::Badge
    }
}

impl From<&Map<String, Value>> for ContentMedia {
    fn from(raw: &Map<String, Value>) -> Self {
        let kind = raw
            .string_for_key("type")
            .and_then(|kind| kind.parse().ok())
            .unwrap_or_else(|| MediaKind::Other(String::new()));

        ContentMedia {
            kind,
            url: raw.url_for_key("url"),
            range: raw
                .indices_for_key("indices")
                .unwrap_or(Utf16Index::new(0)..Utf16Index::new(0)),
            width: raw.number_for_key("width"),
            height: raw.number_for_key("height"),
        }
    }
}
