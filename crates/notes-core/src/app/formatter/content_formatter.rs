// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::Arc;

use itertools::Itertools;
use parking_lot::Mutex;
use tracing::debug;

use notes_markup::{StyledText, TextAttributes, Utf16Index};
use notes_proc_macros::InjectDependencies;

use crate::app::deps::{AppConfig, DynAppConfig};
use crate::domain::content::models::{ContentRange, FormattableContent, RangeValue};

use super::ContentStyles;

#[derive(Debug, Clone, PartialEq)]
pub enum CacheValue {
    StyledText(StyledText),
    Html(String),
}

/// Renders content blocks into styled text.
#[derive(InjectDependencies)]
pub struct ContentFormatter {
    #[inject(config)]
    config: DynAppConfig,
    cache: Mutex<HashMap<String, CacheValue>>,
}

impl Default for ContentFormatter {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl ContentFormatter {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            cache: Default::default(),
        }
    }

    /// Renders `content` with `styles`. The result is cached when `styles` provides a key.
    pub fn render(&self, content: &FormattableContent, styles: &dyn ContentStyles) -> StyledText {
        let Some(key) = styles.key() else {
            return self.styled_text(content, styles);
        };

        if let Some(CacheValue::StyledText(text)) = self.cache_value_for_key(key) {
            return text;
        }

        let text = self.styled_text(content, styles);
        self.set_cache_value(key, Some(CacheValue::StyledText(text.clone())));
        text
    }

    /// Renders `content` as inline HTML. Cached under `"{key}.html"` when `styles`
    /// provides a key.
    pub fn render_html(&self, content: &FormattableContent, styles: &dyn ContentStyles) -> String {
        let key = styles.key().map(|key| format!("{key}.html"));

        if let Some(CacheValue::Html(html)) =
            key.as_deref().and_then(|key| self.cache_value_for_key(key))
        {
            return html;
        }

        let html = self.render(content, styles).to_html();
        if let Some(key) = key {
            self.set_cache_value(&key, Some(CacheValue::Html(html.clone())));
        }
        html
    }

    /// Stores `value` under `key`. Passing `None` removes the entry.
    pub fn set_cache_value(&self, key: &str, value: Option<CacheValue>) {
        let mut cache = self.cache.lock();
        match value {
            Some(value) => {
                cache.insert(key.to_string(), value);
            }
            None => {
                cache.remove(key);
            }
        }
    }

    pub fn cache_value_for_key(&self, key: &str) -> Option<CacheValue> {
        self.cache.lock().get(key).cloned()
    }

    pub fn reset_cache(&self) {
        self.cache.lock().clear()
    }
}

impl ContentFormatter {
    fn styled_text(&self, content: &FormattableContent, styles: &dyn ContentStyles) -> StyledText {
        let Some(text) = content.text() else {
            return StyledText::default();
        };

        let mut styled = StyledText::new(text, styles.attributes());

        if let Some(attributes) = styles.quote_attributes() {
            apply_quote_attributes(&mut styled, attributes);
        }

        let mut shift = 0isize;
        for range in content.ranges() {
            shift += apply_range(&mut styled, range, shift, styles);
        }

        if self.config.trim_newlines {
            styled.trim_newlines()
        } else {
            styled
        }
    }
}

fn apply_quote_attributes(styled: &mut StyledText, attributes: TextAttributes) {
    let quotes = styled
        .as_str()
        .match_indices('"')
        .map(|(idx, _)| idx)
        .collect::<Vec<_>>();

    for (start, end) in quotes.into_iter().tuples() {
        // Quotes are ASCII so both offsets sit on char boundaries.
        let _ = styled.add_attributes_in_byte_range(start..end + 1, attributes.clone());
    }
}

/// Applies a single range and returns the number of UTF-16 units inserted into the text.
fn apply_range(
    styled: &mut StyledText,
    range: &ContentRange,
    shift: isize,
    styles: &dyn ContentStyles,
) -> isize {
    let (Some(start), Some(end)) = (
        range.range.start.checked_add_signed(shift),
        range.range.end.checked_add_signed(shift),
    ) else {
        debug!("Skipping {} range with invalid shift {shift}.", range.kind);
        return 0;
    };

    if let RangeValue::Noticon { icon } = &range.value {
        return apply_noticon(styled, icon, start, end, styles);
    }

    let mut attributes = styles.range_attributes(range.kind).unwrap_or_default();
    if let (Some(url), Some(link_attributes)) = (range.url(), styles.link_attributes()) {
        attributes = attributes.merging(&link_attributes.with_link(url.clone()));
    }

    if let Err(err) = styled.add_attributes(start..end, attributes) {
        debug!(
            "Skipping {} range {}..{} in text of length {}. {err}",
            range.kind,
            start.value(),
            end.value(),
            styled.utf16_len()
        );
    }
    0
}

fn apply_noticon(
    styled: &mut StyledText,
    icon: &str,
    start: Utf16Index,
    end: Utf16Index,
    styles: &dyn ContentStyles,
) -> isize {
    if icon.is_empty() {
        debug!("Skipping noticon range without an icon.");
        return 0;
    }

    let glyph = format!("{icon} ");
    let glyph_len = Utf16Index::end_of(&glyph).value();

    if let Err(err) = styled.insert(start, &glyph, styles.attributes()) {
        debug!(
            "Skipping noticon at {} in text of length {}. {err}",
            start.value(),
            styled.utf16_len()
        );
        return 0;
    }

    let Some(styled_end) = end.checked_add_signed(glyph_len as isize) else {
        debug!("Skipping noticon styling for range ending at {}.", end.value());
        return glyph_len as isize;
    };

    if let Err(err) = styled.add_attributes(start..styled_end, styles.noticon_attributes()) {
        debug!("Could not style noticon. {err}");
    }

    glyph_len as isize
}
