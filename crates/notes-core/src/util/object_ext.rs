// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Range;

use serde_json::{Map, Value};
use url::Url;

use notes_markup::Utf16Index;

/// Lenient accessors for decoded JSON objects. Every accessor returns `None` (or an empty
/// slice) for missing keys and values of the wrong type.
pub(crate) trait ObjectExt {
    fn string_for_key(&self, key: &str) -> Option<&str>;
    fn number_for_key<T: From<u64>>(&self, key: &str) -> Option<T>;
    fn bool_for_key(&self, key: &str) -> Option<bool>;
    fn object_for_key(&self, key: &str) -> Option<&Map<String, Value>>;
    fn array_for_key(&self, key: &str) -> &[Value];
    fn url_for_key(&self, key: &str) -> Option<Url>;
    /// A `[start, end]` pair of UTF-16 offsets.
    fn indices_for_key(&self, key: &str) -> Option<Range<Utf16Index>>;
    /// A string, or a number rendered as a string.
    fn identifier_for_key(&self, key: &str) -> Option<String>;
}

impl ObjectExt for Map<String, Value> {
    fn string_for_key(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    fn number_for_key<T: From<u64>>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(number_value).map(T::from)
    }

    fn bool_for_key(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(bool_value)
    }

    fn object_for_key(&self, key: &str) -> Option<&Map<String, Value>> {
        self.get(key).and_then(Value::as_object)
    }

    fn array_for_key(&self, key: &str) -> &[Value] {
        self.get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn url_for_key(&self, key: &str) -> Option<Url> {
        self.string_for_key(key)
            .filter(|url| !url.is_empty())
            .and_then(|url| Url::parse(url).ok())
    }

    fn indices_for_key(&self, key: &str) -> Option<Range<Utf16Index>> {
        let [start, end] = self.array_for_key(key) else {
            return None;
        };
        let (start, end) = (number_value(start)?, number_value(end)?);
        if start > end {
            return None;
        }
        Some(Utf16Index::new(usize::try_from(start).ok()?)..Utf16Index::new(usize::try_from(end).ok()?))
    }

    fn identifier_for_key(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

fn number_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn bool_value(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_u64().map(|n| n != 0),
        Value::String(s) => match s.as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
