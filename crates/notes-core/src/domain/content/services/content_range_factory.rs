// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

use crate::domain::content::models::{ContentRange, ContentRangeKind, RangeValue};
use crate::domain::shared::models::{PostId, SiteId, Utf16Index};
use crate::util::ObjectExt;

pub const DEFAULT_POST_URL_TEMPLATE: &str = "https://wordpress.com/read/blogs/{site_id}/posts/{post_id}";

/// Turns raw range dictionaries into typed `ContentRange`s. Parsing never fails, missing
/// or malformed fields come out as `None`.
#[derive(Debug, Clone)]
pub struct ContentRangeFactory {
    post_url_template: String,
}

impl Default for ContentRangeFactory {
    fn default() -> Self {
        Self::new(DEFAULT_POST_URL_TEMPLATE)
    }
}

impl ContentRangeFactory {
    /// `post_url_template` is used for post ranges without a URL. `{site_id}` and
    /// `{post_id}` are replaced with the range's identifiers.
    pub fn new(post_url_template: impl Into<String>) -> Self {
        Self {
            post_url_template: post_url_template.into(),
        }
    }

    pub fn content_ranges(&self, raw: &[Value]) -> Vec<ContentRange> {
        raw.iter()
            .filter_map(|value| {
                let Some(raw) = value.as_object() else {
                    warn!("Skipping range which is not an object: {value}");
                    return None;
                };
                Some(self.content_range(raw))
            })
            .collect()
    }

    pub fn content_range(&self, raw: &Map<String, Value>) -> ContentRange {
        let range = raw.indices_for_key("indices").unwrap_or_else(|| {
            debug!("Range without valid indices, using an empty range.");
            Utf16Index::new(0)..Utf16Index::new(0)
        });
        let kind = raw
            .string_for_key("type")
            .map(ContentRangeKind::from_tag)
            .unwrap_or_default();
        let url = raw.url_for_key("url");

        let value = match kind {
            ContentRangeKind::Comment => RangeValue::Comment {
                comment_id: raw.number_for_key("id"),
                user_id: raw.number_for_key("user_id"),
                site_id: raw.number_for_key("site_id"),
                post_id: raw.number_for_key("post_id"),
                url,
            },
            ContentRangeKind::Noticon => RangeValue::Noticon {
                icon: raw.string_for_key("value").unwrap_or_default().to_string(),
            },
            ContentRangeKind::Post => {
                let site_id = raw.number_for_key("site_id");
                let post_id = raw.number_for_key("id");
                RangeValue::Post {
                    site_id,
                    post_id,
                    url: url.or_else(|| self.post_url(site_id, post_id)),
                }
            }
            ContentRangeKind::Site => RangeValue::Site {
                site_id: raw.number_for_key("id"),
                url,
            },
            ContentRangeKind::User => RangeValue::User {
                user_id: raw.number_for_key("id"),
                site_id: raw.number_for_key("site_id"),
                url,
            },
            ContentRangeKind::Blockquote
            | ContentRangeKind::Italic
            | ContentRangeKind::Link
            | ContentRangeKind::Match
            | ContentRangeKind::Stats
            | ContentRangeKind::Follow
            | ContentRangeKind::Scan
            | ContentRangeKind::Default => RangeValue::Link { url },
        };

        ContentRange { kind, range, value }
    }

    fn post_url(&self, site_id: Option<SiteId>, post_id: Option<PostId>) -> Option<Url> {
        let (site_id, post_id) = (site_id?, post_id?);
        let url = self
            .post_url_template
            .replace("{site_id}", &site_id.to_string())
            .replace("{post_id}", &post_id.to_string());

        Url::parse(&url)
            .map_err(|err| warn!("Could not build post URL from '{url}'. {err}"))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::domain::shared::models::{CommentId, UserId};

    use super::*;

    fn range(value: Value) -> ContentRange {
        ContentRangeFactory::default().content_range(value.as_object().unwrap())
    }

    #[test]
    fn test_comment_range() {
        let range = range(json!({
            "type": "comment",
            "indices": [32, 41],
            "id": 4,
            "site_id": 2,
            "post_id": 3,
            "user_id": 1
        }));

        assert_eq!(ContentRangeKind::Comment, range.kind);
        assert_eq!(Some(CommentId::new(4)), range.comment_id());
        assert_eq!(Some(SiteId::new(2)), range.site_id());
        assert_eq!(Some(PostId::new(3)), range.post_id());
        assert_eq!(Some(UserId::new(1)), range.user_id());
        assert_eq!(Utf16Index::new(32)..Utf16Index::new(41), range.range);
        assert_eq!(32, range.location());
        assert_eq!(9, range.length());
    }

    #[test]
    fn test_range_without_type_is_default() {
        let range = range(json!({ "indices": [0, 5], "url": "https://wordpress.com" }));

        assert_eq!(ContentRangeKind::Default, range.kind);
        assert_eq!(Some("https://wordpress.com/"), range.url().map(Url::as_str));

        let range = self::range(json!({ "type": "hyperdrive", "indices": [1, 2] }));
        assert_eq!(ContentRangeKind::Default, range.kind);
        assert_eq!(None, range.url());
    }

    #[test]
    fn test_noticon_range() {
        let range = range(json!({ "type": "noticon", "indices": [0, 0], "value": "\u{f442}" }));

        assert_eq!(ContentRangeKind::Noticon, range.kind);
        assert_eq!(Some("\u{f442}"), range.icon());
        assert_eq!(None, range.url());
        assert_eq!(0, range.length());
    }

    #[test]
    fn test_post_range_synthesizes_url() {
        let range = range(json!({ "type": "post", "indices": [3, 8], "id": "55", "site_id": 7 }));

        assert_eq!(Some(PostId::new(55)), range.post_id());
        assert_eq!(
            Some("https://wordpress.com/read/blogs/7/posts/55"),
            range.url().map(Url::as_str)
        );

        let range = self::range(json!({
            "type": "post",
            "id": 55,
            "site_id": 7,
            "url": "https://example.blog/hello"
        }));
        assert_eq!(
            Some("https://example.blog/hello"),
            range.url().map(Url::as_str)
        );

        let range = self::range(json!({ "type": "post", "id": 55 }));
        assert_eq!(None, range.url());
    }

    #[test]
    fn test_site_and_user_ranges() {
        let site = range(json!({ "type": "site", "id": 9, "indices": [0, 4] }));
        assert_eq!(Some(SiteId::new(9)), site.site_id());

        let user = range(json!({ "type": "user", "id": 10, "site_id": 11 }));
        assert_eq!(Some(UserId::new(10)), user.user_id());
        assert_eq!(Some(SiteId::new(11)), user.site_id());
        assert_eq!(Utf16Index::new(0)..Utf16Index::new(0), user.range);
    }

    #[test]
    fn test_malformed_fields_become_none() {
        let range = range(json!({
            "type": "comment",
            "indices": "nope",
            "id": "four",
            "site_id": null,
            "url": 12
        }));

        assert_eq!(ContentRangeKind::Comment, range.kind);
        assert_eq!(None, range.comment_id());
        assert_eq!(None, range.site_id());
        assert_eq!(None, range.url());
        assert_eq!(0, range.length());
    }

    #[test]
    fn test_content_ranges_skip_non_objects() {
        let ranges = ContentRangeFactory::default().content_ranges(&[
            json!({ "type": "italic", "indices": [0, 1] }),
            json!("garbage"),
            json!({ "type": "b", "indices": [1, 2] }),
        ]);

        assert_eq!(
            vec![ContentRangeKind::Italic, ContentRangeKind::Default],
            ranges.iter().map(|range| range.kind).collect::<Vec<_>>()
        );
    }
}
