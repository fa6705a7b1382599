// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde_json::{Map, Value};
use url::Url;

use crate::domain::shared::models::{CommentId, PostId, SiteId, UserId};
use crate::util::ObjectExt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaIds {
    pub user: Option<UserId>,
    pub site: Option<SiteId>,
    pub post: Option<PostId>,
    pub comment: Option<CommentId>,
    pub reply_comment: Option<CommentId>,
}

/// The `meta` dictionary of a block or notification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentMeta {
    pub ids: MetaIds,
    pub home_url: Option<Url>,
    pub home_title: Option<String>,
}

impl From<&Map<String, Value>> for ContentMeta {
    fn from(raw: &Map<String, Value>) -> Self {
        let ids = raw
            .object_for_key("ids")
            .map(|ids| MetaIds {
                user: ids.number_for_key("user"),
                site: ids.number_for_key("site"),
                post: ids.number_for_key("post"),
                comment: ids.number_for_key("comment"),
                reply_comment: ids.number_for_key("reply_comment"),
            })
            .unwrap_or_default();

        ContentMeta {
            ids,
            home_url: raw
                .object_for_key("links")
                .and_then(|links| links.url_for_key("home")),
            home_title: raw
                .object_for_key("titles")
                .and_then(|titles| titles.string_for_key("home"))
                .map(ToString::to_string),
        }
    }
}
