// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::content::services::DEFAULT_POST_URL_TEMPLATE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Used for post ranges that arrive without a URL. `{site_id}` and `{post_id}` are
    /// replaced with the range's identifiers.
    pub post_url_template: String,
    /// Whether rendered text is stripped of leading and trailing newlines.
    pub trim_newlines: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            post_url_template: DEFAULT_POST_URL_TEMPLATE.to_string(),
            trim_newlines: true,
        }
    }
}
