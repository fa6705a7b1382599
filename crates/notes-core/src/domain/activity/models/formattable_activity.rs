// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::content::models::{ContentGroup, FormattableContent};

use super::Activity;

/// An activity together with its formattable content.
#[derive(Debug, Clone)]
pub struct FormattableActivity {
    pub activity: Activity,
    pub content_group: ContentGroup,
}

impl FormattableActivity {
    pub fn content(&self) -> Option<&FormattableContent> {
        self.content_group.first_block().map(AsRef::as_ref)
    }

    pub fn text(&self) -> &str {
        &self.activity.text
    }
}
