// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::content::models::FormattableContent;

use super::ActionId;

/// An action to execute on a block, together with the text entered by the user for
/// replies and edits.
#[derive(Debug, Clone)]
pub struct ActionContext<'a> {
    pub block: &'a FormattableContent,
    pub action: ActionId,
    pub content: Option<String>,
}

impl<'a> ActionContext<'a> {
    pub fn new(block: &'a FormattableContent, action: ActionId) -> Self {
        Self {
            block,
            action,
            content: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}
