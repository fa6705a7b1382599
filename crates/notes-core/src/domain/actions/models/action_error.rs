// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use thiserror::Error;

use super::ActionId;

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("The content block does not offer the action '{0}'.")]
    ActionUnavailable(ActionId),
    #[error("The content block is missing a {0} id.")]
    MissingIdentifier(&'static str),
    #[error("The action requires text content.")]
    MissingContent,
    #[error(transparent)]
    Service(#[from] anyhow::Error),
}
