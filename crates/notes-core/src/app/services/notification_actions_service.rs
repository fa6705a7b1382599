// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::Future;

use tracing::{error, info, warn};

use notes_proc_macros::InjectDependencies;

use crate::app::deps::{DynCommentService, DynSiteFollowService};
use crate::domain::actions::models::{ActionCommand, ActionContext, ActionError, ActionId};
use crate::domain::content::models::FormattableContent;
use crate::domain::shared::models::{CommentId, SiteId};

/// Executes the actions offered by notification blocks against the remote services.
///
/// Toggles are applied optimistically: the action's override flips before the request is
/// sent and is either committed or rolled back once the request finished.
#[derive(InjectDependencies)]
pub struct NotificationActionsService {
    #[inject]
    comment_service: DynCommentService,
    #[inject]
    site_follow_service: DynSiteFollowService,
}

impl NotificationActionsService {
    /// Runs the command behind `context.action`, taking the action's current state into
    /// account for toggles.
    pub async fn execute(&self, context: ActionContext<'_>) -> Result<(), ActionError> {
        let block = context.block;
        let action = block
            .action(context.action)
            .ok_or(ActionError::ActionUnavailable(context.action))?;
        let is_on = action.is_on();

        match action.command() {
            ActionCommand::ToggleApproval if is_on => self.unapprove_comment(block).await,
            ActionCommand::ToggleApproval => self.approve_comment(block).await,
            ActionCommand::ToggleFollow if is_on => self.unfollow_site(block).await,
            ActionCommand::ToggleFollow => self.follow_site(block).await,
            ActionCommand::ToggleLike if is_on => self.unlike_comment(block).await,
            ActionCommand::ToggleLike => self.like_comment(block).await,
            ActionCommand::Reply => {
                let content = context.content.ok_or(ActionError::MissingContent)?;
                self.reply_comment(block, &content).await
            }
            ActionCommand::Edit => {
                let content = context.content.ok_or(ActionError::MissingContent)?;
                self.update_comment(block, &content).await
            }
            ActionCommand::MarkAsSpam => self.spam_comment(block).await,
            ActionCommand::Trash => self.delete_comment(block).await,
        }
    }

    pub async fn follow_site(&self, block: &FormattableContent) -> Result<(), ActionError> {
        let site_id = site_id(block)?;
        toggle(
            block,
            ActionId::Follow,
            true,
            self.site_follow_service.follow_site(&site_id),
        )
        .await
    }

    pub async fn unfollow_site(&self, block: &FormattableContent) -> Result<(), ActionError> {
        let site_id = site_id(block)?;
        toggle(
            block,
            ActionId::Follow,
            false,
            self.site_follow_service.unfollow_site(&site_id),
        )
        .await
    }

    pub async fn reply_comment(
        &self,
        block: &FormattableContent,
        content: &str,
    ) -> Result<(), ActionError> {
        let (site_id, comment_id) = comment_ids(block)?;

        match self
            .comment_service
            .reply_to_comment(&site_id, &comment_id, content)
            .await
        {
            Ok(()) => {
                info!("Replied to comment {comment_id} on site {site_id}.");
                Ok(())
            }
            Err(err) => {
                error!("Failed to reply to comment {comment_id}. {err}");
                Err(err.into())
            }
        }
    }

    /// Sends the edited text and shows it locally right away.
    pub async fn update_comment(
        &self,
        block: &FormattableContent,
        content: &str,
    ) -> Result<(), ActionError> {
        let (site_id, comment_id) = comment_ids(block)?;

        let previous_text = block.text_override();
        block.set_text_override(Some(content.to_string()));

        match self
            .comment_service
            .update_comment(&site_id, &comment_id, content)
            .await
        {
            Ok(()) => {
                info!("Updated comment {comment_id} on site {site_id}.");
                Ok(())
            }
            Err(err) => {
                error!("Failed to update comment {comment_id}. {err}");
                block.set_text_override(previous_text);
                Err(err.into())
            }
        }
    }

    /// Likes the comment. Unapproved comments are approved first.
    pub async fn like_comment(&self, block: &FormattableContent) -> Result<(), ActionError> {
        let (site_id, comment_id) = comment_ids(block)?;

        if !block.is_comment_approved() {
            if let Err(err) = self.approve_comment(block).await {
                warn!("Liking comment {comment_id} without approving it. {err}");
            }
        }

        toggle(
            block,
            ActionId::LikeComment,
            true,
            self.comment_service.like_comment(&site_id, &comment_id),
        )
        .await
    }

    pub async fn unlike_comment(&self, block: &FormattableContent) -> Result<(), ActionError> {
        let (site_id, comment_id) = comment_ids(block)?;
        toggle(
            block,
            ActionId::LikeComment,
            false,
            self.comment_service.unlike_comment(&site_id, &comment_id),
        )
        .await
    }

    pub async fn approve_comment(&self, block: &FormattableContent) -> Result<(), ActionError> {
        let (site_id, comment_id) = comment_ids(block)?;
        toggle(
            block,
            ActionId::ApproveComment,
            true,
            self.comment_service.approve_comment(&site_id, &comment_id),
        )
        .await
    }

    pub async fn unapprove_comment(&self, block: &FormattableContent) -> Result<(), ActionError> {
        let (site_id, comment_id) = comment_ids(block)?;
        toggle(
            block,
            ActionId::ApproveComment,
            false,
            self.comment_service.unapprove_comment(&site_id, &comment_id),
        )
        .await
    }

    pub async fn spam_comment(&self, block: &FormattableContent) -> Result<(), ActionError> {
        let (site_id, comment_id) = comment_ids(block)?;
        toggle(
            block,
            ActionId::MarkAsSpam,
            true,
            self.comment_service.spam_comment(&site_id, &comment_id),
        )
        .await
    }

    pub async fn delete_comment(&self, block: &FormattableContent) -> Result<(), ActionError> {
        let (site_id, comment_id) = comment_ids(block)?;
        toggle(
            block,
            ActionId::TrashComment,
            true,
            self.comment_service.delete_comment(&site_id, &comment_id),
        )
        .await
    }
}

/// Sets the override of `action_id` to `value` while `request` runs. On success `value` is
/// committed, on failure the override is dropped again.
async fn toggle(
    block: &FormattableContent,
    action_id: ActionId,
    value: bool,
    request: impl Future<Output = anyhow::Result<()>>,
) -> Result<(), ActionError> {
    let action = block.action(action_id);
    if let Some(action) = action {
        action.set_override(value);
    }

    match request.await {
        Ok(()) => {
            info!("Performed {action_id} ({value}).");
            if let Some(action) = action {
                action.set_on(value);
            }
            Ok(())
        }
        Err(err) => {
            error!("Failed to perform {action_id} ({value}). {err}");
            if let Some(action) = action {
                action.remove_override();
            }
            Err(err.into())
        }
    }
}

fn site_id(block: &FormattableContent) -> Result<SiteId, ActionError> {
    block
        .meta()
        .ids
        .site
        .ok_or(ActionError::MissingIdentifier("site"))
}

fn comment_ids(block: &FormattableContent) -> Result<(SiteId, CommentId), ActionError> {
    let comment_id = block
        .meta()
        .ids
        .comment
        .ok_or(ActionError::MissingIdentifier("comment"))?;
    Ok((site_id(block)?, comment_id))
}
