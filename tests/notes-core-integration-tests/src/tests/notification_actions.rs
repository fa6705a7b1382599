// notes-client/notes-core-integration-tests
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{anyhow, Result};
use mockall::{predicate, Sequence};
use pretty_assertions::assert_eq;
use serde_json::json;

use notes_core::dtos::{ActionContext, ActionError, ActionId, CommentId, SiteId};
use notes_core::services::NotificationActionsService;
use notes_core::test::mock_data::{self, COMMENT_ID, SITE_ID};
use notes_core::test::MockAppDependencies;

fn site_id() -> SiteId {
    SiteId::new(SITE_ID)
}

fn comment_id() -> CommentId {
    CommentId::new(COMMENT_ID)
}

#[tokio::test]
async fn test_approve_commits_state() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.comment_service
        .expect_approve_comment()
        .once()
        .with(predicate::eq(site_id()), predicate::eq(comment_id()))
        .return_once(|_, _| Box::pin(async { Ok(()) }));

    let block = mock_data::comment_block(json!({ "approve-comment": false }));
    let service = NotificationActionsService::from(&deps.into_deps());

    service
        .execute(ActionContext::new(&block, ActionId::ApproveComment))
        .await?;

    let action = block.action(ActionId::ApproveComment).unwrap();
    assert!(action.is_on());
    assert!(!action.has_override());
    Ok(())
}

#[tokio::test]
async fn test_failed_toggle_rolls_back() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.comment_service
        .expect_unlike_comment()
        .once()
        .return_once(|_, _| Box::pin(async { Err(anyhow!("The network is down")) }));

    let block = mock_data::comment_block(json!({ "like-comment": true }));
    let service = NotificationActionsService::from(&deps.into_deps());

    let result = service
        .execute(ActionContext::new(&block, ActionId::LikeComment))
        .await;

    assert!(matches!(result, Err(ActionError::Service(_))));
    let action = block.action(ActionId::LikeComment).unwrap();
    assert!(action.is_on());
    assert!(!action.has_override());
    Ok(())
}

#[tokio::test]
async fn test_like_approves_unapproved_comment_first() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let mut seq = Sequence::new();

    deps.comment_service
        .expect_approve_comment()
        .once()
        .in_sequence(&mut seq)
        .return_once(|_, _| Box::pin(async { Ok(()) }));
    deps.comment_service
        .expect_like_comment()
        .once()
        .in_sequence(&mut seq)
        .with(predicate::eq(site_id()), predicate::eq(comment_id()))
        .return_once(|_, _| Box::pin(async { Ok(()) }));

    let block = mock_data::comment_block(json!({
        "approve-comment": false,
        "like-comment": false
    }));
    let service = NotificationActionsService::from(&deps.into_deps());

    service.like_comment(&block).await?;

    let comment = block.as_comment().unwrap();
    assert!(comment.is_approved());
    assert!(comment.is_liked());
    Ok(())
}

#[tokio::test]
async fn test_like_approved_comment_skips_approval() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.comment_service.expect_approve_comment().never();
    deps.comment_service
        .expect_like_comment()
        .once()
        .return_once(|_, _| Box::pin(async { Ok(()) }));

    let block = mock_data::comment_block(json!({
        "approve-comment": true,
        "like-comment": false
    }));
    let service = NotificationActionsService::from(&deps.into_deps());

    service
        .execute(ActionContext::new(&block, ActionId::LikeComment))
        .await?;
    assert!(block.is_action_on(ActionId::LikeComment));
    Ok(())
}

#[tokio::test]
async fn test_reply_requires_content() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.comment_service
        .expect_reply_to_comment()
        .once()
        .with(
            predicate::eq(site_id()),
            predicate::eq(comment_id()),
            predicate::eq("Thank you!"),
        )
        .return_once(|_, _, _| Box::pin(async { Ok(()) }));

    let block = mock_data::comment_block(json!({ "replyto-comment": true }));
    let service = NotificationActionsService::from(&deps.into_deps());

    let result = service
        .execute(ActionContext::new(&block, ActionId::ReplyToComment))
        .await;
    assert!(matches!(result, Err(ActionError::MissingContent)));

    service
        .execute(ActionContext::new(&block, ActionId::ReplyToComment).with_content("Thank you!"))
        .await?;
    Ok(())
}

#[tokio::test]
async fn test_update_comment_overrides_text() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let mut calls = 0;

    deps.comment_service
        .expect_update_comment()
        .times(2)
        .returning(move |_, _, _| {
            calls += 1;
            let result = if calls == 1 {
                Ok(())
            } else {
                Err(anyhow!("Forbidden"))
            };
            Box::pin(async move { result })
        });

    let block = mock_data::comment_block(json!({ "edit-comment": true }));
    let service = NotificationActionsService::from(&deps.into_deps());

    service.update_comment(&block, "A lovely post indeed.").await?;
    assert_eq!(Some("A lovely post indeed.".to_string()), block.text());

    assert!(service.update_comment(&block, "Never mind").await.is_err());
    assert_eq!(Some("A lovely post indeed.".to_string()), block.text());
    assert_eq!(Some("What a lovely post!"), block.server_text());
    Ok(())
}

#[tokio::test]
async fn test_follow_toggles_with_state() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.site_follow_service
        .expect_follow_site()
        .once()
        .with(predicate::eq(site_id()))
        .return_once(|_| Box::pin(async { Ok(()) }));
    deps.site_follow_service
        .expect_unfollow_site()
        .once()
        .with(predicate::eq(site_id()))
        .return_once(|_| Box::pin(async { Ok(()) }));

    let block = mock_data::user_block(false);
    let service = NotificationActionsService::from(&deps.into_deps());

    service
        .execute(ActionContext::new(&block, ActionId::Follow))
        .await?;
    assert!(block.as_user().unwrap().is_following());

    service
        .execute(ActionContext::new(&block, ActionId::Follow))
        .await?;
    assert!(!block.as_user().unwrap().is_following());
    Ok(())
}

#[tokio::test]
async fn test_unavailable_action_and_missing_ids() -> Result<()> {
    let deps = MockAppDependencies::default();
    let service = NotificationActionsService::from(&deps.into_deps());

    let block = mock_data::comment_block(json!({}));
    let result = service
        .execute(ActionContext::new(&block, ActionId::TrashComment))
        .await;
    assert!(matches!(
        result,
        Err(ActionError::ActionUnavailable(ActionId::TrashComment))
    ));

    let user = mock_data::user_block(true);
    let result = service.spam_comment(&user).await;
    assert!(matches!(result, Err(ActionError::MissingIdentifier("comment"))));
    Ok(())
}

#[tokio::test]
async fn test_trash_and_spam() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.comment_service
        .expect_delete_comment()
        .once()
        .return_once(|_, _| Box::pin(async { Ok(()) }));
    deps.comment_service
        .expect_spam_comment()
        .once()
        .return_once(|_, _| Box::pin(async { Ok(()) }));

    let block = mock_data::comment_block(json!({
        "trash-comment": false,
        "spam-comment": false
    }));
    let service = NotificationActionsService::from(&deps.into_deps());

    service
        .execute(ActionContext::new(&block, ActionId::TrashComment))
        .await?;
    service
        .execute(ActionContext::new(&block, ActionId::MarkAsSpam))
        .await?;

    assert!(block.is_action_on(ActionId::TrashComment));
    assert!(block.is_action_on(ActionId::MarkAsSpam));
    Ok(())
}
