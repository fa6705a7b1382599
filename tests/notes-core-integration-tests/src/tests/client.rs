// notes-client/notes-core-integration-tests
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use mockall::predicate;
use pretty_assertions::assert_eq;

use notes_core::domain::actions::services::mocks::{MockCommentService, MockSiteFollowService};
use notes_core::dtos::{
    ActionContext, ActionId, AppConfig, CommentId, ContentKind, GroupKind, NotificationKind,
    SiteId,
};
use notes_core::formatter::{SnippetContentStyles, SubjectContentStyles};
use notes_core::test::mock_data::{self, COMMENT_ID, SITE_ID};
use notes_core::Client;

fn client(comment_service: MockCommentService) -> Client {
    Client::builder()
        .set_comment_service(comment_service)
        .set_site_follow_service(MockSiteFollowService::new())
        .set_config(AppConfig {
            post_url_template: "https://reader.example/{site_id}/{post_id}".to_string(),
            ..Default::default()
        })
        .build()
}

#[tokio::test]
async fn test_comment_notification_pipeline() -> Result<()> {
    let mut comment_service = MockCommentService::new();
    comment_service
        .expect_approve_comment()
        .once()
        .with(
            predicate::eq(SiteId::new(SITE_ID)),
            predicate::eq(CommentId::new(COMMENT_ID)),
        )
        .return_once(|_, _| Box::pin(async { Ok(()) }));

    let client = client(comment_service);
    let note = client
        .notifications
        .parse_notification(&mock_data::comment_notification_json())?;

    assert_eq!(NotificationKind::Comment, note.kind);
    assert!(note.is_replied_comment());
    assert!(note.is_unapproved_comment());
    assert_eq!(
        vec![GroupKind::Comment, GroupKind::Footer, GroupKind::Actions],
        note.body_groups.iter().map(|g| g.kind).collect::<Vec<_>>()
    );

    let subject = note.subject_block().expect("Missing subject");
    assert_eq!(
        Some("https://reader.example/2/3"),
        subject.ranges()[1].url().map(|url| url.as_str())
    );

    let subject_text = client
        .formatter
        .render(subject, &SubjectContentStyles::new());
    assert_eq!("Jane Doe commented on Hello World", subject_text.as_str());

    let snippet = note.snippet_block().expect("Missing snippet");
    let snippet_text = client
        .formatter
        .render(snippet, &SnippetContentStyles::new());
    assert_eq!("What a lovely post!", snippet_text.as_str());

    let comment = note
        .content_group(GroupKind::Comment)
        .and_then(|group| group.block_of_kind(ContentKind::Comment))
        .expect("Missing comment block")
        .clone();

    client
        .actions
        .execute(ActionContext::new(&comment, ActionId::ApproveComment))
        .await?;

    assert!(!note.is_unapproved_comment());
    Ok(())
}

#[tokio::test]
async fn test_like_notification() -> Result<()> {
    let client = client(MockCommentService::new());
    let notes = client.notifications.parse_notifications(&[
        mock_data::like_notification_json(),
        serde_json::json!({ "type": "like" }),
    ]);

    assert_eq!(1, notes.len());
    let note = &notes[0];

    assert!(note.read);
    assert!(note.timestamp.is_none());
    assert!(note.is_badge());
    assert!(!note.is_replied_comment());
    assert_eq!(
        vec![GroupKind::User, GroupKind::User, GroupKind::Footer],
        note.body_groups.iter().map(|g| g.kind).collect::<Vec<_>>()
    );
    assert_eq!(
        vec![GroupKind::Header, GroupKind::User, GroupKind::User, GroupKind::Footer],
        note.header_and_body_groups()
            .iter()
            .map(|g| g.kind)
            .collect::<Vec<_>>()
    );

    let subject = note.subject_block().expect("Missing subject");
    let text = client
        .formatter
        .render(subject, &SubjectContentStyles::new());
    assert_eq!(
        "\u{f408} John and Jane liked your post Hello World",
        text.as_str()
    );
    Ok(())
}
