// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use notes_core::domain::content::services::{ContentFactory, NoopActionParser};
use notes_core::dtos::{ContentParent, Font, FormattableContent, NotificationId};
use notes_core::formatter::{
    CacheValue, ContentFormatter, FooterContentStyles, RichTextContentStyles, SubjectContentStyles,
};

fn block(raw: Value) -> FormattableContent {
    ContentFactory::default().content_block(
        raw.as_object().expect("Expected an object"),
        &NoopActionParser,
        &ContentParent::Notification(NotificationId::from("1")),
    )
}

#[test]
fn test_hello_world_noticon() {
    let content = block(json!({
        "text": "Hello world",
        "ranges": [{ "type": "noticon", "indices": [0, 0], "value": "\u{f442}" }]
    }));

    let text = ContentFormatter::default().render(&content, &SubjectContentStyles::new());
    assert_eq!("\u{f442} Hello world", text.as_str());
}

#[test]
fn test_footer_html() {
    let content = block(json!({
        "text": "Reply to Jane",
        "ranges": [{ "type": "link", "indices": [9, 13], "url": "https://example.blog/jane" }]
    }));

    let html = ContentFormatter::default().render_html(&content, &FooterContentStyles::new());
    assert_snapshot!(html, @r#"<span style="color:#a8bece">Reply to </span><a href="https://example.blog/jane"><span style="color:#0087be">Jane</span></a>"#);
}

#[test]
fn test_footer_html_with_noticon() {
    let content = block(json!({
        "text": "Reply to Jane",
        "ranges": [
            { "type": "noticon", "indices": [0, 0], "value": "\u{f442}" },
            { "type": "link", "indices": [9, 13], "url": "https://example.blog/jane" }
        ]
    }));

    let html = ContentFormatter::default().render_html(&content, &FooterContentStyles::new());
    assert_eq!(
        concat!(
            r#"<span class="noticon"><span style="color:#a8bece">"#,
            "\u{f442} ",
            r#"</span></span><span style="color:#a8bece">Reply to </span>"#,
            r#"<a href="https://example.blog/jane"><span style="color:#0087be">Jane</span></a>"#
        ),
        html
    );
}

#[test]
fn test_subject_styles() {
    let content = block(json!({
        "text": "Jane Doe commented on \"Hello World\"",
        "ranges": [
            { "type": "user", "indices": [0, 8], "id": 1 },
            { "type": "post", "indices": [23, 34], "id": 3, "site_id": 2 },
            { "type": "comment", "indices": [90, 95], "id": 4 }
        ]
    }));

    let text = ContentFormatter::default().render(&content, &SubjectContentStyles::new());
    let runs = text
        .runs()
        .into_iter()
        .map(|run| (run.text, run.attributes.bold, run.attributes.italic))
        .collect::<Vec<_>>();

    assert_eq!(
        vec![
            ("Jane Doe", Some(true), None),
            (" commented on ", None, None),
            ("\"Hello World\"", None, Some(true)),
        ],
        runs
    );
    assert!(text
        .runs()
        .iter()
        .all(|run| run.attributes.font == Some(Font::Body) && run.attributes.link.is_none()));
}

#[test]
fn test_astral_text_offsets() {
    let content = block(json!({
        "text": "😀 Jane replied",
        "ranges": [{ "type": "match", "indices": [3, 7] }]
    }));

    let text = ContentFormatter::default().render(&content, &RichTextContentStyles::new());
    let bold = text
        .runs()
        .into_iter()
        .filter(|run| run.attributes.bold == Some(true))
        .map(|run| run.text)
        .collect::<Vec<_>>();

    assert_eq!(vec!["Jane"], bold);
}

#[test]
fn test_cached_html_is_reused() {
    let formatter = ContentFormatter::default();
    let styles = RichTextContentStyles::with_key("note-7");

    let html = formatter.render_html(&block(json!({ "text": "Hi" })), &styles);
    assert_eq!(
        Some(CacheValue::Html(html.clone())),
        formatter.cache_value_for_key("note-7.html")
    );
    assert!(matches!(
        formatter.cache_value_for_key("note-7"),
        Some(CacheValue::StyledText(_))
    ));

    formatter.reset_cache();
    let html = formatter.render_html(&block(json!({ "text": "Bye" })), &styles);
    assert!(html.contains("Bye"));
}
