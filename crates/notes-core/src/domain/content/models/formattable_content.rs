// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use parking_lot::RwLock;
use url::Url;

use crate::domain::actions::models::{Action, ActionId};
use crate::domain::shared::models::{CommentId, UserId};

use super::{ContentMedia, ContentMeta, ContentParent, ContentRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Text,
    Image,
    User,
    Comment,
}

/// The fields shared by every kind of formattable content.
#[derive(Debug, Default)]
pub struct ContentBlock {
    text: Option<String>,
    text_override: RwLock<Option<String>>,
    ranges: Vec<ContentRange>,
    media: Vec<ContentMedia>,
    meta: ContentMeta,
    actions: Vec<Arc<Action>>,
    parent: Option<ContentParent>,
}

impl ContentBlock {
    pub fn new(text: Option<String>) -> Self {
        Self {
            text,
            ..Default::default()
        }
    }

    pub fn with_ranges(mut self, ranges: Vec<ContentRange>) -> Self {
        self.ranges = ranges;
        self
    }

    pub fn with_media(mut self, media: Vec<ContentMedia>) -> Self {
        self.media = media;
        self
    }

    pub fn with_meta(mut self, meta: ContentMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn with_actions(mut self, actions: Vec<Arc<Action>>) -> Self {
        self.actions = actions;
        self
    }

    pub fn with_parent(mut self, parent: ContentParent) -> Self {
        self.parent = Some(parent);
        self
    }
}

impl ContentBlock {
    /// The locally edited text if there is one, the text sent by the server otherwise.
    pub fn text(&self) -> Option<String> {
        self.text_override
            .read()
            .clone()
            .or_else(|| self.text.clone())
    }

    pub fn server_text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn text_override(&self) -> Option<String> {
        self.text_override.read().clone()
    }

    pub fn set_text_override(&self, text: Option<String>) {
        *self.text_override.write() = text;
    }

    pub fn ranges(&self) -> &[ContentRange] {
        &self.ranges
    }

    pub fn media(&self) -> &[ContentMedia] {
        &self.media
    }

    pub fn meta(&self) -> &ContentMeta {
        &self.meta
    }

    pub fn actions(&self) -> &[Arc<Action>] {
        &self.actions
    }

    pub fn parent(&self) -> Option<&ContentParent> {
        self.parent.as_ref()
    }

    pub fn action(&self, id: ActionId) -> Option<&Arc<Action>> {
        self.actions.iter().find(|action| action.id() == id)
    }

    pub fn is_action_enabled(&self, id: ActionId) -> bool {
        self.action(id).is_some()
    }

    pub fn is_action_on(&self, id: ActionId) -> bool {
        self.action(id).map(|action| action.is_on()).unwrap_or(false)
    }

    pub fn range_with_url(&self, url: &Url) -> Option<&ContentRange> {
        self.ranges.iter().find(|range| range.url() == Some(url))
    }

    pub fn range_with_comment_id(&self, comment_id: CommentId) -> Option<&ContentRange> {
        self.ranges
            .iter()
            .find(|range| range.comment_id() == Some(comment_id))
    }

    pub fn image_urls(&self) -> Vec<&Url> {
        self.media
            .iter()
            .filter(|media| media.is_image() || media.is_badge())
            .filter_map(|media| media.url.as_ref())
            .collect()
    }

    /// A comment counts as approved unless it offers an approve action that is off.
    pub fn is_comment_approved(&self) -> bool {
        self.is_action_on(ActionId::ApproveComment)
            || !self.is_action_enabled(ActionId::ApproveComment)
    }
}

#[derive(Debug)]
pub struct TextContent(ContentBlock);

#[derive(Debug)]
pub struct UserContent(ContentBlock);

#[derive(Debug)]
pub struct CommentContent(ContentBlock);

impl TextContent {
    pub fn kind(&self) -> ContentKind {
        match self.0.media.first() {
            Some(media) if media.is_image() || media.is_badge() => ContentKind::Image,
            _ => ContentKind::Text,
        }
    }
}

impl UserContent {
    pub fn user_id(&self) -> Option<UserId> {
        self.0.meta.ids.user
    }

    pub fn is_following(&self) -> bool {
        self.0.is_action_on(ActionId::Follow)
    }

    pub fn links_home(&self) -> Option<&Url> {
        self.0.meta.home_url.as_ref()
    }

    pub fn titles_home(&self) -> Option<&str> {
        self.0.meta.home_title.as_deref()
    }
}

impl CommentContent {
    pub fn comment_id(&self) -> Option<CommentId> {
        self.0.meta.ids.comment
    }

    pub fn is_approved(&self) -> bool {
        self.0.is_comment_approved()
    }

    pub fn is_liked(&self) -> bool {
        self.0.is_action_on(ActionId::LikeComment)
    }
}

macro_rules! content_wrapper {
    ($t:ident) => {
        impl From<ContentBlock> for $t {
            fn from(value: ContentBlock) -> Self {
                Self(value)
            }
        }

        impl Deref for $t {
            type Target = ContentBlock;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }
    };
}

content_wrapper!(TextContent);
content_wrapper!(UserContent);
content_wrapper!(CommentContent);

/// A parsed notification or activity block, typed by its `type` discriminator.
#[derive(Debug)]
pub enum FormattableContent {
    Text(TextContent),
    User(UserContent),
    Comment(CommentContent),
}

impl FormattableContent {
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Text(content) => content.kind(),
            Self::User(_) => ContentKind::User,
            Self::Comment(_) => ContentKind::Comment,
        }
    }

    pub fn block(&self) -> &ContentBlock {
        match self {
            Self::Text(content) => &content.0,
            Self::User(content) => &content.0,
            Self::Comment(content) => &content.0,
        }
    }

    pub fn as_user(&self) -> Option<&UserContent> {
        match self {
            Self::User(content) => Some(content),
            _ => None,
        }
    }

    pub fn as_comment(&self) -> Option<&CommentContent> {
        match self {
            Self::Comment(content) => Some(content),
            _ => None,
        }
    }
}

impl Deref for FormattableContent {
    type Target = ContentBlock;

    fn deref(&self) -> &Self::Target {
        self.block()
    }
}
