// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::shared::models::{CommentId, SiteId};

/// Moderation and reply requests for comments on a site.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait CommentService: Send + Sync {
    async fn approve_comment(&self, site_id: &SiteId, comment_id: &CommentId) -> Result<()>;
    async fn unapprove_comment(&self, site_id: &SiteId, comment_id: &CommentId) -> Result<()>;
    async fn like_comment(&self, site_id: &SiteId, comment_id: &CommentId) -> Result<()>;
    async fn unlike_comment(&self, site_id: &SiteId, comment_id: &CommentId) -> Result<()>;
    async fn spam_comment(&self, site_id: &SiteId, comment_id: &CommentId) -> Result<()>;
    async fn delete_comment(&self, site_id: &SiteId, comment_id: &CommentId) -> Result<()>;
    async fn reply_to_comment(
        &self,
        site_id: &SiteId,
        comment_id: &CommentId,
        content: &str,
    ) -> Result<()>;
    async fn update_comment(
        &self,
        site_id: &SiteId,
        comment_id: &CommentId,
        content: &str,
    ) -> Result<()>;
}
