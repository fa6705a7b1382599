// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::shared::models::SiteId;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait SiteFollowService: Send + Sync {
    async fn follow_site(&self, site_id: &SiteId) -> Result<()>;
    async fn unfollow_site(&self, site_id: &SiteId) -> Result<()>;
}
