// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use comment_service::CommentService;
pub use site_follow_service::SiteFollowService;

mod comment_service;
mod site_follow_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::comment_service::MockCommentService;
    pub use super::site_follow_service::MockSiteFollowService;
}
