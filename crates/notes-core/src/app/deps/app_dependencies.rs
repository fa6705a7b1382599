// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::domain::actions::services::{CommentService, SiteFollowService};
use crate::domain::content::services::{ActionParser, ContentFactory};

use super::AppConfig;

pub type DynActionParser = Arc<dyn ActionParser>;
pub type DynAppConfig = Arc<AppConfig>;
pub type DynCommentService = Arc<dyn CommentService>;
pub type DynContentFactory = Arc<ContentFactory>;
pub type DynSiteFollowService = Arc<dyn SiteFollowService>;

pub struct AppDependencies {
    pub action_parser: DynActionParser,
    pub comment_service: DynCommentService,
    pub config: DynAppConfig,
    pub content_factory: DynContentFactory,
    pub site_follow_service: DynSiteFollowService,
}
