// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{
    AppConfig, AppDependencies, DynActionParser, DynCommentService, DynSiteFollowService,
};
use crate::app::formatter::ContentFormatter;
use crate::app::services::{NotificationActionsService, NotificationsService};
use crate::client::ClientInner;
use crate::domain::actions::services::{CommentService, SiteFollowService};
use crate::domain::content::services::{
    ActionParser, ContentFactory, ContentRangeFactory, NotificationActionParser,
};
use crate::Client;

pub struct UndefinedCommentService;
pub struct UndefinedSiteFollowService;

pub struct ClientBuilder<C, S> {
    action_parser: DynActionParser,
    app_config: AppConfig,
    comment_service: C,
    site_follow_service: S,
}

impl ClientBuilder<UndefinedCommentService, UndefinedSiteFollowService> {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            action_parser: Arc::new(NotificationActionParser),
            app_config: Default::default(),
            comment_service: UndefinedCommentService,
            site_follow_service: UndefinedSiteFollowService,
        }
    }
}

impl<S> ClientBuilder<UndefinedCommentService, S> {
    pub fn set_comment_service<C: CommentService + 'static>(
        self,
        comment_service: C,
    ) -> ClientBuilder<DynCommentService, S> {
        ClientBuilder {
            action_parser: self.action_parser,
            app_config: self.app_config,
            comment_service: Arc::new(comment_service),
            site_follow_service: self.site_follow_service,
        }
    }
}

impl<C> ClientBuilder<C, UndefinedSiteFollowService> {
    pub fn set_site_follow_service<S: SiteFollowService + 'static>(
        self,
        site_follow_service: S,
    ) -> ClientBuilder<C, DynSiteFollowService> {
        ClientBuilder {
            action_parser: self.action_parser,
            app_config: self.app_config,
            comment_service: self.comment_service,
            site_follow_service: Arc::new(site_follow_service),
        }
    }
}

impl<C, S> ClientBuilder<C, S> {
    pub fn set_action_parser<P: ActionParser + 'static>(mut self, action_parser: P) -> Self {
        self.action_parser = Arc::new(action_parser);
        self
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.app_config = config;
        self
    }
}

impl ClientBuilder<DynCommentService, DynSiteFollowService> {
    pub fn build(self) -> Client {
        let range_factory = ContentRangeFactory::new(self.app_config.post_url_template.clone());

        let dependencies = AppDependencies {
            action_parser: self.action_parser,
            comment_service: self.comment_service,
            config: Arc::new(self.app_config),
            content_factory: Arc::new(ContentFactory::new(range_factory)),
            site_follow_service: self.site_follow_service,
        };

        let client_inner = Arc::new(ClientInner {
            actions: NotificationActionsService::from(&dependencies),
            formatter: ContentFormatter::from(&dependencies),
            notifications: NotificationsService::from(&dependencies),
        });

        Client::from(client_inner)
    }
}
