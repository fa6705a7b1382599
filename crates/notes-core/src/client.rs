// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use crate::app::formatter::ContentFormatter;
use crate::app::services::{NotificationActionsService, NotificationsService};
use crate::client_builder::{ClientBuilder, UndefinedCommentService, UndefinedSiteFollowService};

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

impl Client {
    pub fn builder() -> ClientBuilder<UndefinedCommentService, UndefinedSiteFollowService> {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub actions: NotificationActionsService,
    pub formatter: ContentFormatter,
    pub notifications: NotificationsService,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
