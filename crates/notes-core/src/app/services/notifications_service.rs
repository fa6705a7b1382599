// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde_json::Value;

use notes_proc_macros::InjectDependencies;

use crate::app::deps::{DynActionParser, DynContentFactory};
use crate::domain::activity::models::{ActivityParseError, FormattableActivity};
use crate::domain::activity::services::ActivityParser;
use crate::domain::notifications::models::{Notification, NotificationParseError};
use crate::domain::notifications::services::NotificationParser;

#[derive(InjectDependencies)]
pub struct NotificationsService {
    #[inject]
    action_parser: DynActionParser,
    #[inject]
    content_factory: DynContentFactory,
}

impl NotificationsService {
    pub fn parse_notification(&self, raw: &Value) -> Result<Notification, NotificationParseError> {
        self.notification_parser().parse(raw)
    }

    /// Parses every notification in `raw`. Malformed entries are logged and dropped.
    pub fn parse_notifications(&self, raw: &[Value]) -> Vec<Notification> {
        self.notification_parser().parse_all(raw)
    }

    pub fn parse_activity(&self, raw: &Value) -> Result<FormattableActivity, ActivityParseError> {
        ActivityParser::new(self.content_factory.clone()).parse(raw)
    }
}

impl NotificationsService {
    fn notification_parser(&self) -> NotificationParser {
        NotificationParser::new(self.content_factory.clone(), self.action_parser.clone())
    }
}
