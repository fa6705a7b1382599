// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use notes_utils::{id_number, id_string};

id_number!(UserId);
id_number!(SiteId);
id_number!(PostId);
id_number!(CommentId);

id_string!(NotificationId);
id_string!(ActivityId);
