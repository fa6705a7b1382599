// notes-client/notes-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::dtos;
pub use app::formatter;
pub use app::services;
pub use client::{Client, ClientInner};
pub use client_builder::{ClientBuilder, UndefinedCommentService, UndefinedSiteFollowService};

pub mod app;
pub mod domain;

mod client;
mod client_builder;
mod util;

#[cfg(feature = "test")]
pub mod test;
