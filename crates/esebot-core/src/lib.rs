//! Logic module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod formatting;
pub mod use_cases;

pub use context::CoreContext;
#[cfg(any(test, feature = "testkit"))]
pub use context::tests::CoreContextTest;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    commands::handle_register_command::HandleRegisterCommand,
    relay::{
        relay_pull_request_event::RelayPullRequestEvent, relay_review_event::RelayReviewEvent,
    },
};

module! {
    pub CoreModule {
        components = [
            HandleRegisterCommand, RelayPullRequestEvent, RelayReviewEvent
        ],
        providers = []
    }
}
