//! Messaging interface

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod interface;

pub use errors::{MessagingError, Result};
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockMessagingService;
pub use interface::{MessageFormat, MessagingService};
