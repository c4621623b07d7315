//! Registration store.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod registration;
mod store;

pub use errors::{RegistrationError, Result};
pub use registration::Registration;
pub use store::RegistrationStore;
