//! GitHub webhook payload types.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod common;
pub mod ping;
pub mod pulls;
pub mod reviews;

#[cfg(test)]
mod tests;
