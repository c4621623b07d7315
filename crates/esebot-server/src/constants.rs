//! Webhook constants.

/// GitHub event header.
pub const GITHUB_EVENT_HEADER: &str = "X-GitHub-Event";
/// GitHub signature header.
pub const GITHUB_SIGNATURE_HEADER: &str = "X-Hub-Signature-256";
