pub mod handle_register_command;

use esebot_registration::Registration;
pub use handle_register_command::HandleRegisterCommandInterface;
#[cfg(any(test, feature = "testkit"))]
pub use handle_register_command::MockHandleRegisterCommandInterface;

/// Sent to a chat the first time it is registered.
pub const GREETING_MESSAGE: &str = "Sälü, ig bi dr ESE 🤖";
/// Sent to a chat registered while another registration existed.
pub const STILL_ALIVE_MESSAGE: &str = "Ig läbe noh 🏋️";

/// Registration request coming from a chat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterCommand {
    /// Sender username, or first name when the sender has no username.
    pub sender_name: String,
    /// Sender identifier.
    pub sender_id: u64,
    /// Chat title, private chats have none.
    pub chat_title: Option<String>,
    /// Chat identifier.
    pub chat_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The chat is not allowed to register.
    Rejected,
    /// First registration since the store was created.
    Registered,
    /// An existing registration was replaced.
    Replaced { previous: Registration },
}
