//! # Turntable
//!
//! Conversion of AG-UI conversation history into the message model of the
//! GraphQL runtime client.
//!
//! AG-UI frontends (such as CopilotKit) send role-tagged messages where an
//! assistant turn may embed tool calls. The GraphQL runtime client expects a
//! flat list of text, action execution and result messages instead.
//! Turntable maps one to the other:
//!
//! | AG-UI message | GraphQL message(s) |
//! |---------------|--------------------|
//! | `developer`, `system`, `user` | `TextMessage` |
//! | `assistant` | `TextMessage`, then one `ActionExecutionMessage` per tool call |
//! | `tool` | `ResultMessage` |
//!
//! ## Example
//!
//! ```rust
//! use turntable_core::agui::{Message, ToolCall};
//! use turntable_core::{agui_to_gql, gql};
//!
//! # fn main() -> turntable_core::ConvertResult<()> {
//! let history = vec![
//!     Message::user("m1", "What's the weather in Paris?"),
//!     Message::assistant_with_tool_calls(
//!         "m2",
//!         None,
//!         vec![ToolCall::function("t1", "weather", r#"{"city":"Paris"}"#)],
//!     ),
//!     Message::tool("m3", "18C and sunny", "t1"),
//! ];
//!
//! let messages = agui_to_gql(&history)?;
//! assert_eq!(messages.len(), 4);
//! assert!(matches!(messages[2], gql::Message::ActionExecutionMessage(_)));
//! # Ok(())
//! # }
//! ```
//!
//! Raw JSON can be converted directly with [`agui_json_to_gql`] or
//! [`agui_str_to_gql`]; these also report messages with an unrecognized role.
//!
//! ## Feature Flags
//!
//! - `test-utils` - Fixture conversations for tests

pub mod agui;
pub mod convert;
pub mod error;
pub mod gql;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use convert::{
    agui_json_to_gql, agui_message_to_gql, agui_str_to_gql, agui_text_message_to_gql,
    agui_to_gql, agui_tool_call_to_gql_action_execution, agui_tool_message_to_gql_result,
};
pub use error::{ConvertError, ConvertResult};
