//! AG-UI message model.
//!
//! AG-UI (Agent-User Interaction) is the event-based protocol CopilotKit and
//! similar frontends speak. Conversation history arrives as a list of
//! role-tagged messages:
//!
//! | Role | Carries |
//! |------|---------|
//! | `developer`, `system`, `user` | text |
//! | `assistant` | text, optional tool calls |
//! | `tool` | tool result text, `toolCallId` |
//!
//! These types are the read side of [`crate::convert`].

pub mod messages;

pub use messages::{FunctionCall, Message, MessageInput, Role, ToolCall, FUNCTION_TOOL_CALL};
