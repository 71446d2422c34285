//! Test utilities for turntable-core.
//!
//! Fixture conversations in both typed and raw JSON form, for exercising
//! conversion without hand-writing AG-UI payloads.
//!
//! Enable with the `test-utils` feature:
//!
//! ```toml
//! [dev-dependencies]
//! turntable-core = { version = "...", features = ["test-utils"] }
//! ```
//!
//! # Example
//!
//! ```rust
//! use turntable_core::{agui_to_gql, test_utils::ConversationBuilder};
//!
//! let messages = ConversationBuilder::new()
//!     .user("What's 2+2?")
//!     .tool_round("calculator", r#"{"expr":"2+2"}"#, "4")
//!     .assistant("4")
//!     .build();
//!
//! let converted = agui_to_gql(&messages).unwrap();
//! assert_eq!(converted.len(), messages.len() + 1);
//! ```

use serde_json::{json, Value};

use crate::agui::{Message, ToolCall};

/// Builds an AG-UI conversation with sequential IDs.
///
/// Messages get IDs `msg-1`, `msg-2`, ... and tool calls `call-1`,
/// `call-2`, ..., so tests can assert on IDs without tracking them.
#[derive(Debug, Default)]
pub struct ConversationBuilder {
    messages: Vec<Message>,
    next_message: usize,
    next_call: usize,
}

impl ConversationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn message_id(&mut self) -> String {
        self.next_message += 1;
        format!("msg-{}", self.next_message)
    }

    fn call_id(&mut self) -> String {
        self.next_call += 1;
        format!("call-{}", self.next_call)
    }

    pub fn developer(mut self, content: impl Into<String>) -> Self {
        let id = self.message_id();
        self.messages.push(Message::developer(id, content));
        self
    }

    pub fn system(mut self, content: impl Into<String>) -> Self {
        let id = self.message_id();
        self.messages.push(Message::system(id, content));
        self
    }

    pub fn user(mut self, content: impl Into<String>) -> Self {
        let id = self.message_id();
        self.messages.push(Message::user(id, content));
        self
    }

    pub fn assistant(mut self, content: impl Into<String>) -> Self {
        let id = self.message_id();
        self.messages.push(Message::assistant(id, content));
        self
    }

    /// Add an assistant message calling one function, followed by the tool
    /// message answering it.
    pub fn tool_round(
        mut self,
        name: impl Into<String>,
        arguments: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        let call_id = self.call_id();
        let assistant_id = self.message_id();
        self.messages.push(Message::assistant_with_tool_calls(
            assistant_id,
            None,
            vec![ToolCall::function(call_id.clone(), name, arguments)],
        ));
        let tool_id = self.message_id();
        self.messages.push(Message::tool(tool_id, result, call_id));
        self
    }

    /// Add an arbitrary message as-is.
    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    pub fn build(self) -> Vec<Message> {
        self.messages
    }
}

/// `{role:"user", id:"m1", content:"hi"}`
pub fn user_hi() -> Value {
    json!({"role": "user", "id": "m1", "content": "hi"})
}

/// Assistant message `m2` with one `foo` function call `t1`.
pub fn assistant_with_foo_call() -> Value {
    json!({
        "role": "assistant",
        "id": "m2",
        "content": "ok",
        "toolCalls": [{
            "id": "t1",
            "type": "function",
            "function": {"name": "foo", "arguments": "{\"x\":1}"}
        }]
    })
}

/// Tool message `m3` answering `t1`.
pub fn tool_result() -> Value {
    json!({"role": "tool", "id": "m3", "content": "result text", "toolCallId": "t1"})
}

/// Tool message `m4` with no `toolCallId`.
pub fn tool_result_without_reference() -> Value {
    json!({"role": "tool", "id": "m4", "content": "x"})
}

/// Assistant message `m5` whose only tool call has type `shell`.
pub fn assistant_with_shell_call() -> Value {
    json!({
        "role": "assistant",
        "id": "m5",
        "toolCalls": [{
            "id": "t2",
            "type": "shell",
            "function": {"name": "foo", "arguments": "{}"}
        }]
    })
}

/// Message `m6` with role `banana`.
pub fn banana_role() -> Value {
    json!({"role": "banana", "id": "m6"})
}
