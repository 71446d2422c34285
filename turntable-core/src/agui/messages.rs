//! AG-UI message types.

use serde::{Deserialize, Serialize};

/// The only tool call type that can be converted to an action execution.
pub const FUNCTION_TOOL_CALL: &str = "function";

/// Role of an AG-UI message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Developer instructions.
    Developer,
    /// System prompt.
    System,
    /// Assistant (model) turn.
    Assistant,
    /// User turn.
    User,
    /// Tool result.
    Tool,
}

impl Role {
    /// All roles, in declaration order.
    pub const ALL: [Role; 5] = [
        Role::Developer,
        Role::System,
        Role::Assistant,
        Role::User,
        Role::Tool,
    ];

    /// Wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Developer => "developer",
            Role::System => "system",
            Role::Assistant => "assistant",
            Role::User => "user",
            Role::Tool => "tool",
        }
    }

    /// Look up a role by its wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == name)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tool invocation requested by the assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Unique tool call ID, referenced by the answering tool message.
    pub id: String,
    /// Tool call type. Only [`FUNCTION_TOOL_CALL`] is convertible; a missing
    /// type reads as empty and is rejected by conversion.
    #[serde(rename = "type", default)]
    pub call_type: String,
    /// The function being called.
    pub function: FunctionCall,
}

impl ToolCall {
    /// Create a `function` tool call.
    pub fn function(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            call_type: FUNCTION_TOOL_CALL.to_string(),
            function: FunctionCall {
                name: name.into(),
                arguments: arguments.into(),
            },
        }
    }

    /// Override the tool call type.
    pub fn with_type(mut self, call_type: impl Into<String>) -> Self {
        self.call_type = call_type.into();
        self
    }
}

/// Function name and JSON-encoded arguments of a tool call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    /// Arguments as a JSON string, exactly as the model produced them.
    pub arguments: String,
}

/// An AG-UI conversation message.
///
/// Serialized with a lowercase `role` discriminant and camelCase field names.
/// Only the assistant variant carries tool calls and only the tool variant
/// carries a tool call reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Message {
    Developer {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
    System {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
    Assistant {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        #[serde(
            default,
            rename = "toolCalls",
            skip_serializing_if = "Option::is_none"
        )]
        tool_calls: Option<Vec<ToolCall>>,
    },
    User {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
    Tool {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        #[serde(
            default,
            rename = "toolCallId",
            skip_serializing_if = "Option::is_none"
        )]
        tool_call_id: Option<String>,
    },
}

impl Message {
    /// Create a developer message.
    pub fn developer(id: impl Into<String>, content: impl Into<String>) -> Self {
        Message::Developer {
            id: id.into(),
            content: Some(content.into()),
        }
    }

    /// Create a system message.
    pub fn system(id: impl Into<String>, content: impl Into<String>) -> Self {
        Message::System {
            id: id.into(),
            content: Some(content.into()),
        }
    }

    /// Create a user message.
    pub fn user(id: impl Into<String>, content: impl Into<String>) -> Self {
        Message::User {
            id: id.into(),
            content: Some(content.into()),
        }
    }

    /// Create an assistant message without tool calls.
    pub fn assistant(id: impl Into<String>, content: impl Into<String>) -> Self {
        Message::Assistant {
            id: id.into(),
            content: Some(content.into()),
            tool_calls: None,
        }
    }

    /// Create an assistant message that requests tool calls.
    ///
    /// Pass `None` as content for a pure tool-call turn.
    pub fn assistant_with_tool_calls(
        id: impl Into<String>,
        content: Option<String>,
        tool_calls: Vec<ToolCall>,
    ) -> Self {
        Message::Assistant {
            id: id.into(),
            content,
            tool_calls: Some(tool_calls),
        }
    }

    /// Create a tool result message answering `tool_call_id`.
    pub fn tool(
        id: impl Into<String>,
        content: impl Into<String>,
        tool_call_id: impl Into<String>,
    ) -> Self {
        Message::Tool {
            id: id.into(),
            content: Some(content.into()),
            tool_call_id: Some(tool_call_id.into()),
        }
    }

    /// Role of the message.
    pub fn role(&self) -> Role {
        match self {
            Message::Developer { .. } => Role::Developer,
            Message::System { .. } => Role::System,
            Message::Assistant { .. } => Role::Assistant,
            Message::User { .. } => Role::User,
            Message::Tool { .. } => Role::Tool,
        }
    }

    /// Message ID.
    pub fn id(&self) -> &str {
        match self {
            Message::Developer { id, .. }
            | Message::System { id, .. }
            | Message::Assistant { id, .. }
            | Message::User { id, .. }
            | Message::Tool { id, .. } => id,
        }
    }

    /// Text content, if any.
    pub fn content(&self) -> Option<&str> {
        match self {
            Message::Developer { content, .. }
            | Message::System { content, .. }
            | Message::Assistant { content, .. }
            | Message::User { content, .. }
            | Message::Tool { content, .. } => content.as_deref(),
        }
    }

    /// Tool calls of an assistant message; empty for every other role.
    pub fn tool_calls(&self) -> &[ToolCall] {
        match self {
            Message::Assistant {
                tool_calls: Some(calls),
                ..
            } => calls,
            _ => &[],
        }
    }
}

/// One message or a list of messages.
///
/// Deserializes from either a JSON object or a JSON array. A single message
/// iterates as a one-element sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageInput {
    Many(Vec<Message>),
    One(Message),
}

impl MessageInput {
    /// Borrow the messages as a slice.
    pub fn as_slice(&self) -> &[Message] {
        match self {
            MessageInput::One(message) => std::slice::from_ref(message),
            MessageInput::Many(messages) => messages,
        }
    }

    /// Take ownership of the messages.
    pub fn into_vec(self) -> Vec<Message> {
        match self {
            MessageInput::One(message) => vec![message],
            MessageInput::Many(messages) => messages,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl From<Message> for MessageInput {
    fn from(message: Message) -> Self {
        MessageInput::One(message)
    }
}

impl From<Vec<Message>> for MessageInput {
    fn from(messages: Vec<Message>) -> Self {
        MessageInput::Many(messages)
    }
}

impl<'a> IntoIterator for &'a MessageInput {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

#[cfg(test)]
#[path = "messages_tests.rs"]
mod tests;
