//! GraphQL message types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role of a GraphQL text message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Developer,
    System,
    Assistant,
    User,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Developer => write!(f, "developer"),
            Role::System => write!(f, "system"),
            Role::Assistant => write!(f, "assistant"),
            Role::User => write!(f, "user"),
        }
    }
}

/// A plain text turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMessage {
    pub id: String,
    pub content: String,
    pub role: Role,
}

impl TextMessage {
    pub fn new(id: impl Into<String>, content: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            role,
        }
    }
}

/// A request to execute an action (tool call).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionExecutionMessage {
    /// ID of the originating tool call.
    pub id: String,
    /// Action (function) name.
    pub name: String,
    /// Parsed arguments.
    pub arguments: Value,
    /// ID of the assistant message that requested the action.
    pub parent_message_id: String,
}

impl ActionExecutionMessage {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: Value,
        parent_message_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
            parent_message_id: parent_message_id.into(),
        }
    }
}

/// The result of an action execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultMessage {
    pub id: String,
    /// Result text.
    pub result: String,
    /// ID of the action execution this result answers.
    pub action_execution_id: String,
    /// Name of the executed action. May be empty when the source only
    /// references the execution by ID.
    pub action_name: String,
}

impl ResultMessage {
    pub fn new(
        id: impl Into<String>,
        result: impl Into<String>,
        action_execution_id: impl Into<String>,
        action_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            result: result.into(),
            action_execution_id: action_execution_id.into(),
            action_name: action_name.into(),
        }
    }
}

/// Kind of a GraphQL message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    TextMessage,
    ActionExecutionMessage,
    ResultMessage,
}

impl MessageKind {
    /// Type name used on the wire and in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::TextMessage => "TextMessage",
            MessageKind::ActionExecutionMessage => "ActionExecutionMessage",
            MessageKind::ResultMessage => "ResultMessage",
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A GraphQL runtime-client message.
///
/// Serialized with a `type` field naming the kind, e.g.
/// `{"type":"TextMessage","id":"m1","content":"hi","role":"user"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Message {
    TextMessage(TextMessage),
    ActionExecutionMessage(ActionExecutionMessage),
    ResultMessage(ResultMessage),
}

impl Message {
    pub fn id(&self) -> &str {
        match self {
            Message::TextMessage(m) => &m.id,
            Message::ActionExecutionMessage(m) => &m.id,
            Message::ResultMessage(m) => &m.id,
        }
    }

    pub fn kind(&self) -> MessageKind {
        match self {
            Message::TextMessage(_) => MessageKind::TextMessage,
            Message::ActionExecutionMessage(_) => MessageKind::ActionExecutionMessage,
            Message::ResultMessage(_) => MessageKind::ResultMessage,
        }
    }

    pub fn is_text_message(&self) -> bool {
        matches!(self, Message::TextMessage(_))
    }

    pub fn is_action_execution_message(&self) -> bool {
        matches!(self, Message::ActionExecutionMessage(_))
    }

    pub fn is_result_message(&self) -> bool {
        matches!(self, Message::ResultMessage(_))
    }

    pub fn as_text_message(&self) -> Option<&TextMessage> {
        match self {
            Message::TextMessage(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_action_execution_message(&self) -> Option<&ActionExecutionMessage> {
        match self {
            Message::ActionExecutionMessage(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_result_message(&self) -> Option<&ResultMessage> {
        match self {
            Message::ResultMessage(m) => Some(m),
            _ => None,
        }
    }
}

impl From<TextMessage> for Message {
    fn from(message: TextMessage) -> Self {
        Message::TextMessage(message)
    }
}

impl From<ActionExecutionMessage> for Message {
    fn from(message: ActionExecutionMessage) -> Self {
        Message::ActionExecutionMessage(message)
    }
}

impl From<ResultMessage> for Message {
    fn from(message: ResultMessage) -> Self {
        Message::ResultMessage(message)
    }
}

#[cfg(test)]
#[path = "messages_tests.rs"]
mod tests;
