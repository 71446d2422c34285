//! Error types for message conversion.

use serde_json::Value;

/// Errors that can occur while converting AG-UI messages to GraphQL messages.
///
/// Every error aborts the whole conversion; no partial output is returned.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The message role is not one of `developer`, `system`, `assistant`,
    /// `user` or `tool`.
    #[error("Unknown message role in message: {message}")]
    UnknownRole {
        /// The offending message, as received.
        message: Value,
    },

    /// A mapper was handed a message whose role it cannot produce.
    #[error("Cannot convert message with role {role} to {target}")]
    UnsupportedConversion {
        /// Role of the message that was passed in.
        role: String,
        /// Target kind the mapper builds.
        target: &'static str,
    },

    /// Only `function` tool calls can become action executions.
    #[error("Unsupported tool call type: {tool_type}")]
    UnsupportedToolCallType {
        /// The `type` carried by the tool call.
        tool_type: String,
    },

    /// Tool call arguments are not valid JSON.
    #[error("Malformed arguments for tool call {tool_call_id}: {source}")]
    MalformedArguments {
        /// ID of the tool call whose arguments failed to parse.
        tool_call_id: String,
        #[source]
        source: serde_json::Error,
    },

    /// A tool message does not reference the tool call it answers.
    #[error("Tool message must have a toolCallId")]
    MissingReference {
        /// ID of the tool message.
        message_id: String,
    },

    /// Raw input could not be read as an AG-UI message.
    #[error("Invalid message: {0}")]
    InvalidMessage(#[from] serde_json::Error),
}

impl ConvertError {
    /// Returns true if the message role was not recognized
    pub fn is_unknown_role(&self) -> bool {
        matches!(self, Self::UnknownRole { .. })
    }

    /// Returns true if a mapper rejected the message role
    pub fn is_unsupported_conversion(&self) -> bool {
        matches!(self, Self::UnsupportedConversion { .. })
    }

    /// Returns true if a tool call had a type other than `function`
    pub fn is_unsupported_tool_call_type(&self) -> bool {
        matches!(self, Self::UnsupportedToolCallType { .. })
    }

    /// Returns true if tool call arguments failed to parse
    pub fn is_malformed_arguments(&self) -> bool {
        matches!(self, Self::MalformedArguments { .. })
    }

    /// Returns true if a tool message lacked its tool call reference
    pub fn is_missing_reference(&self) -> bool {
        matches!(self, Self::MissingReference { .. })
    }

    /// Returns true if raw input was not a readable message
    pub fn is_invalid_message(&self) -> bool {
        matches!(self, Self::InvalidMessage(_))
    }
}

/// Result type alias for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
