//! Conversion from AG-UI messages to GraphQL messages.
//!
//! One AG-UI message can map to several GraphQL messages: an assistant turn
//! becomes a `TextMessage` followed by one `ActionExecutionMessage` per tool
//! call. Every other role maps to exactly one message.

use log::{debug, trace};
use serde::Deserialize;
use serde_json::Value;

use crate::agui::{self, FUNCTION_TOOL_CALL};
use crate::error::{ConvertError, ConvertResult};
use crate::gql::{self, MessageKind};

/// Convert a sequence of AG-UI messages to GraphQL messages.
///
/// Accepts anything that iterates over `&agui::Message`: a slice, a `Vec`,
/// an [`agui::MessageInput`], or `std::iter::once(&message)` for a single
/// message. Output order follows input order. The first failing message
/// aborts the conversion.
pub fn agui_to_gql<'a, I>(messages: I) -> ConvertResult<Vec<gql::Message>>
where
    I: IntoIterator<Item = &'a agui::Message>,
{
    messages
        .into_iter()
        .try_fold(Vec::new(), |mut out, message| {
            out.extend(agui_message_to_gql(message)?);
            Ok(out)
        })
}

/// Convert a single AG-UI message to its GraphQL messages.
///
/// The first returned message always carries the source message ID.
pub fn agui_message_to_gql(message: &agui::Message) -> ConvertResult<Vec<gql::Message>> {
    let converted: Vec<gql::Message> = match message {
        agui::Message::Tool { .. } => vec![agui_tool_message_to_gql_result(message)?.into()],
        agui::Message::Assistant { id, .. } => {
            let tool_calls = message.tool_calls();
            let mut out: Vec<gql::Message> = Vec::with_capacity(1 + tool_calls.len());
            out.push(agui_text_message_to_gql(message)?.into());
            for tool_call in tool_calls {
                out.push(agui_tool_call_to_gql_action_execution(tool_call, id)?.into());
            }
            out
        }
        agui::Message::Developer { .. }
        | agui::Message::System { .. }
        | agui::Message::User { .. } => vec![agui_text_message_to_gql(message)?.into()],
    };

    trace!(
        "converted {} message {} into {} message(s)",
        message.role(),
        message.id(),
        converted.len()
    );
    Ok(converted)
}

/// Convert raw AG-UI JSON to GraphQL messages.
///
/// `input` is a message object or an array of them. Each element's `role` is
/// checked before the element is read as a message, so an unrecognized role
/// is reported as [`ConvertError::UnknownRole`] with the element attached.
pub fn agui_json_to_gql(input: &Value) -> ConvertResult<Vec<gql::Message>> {
    match input {
        Value::Array(items) => items.iter().try_fold(Vec::new(), |mut out, item| {
            out.extend(agui_message_to_gql(&parse_message(item)?)?);
            Ok(out)
        }),
        item => agui_message_to_gql(&parse_message(item)?),
    }
}

/// Parse a JSON string and convert it with [`agui_json_to_gql`].
pub fn agui_str_to_gql(input: &str) -> ConvertResult<Vec<gql::Message>> {
    let value: Value = serde_json::from_str(input)?;
    agui_json_to_gql(&value)
}

fn parse_message(value: &Value) -> ConvertResult<agui::Message> {
    let Value::Object(fields) = value else {
        debug!("rejecting non-object message: {}", value);
        return Err(ConvertError::InvalidMessage(
            <serde_json::Error as serde::de::Error>::custom("expected a message object"),
        ));
    };

    let known = fields
        .get("role")
        .and_then(Value::as_str)
        .and_then(agui::Role::from_name);

    if known.is_none() {
        debug!("rejecting message with unknown role: {}", value);
        return Err(ConvertError::UnknownRole {
            message: value.clone(),
        });
    }

    Ok(agui::Message::deserialize(value)?)
}

/// Convert a developer, system, assistant or user message to a `TextMessage`.
///
/// Tool calls on an assistant message are ignored here; see
/// [`agui_message_to_gql`] for the full expansion.
pub fn agui_text_message_to_gql(message: &agui::Message) -> ConvertResult<gql::TextMessage> {
    let role = match message.role() {
        agui::Role::Developer => gql::Role::Developer,
        agui::Role::System => gql::Role::System,
        agui::Role::Assistant => gql::Role::Assistant,
        agui::Role::User => gql::Role::User,
        agui::Role::Tool => {
            return Err(unsupported(message, MessageKind::TextMessage));
        }
    };

    Ok(gql::TextMessage::new(
        message.id(),
        message.content().unwrap_or_default(),
        role,
    ))
}

/// Convert one assistant tool call to an `ActionExecutionMessage`.
pub fn agui_tool_call_to_gql_action_execution(
    tool_call: &agui::ToolCall,
    parent_message_id: &str,
) -> ConvertResult<gql::ActionExecutionMessage> {
    if tool_call.call_type != FUNCTION_TOOL_CALL {
        debug!(
            "rejecting tool call {} of type {}",
            tool_call.id, tool_call.call_type
        );
        return Err(ConvertError::UnsupportedToolCallType {
            tool_type: tool_call.call_type.clone(),
        });
    }

    let arguments: Value =
        serde_json::from_str(&tool_call.function.arguments).map_err(|source| {
            ConvertError::MalformedArguments {
                tool_call_id: tool_call.id.clone(),
                source,
            }
        })?;

    Ok(gql::ActionExecutionMessage::new(
        tool_call.id.as_str(),
        tool_call.function.name.as_str(),
        arguments,
        parent_message_id,
    ))
}

/// Convert a tool message to a `ResultMessage`.
///
/// The action name is left empty: a tool result only references the call by
/// ID.
pub fn agui_tool_message_to_gql_result(
    message: &agui::Message,
) -> ConvertResult<gql::ResultMessage> {
    let agui::Message::Tool {
        id,
        content,
        tool_call_id,
    } = message
    else {
        return Err(unsupported(message, MessageKind::ResultMessage));
    };

    let tool_call_id = match tool_call_id.as_deref() {
        Some(tool_call_id) if !tool_call_id.is_empty() => tool_call_id,
        _ => {
            return Err(ConvertError::MissingReference {
                message_id: id.clone(),
            })
        }
    };

    Ok(gql::ResultMessage::new(
        id.as_str(),
        content.as_deref().unwrap_or_default(),
        tool_call_id,
        "",
    ))
}

fn unsupported(message: &agui::Message, target: MessageKind) -> ConvertError {
    ConvertError::UnsupportedConversion {
        role: message.role().to_string(),
        target: target.as_str(),
    }
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
