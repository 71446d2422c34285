//! GraphQL runtime-client message model.
//!
//! The runtime client expects a flat list of typed messages rather than
//! role-tagged turns with nested tool calls:
//!
//! | Kind | Produced from |
//! |------|---------------|
//! | `TextMessage` | developer, system, assistant and user turns |
//! | `ActionExecutionMessage` | each assistant tool call |
//! | `ResultMessage` | tool results |
//!
//! These types are the write side of [`crate::convert`].

pub mod messages;

pub use messages::{
    ActionExecutionMessage, Message, MessageKind, ResultMessage, Role, TextMessage,
};
