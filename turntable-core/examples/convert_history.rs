//! Convert an AG-UI conversation to GraphQL runtime-client messages.
//!
//! Run with:
//! ```sh
//! cargo run -p turntable-core --example convert_history
//! ```

use turntable_core::agui_str_to_gql;

const HISTORY: &str = r#"[
  {"role": "system", "id": "s1", "content": "You are a weather assistant."},
  {"role": "user", "id": "u1", "content": "What's the weather in Paris?"},
  {
    "role": "assistant",
    "id": "a1",
    "toolCalls": [{
      "id": "call-1",
      "type": "function",
      "function": {"name": "get_weather", "arguments": "{\"city\":\"Paris\"}"}
    }]
  },
  {"role": "tool", "id": "r1", "content": "18C, sunny", "toolCallId": "call-1"},
  {"role": "assistant", "id": "a2", "content": "It's 18C and sunny in Paris."}
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let messages = agui_str_to_gql(HISTORY)?;

    for message in &messages {
        println!("{:<24} {}", message.kind(), message.id());
    }

    println!();
    println!("{}", serde_json::to_string_pretty(&messages)?);

    Ok(())
}
