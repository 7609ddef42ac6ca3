//! Decoding of the `{ tickets, users }` payload.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, TicketGridError};
use crate::types::BoardSnapshot;

/// Parse a ticket source response body.
///
/// The body must be a JSON object with `tickets` and `users` arrays. Anything
/// else is reported as [`TicketGridError::MalformedResponse`].
pub fn parse_board_response(body: &str) -> Result<BoardSnapshot> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| TicketGridError::MalformedResponse(format!("invalid JSON: {e}")))?;

    let Value::Object(mut object) = value else {
        return Err(TicketGridError::MalformedResponse(
            "expected a JSON object with 'tickets' and 'users'".to_string(),
        ));
    };

    let tickets = take_array(&mut object, "tickets")?;
    let users = take_array(&mut object, "users")?;

    Ok(BoardSnapshot { tickets, users })
}

fn take_array<T: DeserializeOwned>(
    object: &mut serde_json::Map<String, Value>,
    key: &str,
) -> Result<Vec<T>> {
    let value = object
        .remove(key)
        .ok_or_else(|| TicketGridError::MalformedResponse(format!("missing '{key}'")))?;
    if !value.is_array() {
        return Err(TicketGridError::MalformedResponse(format!(
            "'{key}' must be an array"
        )));
    }
    serde_json::from_value(value)
        .map_err(|e| TicketGridError::MalformedResponse(format!("invalid '{key}': {e}")))
}
