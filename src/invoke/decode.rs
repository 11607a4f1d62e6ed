use crate::{Error, Result, envelope::Status};
use serde::Deserialize;
use serde_json::Value;

const MAX_UNWRAP_DEPTH: usize = 4;

/// Unwraps an invocation result down to the envelope it carries.
///
/// Results may arrive as a JSON string, as a proxy response whose `body` (or
/// `Payload`) holds the encoded envelope, or as the envelope itself. The
/// envelope is returned as received; only its `status` is checked. Anything
/// that fails to parse is an error.
pub fn decode_envelope(raw: Value) -> Result<Value> {
    let mut current = raw;

    for _ in 0..MAX_UNWRAP_DEPTH {
        let next = match &current {
            Value::String(text) => Some(parse_json(text)?),
            Value::Object(map) if !map.contains_key("status") => {
                match map.get("body").or_else(|| map.get("Payload")) {
                    Some(Value::String(text)) => Some(parse_json(text)?),
                    Some(inner @ Value::Object(_)) => Some(inner.clone()),
                    _ => None,
                }
            }
            _ => None,
        };

        match next {
            Some(inner) => current = inner,
            None => return into_envelope(current),
        }
    }

    Err(Error::malformed("response is nested too deeply"))
}

fn parse_json(text: &str) -> Result<Value> {
    serde_json::from_str(text)
        .map_err(|e| Error::malformed(format!("response is not valid JSON: {e}")))
}

fn into_envelope(value: Value) -> Result<Value> {
    let status = value
        .get("status")
        .ok_or_else(|| Error::malformed("response is not an envelope: missing status"))?;
    Status::deserialize(status)
        .map_err(|e| Error::malformed(format!("response is not an envelope: {e}")))?;
    Ok(value)
}
