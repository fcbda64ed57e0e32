//! Codec between storage messages and generic envelopes.
//!
//! Encoding is total and pure. Decoding is total as well: every failure -
//! unknown tag, payload shape mismatch - comes back as a
//! [`FunnelError::Decode`] carrying a human-readable description, never a
//! panic.
//!
//! Absent values are encoded as explicit JSON `null`, never by omitting
//! the field, so `Put { value: None }` round-trips exactly. On decode the
//! other direction is permissive: a missing `label` or `value` field reads
//! the same as an explicit `null`.

use funnelstore_envelope::Envelope;
use funnelstore_funnel::FunnelError;
use serde_json::{json, Map, Value};

use crate::funnel::MODULE;
use crate::message::Message;

/// Encode a storage message into its envelope form.
pub fn encode(message: &Message) -> Envelope {
    let args = match message {
        Message::Startup => Value::Null,
        Message::Get { label, key } | Message::SimulateGet { label, key } => {
            json!({ "label": label, "key": key })
        }
        Message::Got { label, key, value } => {
            json!({ "label": label, "key": key, "value": value })
        }
        Message::Put { key, value } | Message::SimulatePut { key, value } => {
            json!({ "key": key, "value": value })
        }
        Message::ListKeys { label, prefix } | Message::SimulateListKeys { label, prefix } => {
            json!({ "label": label, "prefix": prefix })
        }
        Message::Keys {
            label,
            prefix,
            keys,
        } => json!({ "label": label, "prefix": prefix, "keys": keys }),
        Message::Clear { prefix } | Message::SimulateClear { prefix } => {
            Value::String(prefix.clone())
        }
    };
    Envelope::new(MODULE, message.tag(), args)
}

/// Decode an envelope back into a storage message.
///
/// # Returns
///
/// * `Ok(message)` - The tag and args matched the storage vocabulary.
/// * `Err(FunnelError::Decode)` - Wrong module, unknown tag, or args not
///   matching the shape the tag requires.
pub fn decode(envelope: &Envelope) -> Result<Message, FunnelError> {
    if envelope.module != MODULE {
        return Err(FunnelError::decode(
            MODULE,
            format!("envelope belongs to module '{}'", envelope.module),
        ));
    }

    let tag = envelope.tag.as_str();
    match tag {
        "startup" => Ok(Message::Startup),
        "get" => {
            let args = object(envelope, tag)?;
            Ok(Message::Get {
                label: label_field(args, tag)?,
                key: string_field(args, "key", tag)?,
            })
        }
        "got" => {
            let args = object(envelope, tag)?;
            Ok(Message::Got {
                label: label_field(args, tag)?,
                key: string_field(args, "key", tag)?,
                value: value_field(args),
            })
        }
        "put" => {
            let args = object(envelope, tag)?;
            Ok(Message::Put {
                key: string_field(args, "key", tag)?,
                value: value_field(args),
            })
        }
        "listkeys" => {
            let args = object(envelope, tag)?;
            Ok(Message::ListKeys {
                label: label_field(args, tag)?,
                prefix: string_field(args, "prefix", tag)?,
            })
        }
        "keys" => {
            let args = object(envelope, tag)?;
            Ok(Message::Keys {
                label: label_field(args, tag)?,
                prefix: string_field(args, "prefix", tag)?,
                keys: keys_field(args, tag)?,
            })
        }
        "clear" => Ok(Message::Clear {
            prefix: bare_string(envelope, tag)?,
        }),
        "simulateget" => {
            let args = object(envelope, tag)?;
            Ok(Message::SimulateGet {
                label: label_field(args, tag)?,
                key: string_field(args, "key", tag)?,
            })
        }
        "simulateput" => {
            let args = object(envelope, tag)?;
            Ok(Message::SimulatePut {
                key: string_field(args, "key", tag)?,
                value: value_field(args),
            })
        }
        "simulatelistkeys" => {
            let args = object(envelope, tag)?;
            Ok(Message::SimulateListKeys {
                label: label_field(args, tag)?,
                prefix: string_field(args, "prefix", tag)?,
            })
        }
        "simulateclear" => Ok(Message::SimulateClear {
            prefix: bare_string(envelope, tag)?,
        }),
        _ => Err(FunnelError::decode(MODULE, format!("unknown tag '{}'", tag))),
    }
}

fn object<'a>(envelope: &'a Envelope, tag: &str) -> Result<&'a Map<String, Value>, FunnelError> {
    envelope
        .args
        .as_object()
        .ok_or_else(|| FunnelError::decode(MODULE, format!("'{}' args must be an object", tag)))
}

fn bare_string(envelope: &Envelope, tag: &str) -> Result<String, FunnelError> {
    envelope
        .args
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| FunnelError::decode(MODULE, format!("'{}' args must be a string", tag)))
}

fn string_field(args: &Map<String, Value>, field: &str, tag: &str) -> Result<String, FunnelError> {
    match args.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(FunnelError::decode(
            MODULE,
            format!("'{}' requires a string '{}' field", tag, field),
        )),
    }
}

/// `label` may be absent or null (no label) or a string.
fn label_field(args: &Map<String, Value>, tag: &str) -> Result<Option<String>, FunnelError> {
    match args.get("label") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(FunnelError::decode(
            MODULE,
            format!("'{}' label must be a string or null", tag),
        )),
    }
}

/// `value` may be absent or null (no value) or any JSON value.
fn value_field(args: &Map<String, Value>) -> Option<Value> {
    match args.get("value") {
        None | Some(Value::Null) => None,
        Some(v) => Some(v.clone()),
    }
}

fn keys_field(args: &Map<String, Value>, tag: &str) -> Result<Vec<String>, FunnelError> {
    let items = args.get("keys").and_then(Value::as_array).ok_or_else(|| {
        FunnelError::decode(MODULE, format!("'{}' requires a 'keys' array", tag))
    })?;
    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                FunnelError::decode(MODULE, format!("'{}' keys must all be strings", tag))
            })
        })
        .collect()
}
