//! The envelope triple and its text-boundary helpers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::EnvelopeError;

/// A generic funnel message: which module it belongs to, what it says,
/// and a tag-specific JSON payload.
///
/// Every message that crosses the sync/async boundary travels in one of
/// these. The `module` field is the routing key; `tag` and `args` are
/// opaque at this level and interpreted by the owning module's codec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Name of the funnel module this envelope belongs to.
    pub module: String,
    /// Message discriminator within the module's vocabulary.
    pub tag: String,
    /// Tag-specific payload. `Value::Null` for messages with no payload.
    pub args: Value,
}

impl Envelope {
    /// Build an envelope from its three parts.
    pub fn new(module: impl Into<String>, tag: impl Into<String>, args: Value) -> Self {
        Self {
            module: module.into(),
            tag: tag.into(),
            args,
        }
    }

    /// Serialize to the JSON text form used at the boundary.
    ///
    /// Serialization of a `module`/`tag`/`args` triple cannot fail, so
    /// this returns the string directly.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse an envelope from its JSON text form.
    ///
    /// # Returns
    ///
    /// * `Ok(envelope)` - The parsed envelope.
    /// * `Err(EnvelopeError)` - The text is not a valid envelope.
    pub fn from_json(text: &str) -> Result<Self, EnvelopeError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_round_trip() {
        let envelope = Envelope::new(
            "LocalStorage",
            "put",
            json!({"key": "app.foo", "value": {"n": 1}}),
        );
        let text = envelope.to_json();
        assert_eq!(Envelope::from_json(&text).unwrap(), envelope);
    }

    #[test]
    fn null_args_round_trip() {
        let envelope = Envelope::new("LocalStorage", "startup", Value::Null);
        let text = envelope.to_json();
        let parsed = Envelope::from_json(&text).unwrap();
        assert_eq!(parsed.args, Value::Null);
        assert_eq!(parsed, envelope);
    }

    #[test]
    fn malformed_text_fails() {
        assert!(Envelope::from_json("not json").is_err());
        assert!(Envelope::from_json("{\"module\": \"x\"}").is_err());
        assert!(Envelope::from_json("[1, 2, 3]").is_err());
    }

    #[test]
    fn field_names_on_the_wire() {
        let envelope = Envelope::new("M", "t", json!("p"));
        let text = envelope.to_json();
        let raw: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(raw["module"], "M");
        assert_eq!(raw["tag"], "t");
        assert_eq!(raw["args"], "p");
    }
}
