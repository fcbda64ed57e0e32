//! The storage funnel's message vocabulary.

use serde_json::Value;

/// Every message the storage funnel speaks, in both directions.
///
/// `Get`, `Put`, `ListKeys` and `Clear` are requests the application sends
/// out; `Got` and `Keys` are the backend's replies; `Startup` is the one
/// message the backend emits unprompted, once, when it has initialized.
/// The `Simulate` variants are the in-memory counterparts of the four
/// requests, processed locally against the state's simulation store.
///
/// Keys and prefixes inside a `Message` are always fully namespaced - the
/// prefix is added when a request is built and stripped when a reply is
/// processed, never in between.
///
/// `label` is a caller-supplied correlation token echoed back unchanged on
/// the corresponding reply; replies arrive unordered with respect to the
/// requests that caused them, so ordering can never be used to correlate.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The backend has initialized. Sent exactly once, unprompted.
    Startup,
    /// Ask the backend for the value under `key`.
    Get {
        label: Option<String>,
        key: String,
    },
    /// The backend's reply to a `Get`. `value` is `None` for a missing key.
    Got {
        label: Option<String>,
        key: String,
        value: Option<Value>,
    },
    /// Store `value` under `key`; `None` deletes the key.
    Put {
        key: String,
        value: Option<Value>,
    },
    /// Ask the backend for all keys beginning with `prefix`.
    ListKeys {
        label: Option<String>,
        prefix: String,
    },
    /// The backend's reply to a `ListKeys`.
    Keys {
        label: Option<String>,
        prefix: String,
        keys: Vec<String>,
    },
    /// Delete every key beginning with `prefix`; empty prefix deletes all.
    Clear {
        prefix: String,
    },
    /// In-memory counterpart of `Get`.
    SimulateGet {
        label: Option<String>,
        key: String,
    },
    /// In-memory counterpart of `Put`.
    SimulatePut {
        key: String,
        value: Option<Value>,
    },
    /// In-memory counterpart of `ListKeys`.
    SimulateListKeys {
        label: Option<String>,
        prefix: String,
    },
    /// In-memory counterpart of `Clear`.
    SimulateClear {
        prefix: String,
    },
}

impl Message {
    /// The wire tag for this message.
    pub fn tag(&self) -> &'static str {
        match self {
            Message::Startup => "startup",
            Message::Get { .. } => "get",
            Message::Got { .. } => "got",
            Message::Put { .. } => "put",
            Message::ListKeys { .. } => "listkeys",
            Message::Keys { .. } => "keys",
            Message::Clear { .. } => "clear",
            Message::SimulateGet { .. } => "simulateget",
            Message::SimulatePut { .. } => "simulateput",
            Message::SimulateListKeys { .. } => "simulatelistkeys",
            Message::SimulateClear { .. } => "simulateclear",
        }
    }
}
