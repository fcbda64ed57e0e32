//! What the process step yields to the application.

use serde_json::Value;

/// The typed response [`process`](crate::process) hands back for each
/// incoming message.
///
/// Keys and prefixes in a `Response` have already had the namespace prefix
/// stripped - they are in the application's own key space.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// The message needed no reply to the application.
    None,
    /// A value (or its absence) arrived for a `get`.
    Get {
        label: Option<String>,
        key: String,
        value: Option<Value>,
    },
    /// A key listing arrived for a `listkeys`.
    ListKeys {
        label: Option<String>,
        prefix: String,
        keys: Vec<String>,
    },
}
