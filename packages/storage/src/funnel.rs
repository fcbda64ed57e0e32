//! The storage funnel module and its request builders.

use funnelstore_envelope::Envelope;
use funnelstore_funnel::{Funnel, FunnelError};
use serde_json::Value;

use crate::codec;
use crate::message::Message;
use crate::prefix::add_prefix;
use crate::process;
use crate::response::Response;
use crate::state::State;

/// The fixed module name carried in every storage envelope.
pub const MODULE: &str = "LocalStorage";

/// The storage protocol as a registrable funnel module.
///
/// The funnel itself is stateless; everything per-instance (the namespace
/// prefix, the loaded flag, the simulation store) lives in [`State`].
/// Request builders apply the state's prefix on the way out, and
/// [`process`](crate::process) strips it on the way back, so the
/// application only ever deals in its own unprefixed keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct StorageFunnel;

impl StorageFunnel {
    /// Create the storage funnel module.
    pub fn new() -> Self {
        Self
    }

    /// Build a `get` request envelope for `key` under the state's prefix.
    pub fn get_request(&self, state: &State, label: Option<&str>, key: &str) -> Envelope {
        codec::encode(&Message::Get {
            label: label.map(str::to_string),
            key: add_prefix(state.prefix(), key),
        })
    }

    /// Build a `put` request envelope. `None` asks the backend to delete.
    pub fn put_request(&self, state: &State, key: &str, value: Option<Value>) -> Envelope {
        codec::encode(&Message::Put {
            key: add_prefix(state.prefix(), key),
            value,
        })
    }

    /// Build a `listkeys` request envelope for keys under `prefix`
    /// (itself namespaced under the state's prefix).
    pub fn list_keys_request(&self, state: &State, label: Option<&str>, prefix: &str) -> Envelope {
        codec::encode(&Message::ListKeys {
            label: label.map(str::to_string),
            prefix: add_prefix(state.prefix(), prefix),
        })
    }

    /// Build a `clear` request envelope for keys under `prefix`.
    pub fn clear_request(&self, state: &State, prefix: &str) -> Envelope {
        codec::encode(&Message::Clear {
            prefix: add_prefix(state.prefix(), prefix),
        })
    }
}

impl Funnel for StorageFunnel {
    type Message = Message;
    type Response = Response;
    type State = State;

    fn module_name(&self) -> &'static str {
        MODULE
    }

    fn encode(&self, message: &Message) -> Envelope {
        codec::encode(message)
    }

    fn decode(&self, envelope: &Envelope) -> Result<Message, FunnelError> {
        codec::decode(envelope)
    }

    fn process(&self, message: Message, state: State) -> (State, Response) {
        process::process(message, state)
    }

    /// The storage protocol never chains an outgoing message off a
    /// response; all sends are driven by explicit application action.
    fn commander(&self, _response: &Response, _state: &State) -> Option<Envelope> {
        None
    }
}
