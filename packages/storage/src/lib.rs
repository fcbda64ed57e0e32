//! The key/value storage funnel.
//!
//! This module lets an application issue commands against a persistent
//! key/value storage area - get, put, list keys, clear - and receive the
//! asynchronous replies, all through the generic envelope format. The
//! application core never touches the storage API itself; it only builds
//! request envelopes and folds incoming envelopes through [`process`].
//!
//! Keys are namespaced: every request key is joined to the state's prefix
//! on the way out, and every reply key is stripped on the way back, so
//! application code only ever sees its own unprefixed keys.
//!
//! The same message vocabulary carries `Simulate`-tagged counterparts of
//! every command, driven against an in-memory store inside [`State`]. An
//! application can run entirely simulated - before the real backend has
//! announced itself with `startup`, or in environments with no backend at
//! all - by looping outgoing envelopes back through
//! [`simulate_envelope`].
//!
//! # Example
//!
//! ```rust
//! use funnelstore_storage::{process, Response, State, StorageFunnel, simulate_envelope};
//! use funnelstore_funnel::Funnel;
//! use serde_json::json;
//!
//! let funnel = StorageFunnel::new();
//! let state = State::new("app");
//!
//! // Store a value, then read it back, without a real backend.
//! let put = funnel.put_request(&state, "greeting", Some(json!("hello")));
//! let (state, _) = process(funnel.decode(&simulate_envelope(&put).unwrap()).unwrap(), state);
//!
//! let get = funnel.get_request(&state, None, "greeting");
//! let (_, response) = process(funnel.decode(&simulate_envelope(&get).unwrap()).unwrap(), state);
//!
//! assert_eq!(
//!     response,
//!     Response::Get { label: None, key: "greeting".to_string(), value: Some(json!("hello")) }
//! );
//! ```

mod codec;
mod funnel;
mod message;
pub mod prefix;
mod process;
mod response;
mod simulate;
mod state;

pub use codec::{decode, encode};
pub use funnel::{StorageFunnel, MODULE};
pub use message::Message;
pub use process::process;
pub use response::Response;
pub use simulate::{simulate, simulate_envelope};
pub use state::State;
