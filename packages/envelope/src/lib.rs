//! Generic funnel envelope: the wire format every funnel module shares.
//!
//! This is the narrow waist of the funnelstore stack. Everything at this
//! level is an opaque `{ module, tag, args }` triple - no tag vocabulary,
//! no payload validation, no protocol semantics. Those belong to the
//! individual funnel modules built on top.
//!
//! Use this layer for:
//! - Moving messages across a text boundary (ports, sockets, message buses)
//! - Routing by module name without inspecting payloads
//! - Any transport that shouldn't pay protocol-decoding costs
//!
//! # Example
//!
//! ```rust
//! use funnelstore_envelope::Envelope;
//! use serde_json::json;
//!
//! let envelope = Envelope::new("LocalStorage", "get", json!({"label": null, "key": "app.foo"}));
//! let text = envelope.to_json();
//! assert_eq!(Envelope::from_json(&text).unwrap(), envelope);
//! ```

mod envelope;
mod error;

pub use envelope::Envelope;
pub use error::EnvelopeError;
