//! Funnel layer: typed protocols over the generic envelope format.
//!
//! A *funnel module* is one self-contained protocol - a typed
//! command/response vocabulary, a codec to and from [`Envelope`]s, and a
//! pure state machine that folds incoming messages into the module's own
//! slice of application state.
//!
//! This crate defines the [`Funnel`] contract and the [`FunnelTable`]
//! dispatch registry that lets an application host several independent
//! funnel modules behind a single pair of generic channels, keyed only by
//! the module name carried in every envelope.
//!
//! Use this layer for:
//! - Registering protocol modules against shared application state
//! - Routing incoming envelopes to the right module's decode/process step
//! - Surfacing decode and routing failures as error values, never panics

mod error;
mod registry;
mod traits;

pub use error::FunnelError;
pub use registry::{Dispatched, FunnelTable};
pub use traits::Funnel;

// Re-export the wire layer for convenience
pub use funnelstore_envelope::{Envelope, EnvelopeError};
