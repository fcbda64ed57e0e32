//! Funnelstore: a message-passing bridge between a purely-functional
//! application core and persistent key/value storage.
//!
//! The application issues typed storage commands and folds asynchronous
//! replies through a pure state machine; everything crosses the boundary
//! as generic `{ module, tag, args }` envelopes, routed by a
//! module-name-keyed dispatch table. An in-memory simulation of the
//! backend speaks the same vocabulary, so the whole system runs and tests
//! without a real storage area.
//!
//! The stack, bottom up:
//!
//! - [`Envelope`]: the generic wire triple, no semantics
//! - [`Funnel`] / [`FunnelTable`]: the protocol-module contract and the
//!   dispatch registry
//! - [`StorageFunnel`]: the key/value storage protocol - messages, codec,
//!   namespace prefixing, state machine, simulation
//! - [`BackendPort`]: the adapter servicing request envelopes against a
//!   [`StorageBackend`]

pub use funnelstore_envelope::{Envelope, EnvelopeError};

pub use funnelstore_funnel::{Funnel, FunnelError, FunnelTable};

pub use funnelstore_storage::{
    decode, encode, prefix, process, simulate, simulate_envelope, Message, Response, State,
    StorageFunnel, MODULE,
};

pub use funnelstore_backend::{BackendError, BackendPort, MemoryBackend, StorageBackend};
