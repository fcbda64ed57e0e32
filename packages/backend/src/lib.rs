//! Backend side of the storage funnel.
//!
//! The funnel core never touches a storage API; it only exchanges
//! envelopes with an adapter on the far side of the boundary. This crate
//! supplies that side as a plain capability interface:
//!
//! - [`StorageBackend`]: the four operations a persistent key/value area
//!   must offer (read, write, delete, list-by-prefix), over fully
//!   namespaced keys;
//! - [`MemoryBackend`]: a map-backed implementation;
//! - [`BackendPort`]: the adapter that services request envelopes against
//!   a backend and produces the reply envelopes, honoring the protocol's
//!   startup-once contract.
//!
//! In a browser deployment the port's role is played by a script wired to
//! the real storage area; this crate's port makes the same contract
//! available natively, which is what the integration tests drive.

mod error;
mod memory;
mod port;
mod traits;

pub use error::BackendError;
pub use memory::MemoryBackend;
pub use port::BackendPort;
pub use traits::StorageBackend;
