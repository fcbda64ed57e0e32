//! The port adapter: envelopes in, backend operations out.

use funnelstore_envelope::Envelope;
use funnelstore_storage::{decode, encode, Message, MODULE};

use crate::{BackendError, StorageBackend};

/// Services storage request envelopes against a [`StorageBackend`].
///
/// This is the native rendition of the external collaborator the funnel
/// core expects on the far side of the boundary:
///
/// - [`start`](BackendPort::start) yields the protocol's one unprompted
///   message, `startup`, exactly once;
/// - [`handle`](BackendPort::handle) services `get` with a `got` reply,
///   `listkeys` with a `keys` reply, and performs `put` and `clear` with
///   no reply.
///
/// Envelopes for other modules, reply-shaped messages and simulate
/// traffic are not the port's business and come back as `Ok(None)`.
pub struct BackendPort<B> {
    backend: B,
    started: bool,
}

impl<B: StorageBackend> BackendPort<B> {
    /// Wrap a backend in a port.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            started: false,
        }
    }

    /// Announce readiness. Returns the `startup` envelope on the first
    /// call and `None` on every later one.
    pub fn start(&mut self) -> Option<Envelope> {
        if self.started {
            return None;
        }
        self.started = true;
        log::debug!("storage port initialized");
        Some(encode(&Message::Startup))
    }

    /// Service one request envelope.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(reply))` - The request warranted a reply envelope.
    /// * `Ok(None)` - Handled with no reply, or not this port's traffic.
    /// * `Err(BackendError)` - The envelope decoded to a request but the
    ///   backend failed, or the envelope claimed this module and did not
    ///   decode.
    pub fn handle(&mut self, envelope: &Envelope) -> Result<Option<Envelope>, BackendError> {
        if envelope.module != MODULE {
            return Ok(None);
        }
        match decode(envelope)? {
            Message::Get { label, key } => {
                let value = self.backend.read(&key)?;
                log::debug!("get '{}' -> {}", key, if value.is_some() { "hit" } else { "miss" });
                Ok(Some(encode(&Message::Got { label, key, value })))
            }
            Message::Put { key, value } => {
                match value {
                    Some(value) => self.backend.write(&key, value)?,
                    None => self.backend.delete(&key)?,
                }
                Ok(None)
            }
            Message::ListKeys { label, prefix } => {
                let keys = self.backend.list_prefixed(&prefix)?;
                Ok(Some(encode(&Message::Keys {
                    label,
                    prefix,
                    keys,
                })))
            }
            Message::Clear { prefix } => {
                for key in self.backend.list_prefixed(&prefix)? {
                    self.backend.delete(&key)?;
                }
                Ok(None)
            }
            // Replies, startup and simulate traffic never reach a backend.
            _ => Ok(None),
        }
    }

    /// The wrapped backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The wrapped backend, mutably.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
