//! Mapping real commands onto their in-memory counterparts.

use funnelstore_envelope::Envelope;

use crate::codec;
use crate::funnel::MODULE;
use crate::message::Message;

/// Map a request onto its `Simulate` counterpart.
///
/// Only the four outgoing commands have a simulation; everything else -
/// replies, `Startup`, messages that are already simulate-variants - maps
/// to `None`.
pub fn simulate(message: &Message) -> Option<Message> {
    match message {
        Message::Get { label, key } => Some(Message::SimulateGet {
            label: label.clone(),
            key: key.clone(),
        }),
        Message::Put { key, value } => Some(Message::SimulatePut {
            key: key.clone(),
            value: value.clone(),
        }),
        Message::ListKeys { label, prefix } => Some(Message::SimulateListKeys {
            label: label.clone(),
            prefix: prefix.clone(),
        }),
        Message::Clear { prefix } => Some(Message::SimulateClear {
            prefix: prefix.clone(),
        }),
        _ => None,
    }
}

/// Loop an outgoing request envelope back as its simulated incoming form.
///
/// This is the boundary adapter's decision point when no real backend is
/// attached: instead of sending the envelope out, feed the returned
/// envelope straight back into dispatch, as if a backend had replied.
/// Envelopes for other modules, undecodable envelopes and messages with no
/// simulation all come back as `None`.
pub fn simulate_envelope(envelope: &Envelope) -> Option<Envelope> {
    if envelope.module != MODULE {
        return None;
    }
    let message = codec::decode(envelope).ok()?;
    simulate(&message).map(|simulated| codec::encode(&simulated))
}
