//! The storage funnel state machine.

use crate::message::Message;
use crate::prefix::strip_prefix;
use crate::response::Response;
use crate::state::State;

/// Fold one incoming message into the state.
///
/// Replies from the backend (`Got`, `Keys`) pass through with their keys
/// stripped back into the application's key space. `Simulate*` messages
/// run against the in-memory simulation store. Request-shaped messages
/// arriving inbound (`Get`, `Put`, `ListKeys`, `Clear`) have no processing
/// rule - a protocol violation by the sender - and are silently ignored:
/// the state passes through untouched and the response is
/// [`Response::None`].
pub fn process(message: Message, state: State) -> (State, Response) {
    match message {
        Message::Startup => {
            if !state.loaded {
                log::debug!("storage backend is up for prefix '{}'", state.prefix);
            }
            (
                State {
                    loaded: true,
                    ..state
                },
                Response::None,
            )
        }

        Message::Got { label, key, value } => {
            let key = strip_prefix(&state.prefix, &key);
            (state, Response::Get { label, key, value })
        }

        Message::Keys {
            label,
            prefix,
            keys,
        } => {
            let keys = keys
                .iter()
                .map(|key| strip_prefix(&state.prefix, key))
                .collect();
            let prefix = strip_prefix(&state.prefix, &prefix);
            (
                state,
                Response::ListKeys {
                    label,
                    prefix,
                    keys,
                },
            )
        }

        Message::SimulateGet { label, key } => {
            let value = state.simulation.get(&key).cloned();
            let key = strip_prefix(&state.prefix, &key);
            (state, Response::Get { label, key, value })
        }

        Message::SimulatePut { key, value } => {
            let mut state = state;
            match value {
                Some(value) => {
                    state.simulation.insert(key, value);
                }
                None => {
                    state.simulation.remove(&key);
                }
            }
            (state, Response::None)
        }

        Message::SimulateListKeys { label, prefix } => {
            let keys = state
                .simulation
                .keys()
                .filter(|key| key.starts_with(&prefix))
                .map(|key| strip_prefix(&state.prefix, key))
                .collect();
            let prefix = strip_prefix(&state.prefix, &prefix);
            (
                state,
                Response::ListKeys {
                    label,
                    prefix,
                    keys,
                },
            )
        }

        Message::SimulateClear { prefix } => {
            let mut state = state;
            state.simulation.retain(|key, _| !key.starts_with(&prefix));
            (state, Response::None)
        }

        // Outbound-only messages arriving as incoming: ignored.
        Message::Get { .. }
        | Message::Put { .. }
        | Message::ListKeys { .. }
        | Message::Clear { .. } => (state, Response::None),
    }
}
