//! The funnel module contract: codec, state machine, commander.

use funnelstore_envelope::Envelope;

use crate::FunnelError;

/// One self-contained protocol module speaking the envelope format.
///
/// A funnel bundles three concerns:
///
/// - a **codec** between its typed [`Message`](Funnel::Message) vocabulary
///   and generic envelopes (`encode`/`decode`);
/// - a **state machine** folding incoming messages into the module's own
///   [`State`](Funnel::State) and yielding a typed
///   [`Response`](Funnel::Response) (`process`);
/// - a **commander** deciding whether a response requires a proactive
///   outgoing envelope (`commander`).
///
/// All operations are pure, synchronous and non-blocking. State is threaded
/// by value: `process` consumes the current state and returns the next one,
/// so a failed decode or an ignored message can never leave it half-updated.
pub trait Funnel {
    /// The module's typed message vocabulary (a closed sum type).
    type Message;
    /// What `process` yields to the application for each incoming message.
    type Response;
    /// The module's slice of application state.
    type State;

    /// The fixed module name carried in every envelope of this protocol.
    fn module_name(&self) -> &'static str;

    /// Encode a typed message into its envelope form. Total and pure.
    fn encode(&self, message: &Self::Message) -> Envelope;

    /// Decode an envelope back into a typed message.
    ///
    /// # Returns
    ///
    /// * `Ok(message)` - The envelope's tag and args matched the vocabulary.
    /// * `Err(FunnelError::Decode)` - Unrecognized tag, or args not matching
    ///   the shape that tag requires.
    fn decode(&self, envelope: &Envelope) -> Result<Self::Message, FunnelError>;

    /// Fold one incoming message into the module state.
    ///
    /// Returns the next state and the typed response the application should
    /// see. Messages with no defined processing rule pass the state through
    /// untouched and yield the module's "no response" value.
    fn process(&self, message: Self::Message, state: Self::State) -> (Self::State, Self::Response);

    /// Decide what, if anything, must be sent back out through the same
    /// channel in reaction to a response.
    ///
    /// This is a required extension point of the registry contract: some
    /// protocols chain an outgoing message off a response. Modules that
    /// never do simply return `None`.
    fn commander(&self, response: &Self::Response, state: &Self::State) -> Option<Envelope>;
}
