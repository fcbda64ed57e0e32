//! FunnelTable: route incoming envelopes to registered funnel modules.
//!
//! The table is the only place that knows the full set of registered
//! protocols. It is built once at application startup and treated as
//! read-only thereafter; each registration supplies the module itself plus
//! a pair of accessors for getting the module's state slice out of the
//! aggregate application state and putting an updated slice back in.

use std::collections::BTreeMap;

use funnelstore_envelope::Envelope;

use crate::{Funnel, FunnelError};

/// What one dispatch produced: the caller-supplied response handler's
/// output, and the outgoing envelope the module's commander asked for
/// (if any).
pub type Dispatched<Out> = (Out, Option<Envelope>);

/// A type-erased route servicing one module's envelopes.
type Route<App, Out> =
    Box<dyn Fn(&mut App, &Envelope) -> Result<Dispatched<Out>, FunnelError> + Send + Sync>;

/// Module-name-keyed dispatch table over a shared application state.
///
/// `App` is the host application's aggregate state; `Out` is whatever the
/// caller-supplied response handlers produce (commonly a command/effect
/// value in the host's own vocabulary).
///
/// # Example
///
/// ```rust
/// use funnelstore_funnel::{Envelope, Funnel, FunnelTable};
/// # use funnelstore_funnel::FunnelError;
/// # struct EchoFunnel;
/// # impl Funnel for EchoFunnel {
/// #     type Message = String;
/// #     type Response = String;
/// #     type State = Vec<String>;
/// #     fn module_name(&self) -> &'static str { "Echo" }
/// #     fn encode(&self, m: &String) -> Envelope {
/// #         Envelope::new("Echo", "say", serde_json::Value::String(m.clone()))
/// #     }
/// #     fn decode(&self, e: &Envelope) -> Result<String, FunnelError> {
/// #         e.args.as_str().map(str::to_string)
/// #             .ok_or_else(|| FunnelError::decode("Echo", "args must be a string"))
/// #     }
/// #     fn process(&self, m: String, mut s: Vec<String>) -> (Vec<String>, String) {
/// #         s.push(m.clone());
/// #         (s, m)
/// #     }
/// #     fn commander(&self, _: &String, _: &Vec<String>) -> Option<Envelope> { None }
/// # }
///
/// struct App {
///     echoes: Vec<String>,
/// }
///
/// let mut table: FunnelTable<App, String> = FunnelTable::new();
/// table.register(
///     EchoFunnel,
///     |app: &App| app.echoes.clone(),
///     |app: &mut App, echoes| app.echoes = echoes,
///     |_, response| response,
/// );
///
/// let mut app = App { echoes: Vec::new() };
/// let envelope = Envelope::new("Echo", "say", serde_json::Value::String("hi".into()));
/// let (out, outgoing) = table.dispatch(&mut app, &envelope).unwrap();
/// assert_eq!(out, "hi");
/// assert!(outgoing.is_none());
/// assert_eq!(app.echoes, vec!["hi".to_string()]);
/// ```
pub struct FunnelTable<App, Out> {
    routes: BTreeMap<String, Route<App, Out>>,
}

impl<App, Out> Default for FunnelTable<App, Out> {
    fn default() -> Self {
        Self::new()
    }
}

impl<App, Out> FunnelTable<App, Out> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            routes: BTreeMap::new(),
        }
    }

    /// Register a funnel module under its module name.
    ///
    /// `get_state`/`put_state` are the accessor pair that carve the
    /// module's state slice out of `App` and fold an updated slice back
    /// in. `on_response` receives each typed response together with the
    /// already-updated application state.
    ///
    /// Registering a second module with the same name replaces the first.
    pub fn register<F, G, P, H>(&mut self, funnel: F, get_state: G, put_state: P, on_response: H)
    where
        F: Funnel + Send + Sync + 'static,
        G: Fn(&App) -> F::State + Send + Sync + 'static,
        P: Fn(&mut App, F::State) + Send + Sync + 'static,
        H: Fn(&mut App, F::Response) -> Out + Send + Sync + 'static,
    {
        let name = funnel.module_name().to_string();
        let route: Route<App, Out> = Box::new(move |app, envelope| {
            let message = funnel.decode(envelope)?;
            let state = get_state(app);
            let (state, response) = funnel.process(message, state);
            let outgoing = funnel.commander(&response, &state);
            put_state(app, state);
            Ok((on_response(app, response), outgoing))
        });
        self.routes.insert(name, route);
    }

    /// Route one incoming envelope to the module named in it.
    ///
    /// # Returns
    ///
    /// * `Ok((out, outgoing))` - The response handler's output and the
    ///   module's requested outgoing envelope, if any.
    /// * `Err(FunnelError::UnknownModule)` - No module registered under the
    ///   envelope's module name; no state is touched.
    /// * `Err(FunnelError::Decode)` - The owning module rejected the
    ///   payload; no state is touched.
    pub fn dispatch(&self, app: &mut App, envelope: &Envelope) -> Result<Dispatched<Out>, FunnelError> {
        match self.routes.get(&envelope.module) {
            Some(route) => route(app, envelope),
            None => Err(FunnelError::UnknownModule {
                module: envelope.module.clone(),
            }),
        }
    }

    /// True if a module is registered under this name.
    pub fn contains(&self, module: &str) -> bool {
        self.routes.contains_key(module)
    }

    /// Iterate over registered module names, in name order.
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Number of registered modules.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True if no modules are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    /// Minimal counting module for exercising the table.
    struct CounterFunnel;

    #[derive(Debug, PartialEq)]
    enum CounterMessage {
        Add(i64),
        Reset,
    }

    impl Funnel for CounterFunnel {
        type Message = CounterMessage;
        type Response = Option<i64>;
        type State = i64;

        fn module_name(&self) -> &'static str {
            "Counter"
        }

        fn encode(&self, message: &CounterMessage) -> Envelope {
            match message {
                CounterMessage::Add(n) => Envelope::new("Counter", "add", json!(n)),
                CounterMessage::Reset => Envelope::new("Counter", "reset", Value::Null),
            }
        }

        fn decode(&self, envelope: &Envelope) -> Result<CounterMessage, FunnelError> {
            match envelope.tag.as_str() {
                "add" => envelope
                    .args
                    .as_i64()
                    .map(CounterMessage::Add)
                    .ok_or_else(|| FunnelError::decode("Counter", "'add' args must be an integer")),
                "reset" => Ok(CounterMessage::Reset),
                tag => Err(FunnelError::decode(
                    "Counter",
                    format!("unknown tag '{}'", tag),
                )),
            }
        }

        fn process(&self, message: CounterMessage, state: i64) -> (i64, Option<i64>) {
            match message {
                CounterMessage::Add(n) => (state + n, Some(state + n)),
                CounterMessage::Reset => (0, None),
            }
        }

        fn commander(&self, _response: &Option<i64>, _state: &i64) -> Option<Envelope> {
            None
        }
    }

    struct App {
        counter: i64,
        responses: Vec<Option<i64>>,
    }

    fn table() -> FunnelTable<App, ()> {
        let mut table = FunnelTable::new();
        table.register(
            CounterFunnel,
            |app: &App| app.counter,
            |app: &mut App, counter| app.counter = counter,
            |app: &mut App, response| app.responses.push(response),
        );
        table
    }

    #[test]
    fn dispatch_updates_registered_state() {
        let table = table();
        let mut app = App {
            counter: 0,
            responses: Vec::new(),
        };

        let envelope = Envelope::new("Counter", "add", json!(5));
        let (_, outgoing) = table.dispatch(&mut app, &envelope).unwrap();

        assert!(outgoing.is_none());
        assert_eq!(app.counter, 5);
        assert_eq!(app.responses, vec![Some(5)]);
    }

    #[test]
    fn unknown_module_is_an_error_and_touches_nothing() {
        let table = table();
        let mut app = App {
            counter: 7,
            responses: Vec::new(),
        };

        let envelope = Envelope::new("Clipboard", "copy", Value::Null);
        let err = table.dispatch(&mut app, &envelope).unwrap_err();

        assert_eq!(
            err,
            FunnelError::UnknownModule {
                module: "Clipboard".to_string()
            }
        );
        assert_eq!(app.counter, 7);
        assert!(app.responses.is_empty());
    }

    #[test]
    fn decode_failure_touches_nothing() {
        let table = table();
        let mut app = App {
            counter: 7,
            responses: Vec::new(),
        };

        let envelope = Envelope::new("Counter", "add", json!("not a number"));
        let err = table.dispatch(&mut app, &envelope).unwrap_err();

        assert!(matches!(err, FunnelError::Decode { .. }));
        assert_eq!(app.counter, 7);
        assert!(app.responses.is_empty());
    }

    #[test]
    fn reregistering_replaces() {
        let mut table = table();
        table.register(
            CounterFunnel,
            |app: &App| app.counter,
            |app: &mut App, counter| app.counter = counter * 10,
            |_, _| (),
        );
        assert_eq!(table.len(), 1);

        let mut app = App {
            counter: 1,
            responses: Vec::new(),
        };
        table
            .dispatch(&mut app, &Envelope::new("Counter", "add", json!(1)))
            .unwrap();
        assert_eq!(app.counter, 20);
    }

    #[test]
    fn modules_are_listed_in_order() {
        let table = table();
        assert!(table.contains("Counter"));
        assert!(!table.contains("counter"));
        assert_eq!(table.modules().collect::<Vec<_>>(), vec!["Counter"]);
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
    }

    #[test]
    fn empty_table_rejects_everything() {
        let table: FunnelTable<App, ()> = FunnelTable::new();
        let mut app = App {
            counter: 0,
            responses: Vec::new(),
        };
        let err = table
            .dispatch(&mut app, &Envelope::new("Counter", "add", json!(1)))
            .unwrap_err();
        assert!(matches!(err, FunnelError::UnknownModule { .. }));
    }
}
