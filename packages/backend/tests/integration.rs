//! End-to-end flows: application state, dispatch table, port, backend.

use funnelstore_backend::{BackendPort, MemoryBackend, StorageBackend};
use funnelstore_envelope::Envelope;
use funnelstore_funnel::{FunnelError, FunnelTable};
use funnelstore_storage::{simulate_envelope, Response, State, StorageFunnel};
use serde_json::{json, Value};

/// A host application holding one storage funnel instance.
struct App {
    storage: State,
    responses: Vec<Response>,
}

impl App {
    fn new(prefix: &str) -> Self {
        Self {
            storage: State::new(prefix),
            responses: Vec::new(),
        }
    }

    /// Responses the application actually saw (dropping the silent ones).
    fn seen(&self) -> Vec<&Response> {
        self.responses
            .iter()
            .filter(|r| **r != Response::None)
            .collect()
    }
}

fn table() -> FunnelTable<App, ()> {
    let mut table = FunnelTable::new();
    table.register(
        StorageFunnel::new(),
        |app: &App| app.storage.clone(),
        |app: &mut App, state| app.storage = state,
        |app: &mut App, response| app.responses.push(response),
    );
    table
}

/// Send a request envelope to the port, feeding any reply back through
/// dispatch - one full round over the boundary.
fn round_trip(
    table: &FunnelTable<App, ()>,
    app: &mut App,
    port: &mut BackendPort<MemoryBackend>,
    request: &Envelope,
) {
    if let Some(reply) = port.handle(request).unwrap() {
        table.dispatch(app, &reply).unwrap();
    }
}

#[test]
fn startup_flows_through_dispatch() {
    let table = table();
    let mut app = App::new("app");
    let mut port = BackendPort::new(MemoryBackend::new());

    assert!(!app.storage.is_loaded());
    let startup = port.start().unwrap();
    table.dispatch(&mut app, &startup).unwrap();
    assert!(app.storage.is_loaded());

    // The port only announces once.
    assert!(port.start().is_none());
}

#[test]
fn get_round_trip_with_prefix() {
    // prefix "app": the request key goes out namespaced as "app.foo",
    // the backend replies with the stored value, and the application
    // sees the stripped key again.
    let table = table();
    let mut app = App::new("app");
    let mut port = BackendPort::new(MemoryBackend::new());
    port.backend_mut().write("app.foo", json!("bar")).unwrap();

    let funnel = StorageFunnel::new();
    let request = funnel.get_request(&app.storage, None, "foo");
    round_trip(&table, &mut app, &mut port, &request);

    assert_eq!(
        app.seen(),
        vec![&Response::Get {
            label: None,
            key: "foo".to_string(),
            value: Some(json!("bar")),
        }]
    );
}

#[test]
fn put_list_clear_against_the_backend() {
    let table = table();
    let mut app = App::new("app");
    let mut port = BackendPort::new(MemoryBackend::new());
    let funnel = StorageFunnel::new();

    for (key, value) in [("x", json!(1)), ("y", json!(2))] {
        let request = funnel.put_request(&app.storage, key, Some(value));
        round_trip(&table, &mut app, &mut port, &request);
    }
    assert_eq!(port.backend().len(), 2);

    let request = funnel.list_keys_request(&app.storage, Some("ls"), "");
    round_trip(&table, &mut app, &mut port, &request);
    assert_eq!(
        app.seen(),
        vec![&Response::ListKeys {
            label: Some("ls".to_string()),
            prefix: "".to_string(),
            keys: vec!["x".to_string(), "y".to_string()],
        }]
    );

    let request = funnel.clear_request(&app.storage, "");
    round_trip(&table, &mut app, &mut port, &request);
    assert!(port.backend().is_empty());
}

#[test]
fn simulated_mode_matches_backend_mode() {
    let funnel = StorageFunnel::new();

    // The same command sequence, once over a real backend and once
    // looped back through the simulation.
    let drive = |simulated: bool| -> Vec<Response> {
        let table = table();
        let mut app = App::new("app");
        let mut port = BackendPort::new(MemoryBackend::new());

        let requests = |state: &State| {
            vec![
                funnel.put_request(state, "x", Some(json!(1))),
                funnel.put_request(state, "y", Some(json!(2))),
                funnel.get_request(state, Some("g"), "x"),
                funnel.list_keys_request(state, None, ""),
                funnel.put_request(state, "x", None),
                funnel.get_request(state, None, "x"),
            ]
        };

        for request in requests(&app.storage) {
            if simulated {
                let looped = simulate_envelope(&request).unwrap();
                table.dispatch(&mut app, &looped).unwrap();
            } else if let Some(reply) = port.handle(&request).unwrap() {
                table.dispatch(&mut app, &reply).unwrap();
            }
        }
        app.responses.into_iter().filter(|r| *r != Response::None).collect()
    };

    let over_backend = drive(false);
    let over_simulation = drive(true);
    assert_eq!(over_backend, over_simulation);
    assert_eq!(
        over_simulation,
        vec![
            Response::Get {
                label: Some("g".to_string()),
                key: "x".to_string(),
                value: Some(json!(1)),
            },
            Response::ListKeys {
                label: None,
                prefix: "".to_string(),
                keys: vec!["x".to_string(), "y".to_string()],
            },
            Response::Get {
                label: None,
                key: "x".to_string(),
                value: None,
            },
        ]
    );
}

#[test]
fn optimistic_simulation_before_startup() {
    // An application may run simulated until the backend announces
    // itself, then switch to the real channel.
    let table = table();
    let mut app = App::new("app");
    let funnel = StorageFunnel::new();

    let put = funnel.put_request(&app.storage, "draft", Some(json!("text")));
    table
        .dispatch(&mut app, &simulate_envelope(&put).unwrap())
        .unwrap();
    let get = funnel.get_request(&app.storage, None, "draft");
    table
        .dispatch(&mut app, &simulate_envelope(&get).unwrap())
        .unwrap();

    assert!(!app.storage.is_loaded());
    assert_eq!(
        app.seen(),
        vec![&Response::Get {
            label: None,
            key: "draft".to_string(),
            value: Some(json!("text")),
        }]
    );

    let mut port = BackendPort::new(MemoryBackend::new());
    let startup = port.start().unwrap();
    table.dispatch(&mut app, &startup).unwrap();
    assert!(app.storage.is_loaded());
}

#[test]
fn unknown_module_leaves_registered_state_alone() {
    let table = table();
    let mut app = App::new("app");
    let before = app.storage.clone();

    let envelope = Envelope::new("Clipboard", "copy", Value::Null);
    let err = table.dispatch(&mut app, &envelope).unwrap_err();

    assert!(matches!(err, FunnelError::UnknownModule { .. }));
    assert_eq!(app.storage, before);
    assert!(app.responses.is_empty());
}

#[test]
fn malformed_payload_is_an_error_not_a_crash() {
    let table = table();
    let mut app = App::new("app");

    let envelope = Envelope::new("LocalStorage", "get", json!(42));
    let err = table.dispatch(&mut app, &envelope).unwrap_err();
    assert!(matches!(err, FunnelError::Decode { .. }));
    assert!(app.responses.is_empty());
}
