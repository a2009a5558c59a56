//! The synchronous facade, driven from plain (non-async) tests.
mod common;

use common::*;
use pokeapi::{Config, Error, Identifier, Session, blocking};

use wiremock::MockServer;

fn start_server() -> (tokio::runtime::Runtime, MockServer) {
    let runtime = tokio::runtime::Runtime::new().expect("Build test runtime");

    let server = runtime.block_on(async {
        let server = MockServer::start().await;
        serve_pikachu(&server).await;

        server
    });

    (runtime, server)
}

#[test]
fn resolves_synchronously() {
    let (_runtime, server) = start_server();
    let session = blocking::Session::new(session(&server)).expect("Build blocking session");

    let by_id = session.resolve_by_id(25).expect("Resolve by id");
    let by_name = session.resolve_by_name("pikachu").expect("Resolve by name");

    assert_is_valid_pikachu(&by_id);
    assert_eq!(by_id, by_name);
}

#[test]
fn rejects_out_of_range_ids_synchronously() {
    let (_runtime, server) = start_server();
    let session = blocking::Session::new(session(&server)).expect("Build blocking session");

    assert!(matches!(session.resolve_by_id(0), Err(Error::OutOfRange(0))));
    assert!(matches!(
        session.resolve_by_id(1026),
        Err(Error::OutOfRange(1026))
    ));
}

#[test]
fn clones_share_the_runtime() {
    let (_runtime, server) = start_server();
    let session = blocking::Session::new(session(&server)).expect("Build blocking session");
    let clone = session.clone();

    let handle = std::thread::spawn(move || clone.resolve(&Identifier::from("pikachu")));

    let pokemon = session.resolve(&Identifier::Id(25)).expect("Resolve by id");
    let other = handle
        .join()
        .expect("Join resolver thread")
        .expect("Resolve by name");

    assert_eq!(pokemon, other);
}

#[test]
#[should_panic(expected = "runtime")]
fn panics_inside_an_async_runtime() {
    let session = Session::new(Config::default()).expect("Build session");
    let session = blocking::Session::new(session).expect("Build blocking session");
    let runtime = tokio::runtime::Runtime::new().expect("Build test runtime");

    runtime.block_on(async {
        let _ = session.resolve_by_id(25);
    });
}
