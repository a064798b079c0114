//! Socket-level lifecycle tests: bind, serve, ordered shutdown.

use std::time::Duration;

use twitch_backend::http::build_app;
use twitch_backend::lifecycle::{LifecycleState, Server, ServerError};

mod common;

#[tokio::test]
async fn test_start_listens_and_serves_health() {
    let config = common::test_config(28391, "development");
    let server = Server::new(build_app(&config), &config);
    let shutdown = server.shutdown_handle();
    let mut state = server.state_watch();

    assert_eq!(*state.borrow(), LifecycleState::Created);

    let handle = tokio::spawn(server.start());

    state
        .wait_for(|s| *s == LifecycleState::Listening)
        .await
        .expect("server should reach Listening");

    let client = common::wait_for_server(28391, 20).await;
    let response = client
        .get("http://127.0.0.1:28391/health")
        .send()
        .await
        .expect("health request should succeed");
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["environment"], "development");

    shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(15), handle)
        .await
        .expect("server should stop after shutdown trigger")
        .unwrap();
    assert!(result.is_ok(), "graceful shutdown must not error");
}

#[tokio::test]
async fn test_shutdown_reaches_terminated_state() {
    let config = common::test_config(28392, "production");
    let server = Server::new(build_app(&config), &config);
    let shutdown = server.shutdown_handle();
    let mut state = server.state_watch();

    let handle = tokio::spawn(server.start());

    state
        .wait_for(|s| *s == LifecycleState::Listening)
        .await
        .unwrap();

    shutdown.trigger();

    state
        .wait_for(|s| *s == LifecycleState::Terminated)
        .await
        .expect("server should reach Terminated");

    let result = tokio::time::timeout(Duration::from_secs(15), handle)
        .await
        .expect("server task should finish")
        .unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_repeat_trigger_during_drain_is_harmless() {
    let config = common::test_config(28393, "production");
    let server = Server::new(build_app(&config), &config);
    let shutdown = server.shutdown_handle();
    let mut state = server.state_watch();

    let handle = tokio::spawn(server.start());

    state
        .wait_for(|s| *s == LifecycleState::Listening)
        .await
        .unwrap();

    assert!(shutdown.trigger(), "first trigger runs the sequence");
    assert!(!shutdown.trigger(), "second trigger is absorbed");
    assert!(!shutdown.trigger());

    let result = tokio::time::timeout(Duration::from_secs(15), handle)
        .await
        .expect("server should still stop exactly once")
        .unwrap();
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_bind_failure_is_fatal() {
    // Occupy the port first so the server cannot bind it.
    let occupied = tokio::net::TcpListener::bind("0.0.0.0:28394").await.unwrap();

    let config = common::test_config(28394, "production");
    let server = Server::new(build_app(&config), &config);
    let mut state = server.state_watch();

    let result = server.start().await;

    match result {
        Err(ServerError::Bind { port, .. }) => assert_eq!(port, 28394),
        other => panic!("expected bind error, got {:?}", other),
    }
    assert_eq!(
        *state.borrow_and_update(),
        LifecycleState::Created,
        "a failed bind must not report Listening"
    );

    drop(occupied);
}

#[tokio::test]
async fn test_trigger_before_start_prevents_serving_forever() {
    let config = common::test_config(28395, "production");
    let server = Server::new(build_app(&config), &config);
    let shutdown = server.shutdown_handle();

    // Shutdown requested before the listener is even bound.
    shutdown.trigger();

    let result = tokio::time::timeout(Duration::from_secs(15), server.start())
        .await
        .expect("server should exit promptly when already shut down");
    assert!(result.is_ok());
}
