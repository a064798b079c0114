//! Shared utilities for integration tests.

use std::time::Duration;

use twitch_backend::config::{AppConfig, CorsConfig, TwitchConfig};

/// Build a config for tests, bound to the given port.
pub fn test_config(port: u16, environment: &str) -> AppConfig {
    AppConfig {
        port,
        environment: environment.to_string(),
        cors: CorsConfig::default(),
        twitch: TwitchConfig {
            client_id: "test-client-id".to_string(),
            issuer: "https://id.twitch.tv/oauth2".to_string(),
        },
    }
}

/// Wait for the server to answer on `port`, retrying with backoff.
///
/// More reliable than a fixed sleep in loaded test environments.
#[allow(dead_code)]
pub async fn wait_for_server(port: u16, max_retries: u32) -> reqwest::Client {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let mut delay = Duration::from_millis(10);

    for attempt in 1..=max_retries {
        match client
            .get(format!("http://127.0.0.1:{}/health", port))
            .timeout(Duration::from_millis(200))
            .send()
            .await
        {
            Ok(_) => return client,
            Err(_) if attempt < max_retries => {
                tokio::time::sleep(delay).await;
                delay = std::cmp::min(delay * 2, Duration::from_millis(200));
            }
            Err(e) => panic!("Server not ready after {} attempts: {}", max_retries, e),
        }
    }
    client
}
