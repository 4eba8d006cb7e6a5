//! End-to-end tests over a real socket.
//!
//! Each test binds its own listener, so they run in parallel without sharing
//! a port. Shutdown is driven by a oneshot channel instead of a signal.

use std::net::{SocketAddr, TcpListener as StdTcpListener};
use std::time::Instant;

use bluegreen_app::http::{bind, serve, ServerError};
use bluegreen_app::{create_router, AppConfig, AppState, HostInfo};
use serde_json::Value;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A server running in the background until `stop` is called.
struct TestServer {
    port: u16,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<Result<(), ServerError>>,
}

impl TestServer {
    async fn start(config: AppConfig) -> Self {
        let listener = bind(config.bind_addr()).await.expect("bind failed");
        let port = listener.local_addr().unwrap().port();

        let host = HostInfo::detect().unwrap();
        let app = create_router(AppState::new(config, host, Instant::now()));

        let (shutdown, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(serve(listener, app, async move {
            let _ = rx.await;
        }));

        Self {
            port,
            shutdown,
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{}", self.port, path)
    }

    async fn stop(self) {
        let _ = self.shutdown.send(());
        self.handle.await.unwrap().unwrap();
    }
}

/// Reserve a port the OS considers free right now.
fn free_port() -> u16 {
    StdTcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

fn config(port: u16, version: Option<&str>) -> AppConfig {
    let port = port.to_string();
    let version = version.map(str::to_string);
    AppConfig::from_lookup(|key| match key {
        "PORT" => Some(port.clone()),
        "APP_VERSION" => version.clone(),
        _ => None,
    })
    .unwrap()
}

async fn get_json(url: &str) -> (reqwest::StatusCode, Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn serves_health_on_configured_port() {
    let port = free_port();
    let server = TestServer::start(config(port, Some("9.9.9"))).await;
    assert_eq!(server.port, port);

    let (status, json) = get_json(&server.url("/health")).await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], "9.9.9");

    server.stop().await;
}

#[tokio::test]
async fn default_port_is_not_served_when_another_is_configured() {
    let default_addr = format!("127.0.0.1:{}", bluegreen_app::config::DEFAULT_PORT);

    // Something else already owns the default port on this machine
    if StdTcpListener::bind(default_addr.as_str()).is_err() {
        eprintln!("[test] port {default_addr} in use, skipping");
        return;
    }

    let port = free_port();
    let server = TestServer::start(config(port, None)).await;
    assert_ne!(server.port, bluegreen_app::config::DEFAULT_PORT);

    let (status, _) = get_json(&server.url("/health")).await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert!(
        tokio::net::TcpStream::connect(default_addr.as_str()).await.is_err(),
        "connection to {default_addr} should be refused"
    );

    server.stop().await;
}

#[tokio::test]
async fn reports_os_hostname_and_platform() {
    let server = TestServer::start(config(0, None)).await;
    let expected = HostInfo::detect().unwrap();

    let (_, health) = get_json(&server.url("/health")).await;
    let (_, root) = get_json(&server.url("/")).await;
    let (_, again) = get_json(&server.url("/")).await;

    assert_eq!(health["hostname"], expected.hostname.as_str());
    assert_eq!(root["hostname"], expected.hostname.as_str());
    assert_eq!(again["hostname"], root["hostname"]);
    assert_eq!(root["platform"], std::env::consts::OS);
    assert_eq!(root["version"], "1.0.0");
    assert!(again["uptime"].as_f64().unwrap() >= root["uptime"].as_f64().unwrap());

    server.stop().await;
}

#[tokio::test]
async fn bind_fails_when_port_is_taken() {
    let taken = StdTcpListener::bind("0.0.0.0:0").unwrap();
    let addr: SocketAddr = taken.local_addr().unwrap();

    match bind(addr).await {
        Err(ServerError::Bind { addr: failed, .. }) => assert_eq!(failed, addr),
        Err(other) => panic!("expected bind error, got {other}"),
        Ok(_) => panic!("bind unexpectedly succeeded on a port in use"),
    }
}

#[tokio::test]
async fn stops_accepting_after_shutdown() {
    let server = TestServer::start(config(0, None)).await;
    let url = server.url("/health");

    let (status, _) = get_json(&url).await;
    assert_eq!(status, reqwest::StatusCode::OK);

    server.stop().await;

    assert!(reqwest::get(&url).await.is_err());
}
