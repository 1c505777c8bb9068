//! Shared utilities for integration tests.

use std::net::SocketAddr;

use conference_portal::config::PortalConfig;
use conference_portal::http::PortalServer;
use conference_portal::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// A portal running on an ephemeral port for the duration of a test.
pub struct TestPortal {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    shutdown: Shutdown,
}

impl TestPortal {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .form(fields)
            .send()
            .await
            .expect("Portal unreachable")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Portal unreachable")
    }
}

impl Drop for TestPortal {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a portal with the given config, bound to 127.0.0.1:0.
#[allow(dead_code)]
pub async fn start_portal(config: PortalConfig) -> TestPortal {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = PortalServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap();

    TestPortal {
        addr,
        client,
        shutdown,
    }
}

#[allow(dead_code)]
pub async fn start_default_portal() -> TestPortal {
    start_portal(PortalConfig::default()).await
}
