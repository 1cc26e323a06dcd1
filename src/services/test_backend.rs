// src/services/test_backend.rs
// DOCUMENTATION: Mock places backend for tests
// PURPOSE: Stand-in for the Node backend, including its artificial delay

use actix_web::{dev::ServerHandle, http::StatusCode, web, App, HttpResponse, HttpServer};
use serde_json::Value;
use std::net::{SocketAddr, TcpListener};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Canned reply served for every `GET /places`
#[derive(Debug, Clone)]
pub struct MockReply {
    status: u16,
    body: Value,
    delay: Duration,
}

impl MockReply {
    pub fn ok(body: Value) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: Value) -> Self {
        Self {
            status,
            body,
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

struct MockState {
    reply: MockReply,
    hits: Arc<AtomicUsize>,
}

pub struct MockBackend {
    addr: SocketAddr,
    handle: ServerHandle,
    hits: Arc<AtomicUsize>,
}

impl MockBackend {
    /// Bind to an ephemeral port and serve `reply`. Must run inside an
    /// actix system, e.g. `#[actix_rt::test]`.
    pub async fn start(reply: MockReply) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let state = web::Data::new(MockState {
            reply,
            hits: Arc::clone(&hits),
        });

        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .route("/places", web::get().to(places))
        })
        .workers(1)
        .disable_signals()
        .shutdown_timeout(0)
        .bind(("127.0.0.1", 0))
        .expect("bind mock backend");

        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_rt::spawn(server);

        Self { addr, handle, hits }
    }

    pub fn url(&self) -> String {
        format!("http://{}/places", self.addr)
    }

    /// Number of requests that reached the handler
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

async fn places(state: web::Data<MockState>) -> HttpResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);

    if !state.reply.delay.is_zero() {
        actix_rt::time::sleep(state.reply.delay).await;
    }

    let status = StatusCode::from_u16(state.reply.status).unwrap_or(StatusCode::OK);
    HttpResponse::build(status).json(&state.reply.body)
}

/// URL on a port nothing listens on, for connection-refused cases
pub fn unused_local_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe port");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}/places", addr)
}
