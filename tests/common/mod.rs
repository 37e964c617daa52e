//! In-process axum server standing in for the lead server.

use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use pushkind_leads::gateway::HttpLeadGateway;
use reqwest::blocking::Client;

#[derive(Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

#[derive(Clone)]
struct StubState {
    responses: Arc<Mutex<VecDeque<(u16, String)>>>,
    requests: Arc<Mutex<Sender<RecordedRequest>>>,
}

/// Serves the canned `(status, body)` responses in order, one per request.
pub struct StubServer {
    pub base_url: String,
    requests: Receiver<RecordedRequest>,
}

impl StubServer {
    pub fn start(responses: Vec<(u16, &str)>) -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        listener
            .set_nonblocking(true)
            .expect("non-blocking stub listener");
        let addr = listener.local_addr().expect("stub server address");
        let (tx, rx) = mpsc::channel();

        let state = StubState {
            responses: Arc::new(Mutex::new(
                responses
                    .into_iter()
                    .map(|(status, body)| (status, body.to_string()))
                    .collect(),
            )),
            requests: Arc::new(Mutex::new(tx)),
        };
        let app = Router::new().fallback(respond).with_state(state);

        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("stub runtime");
            runtime.block_on(async move {
                let listener =
                    tokio::net::TcpListener::from_std(listener).expect("tokio stub listener");
                axum::serve(listener, app).await.expect("stub server");
            });
        });

        Self {
            base_url: format!("http://{addr}"),
            requests: rx,
        }
    }

    /// Next request received by the stub.
    pub fn next_request(&self) -> RecordedRequest {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("stub server received no request")
    }

    pub fn gateway(&self) -> HttpLeadGateway {
        gateway_for(&self.base_url)
    }
}

async fn respond(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    body: String,
) -> Response {
    if let Ok(requests) = state.requests.lock() {
        let _ = requests.send(RecordedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            body,
        });
    }

    let next = state
        .responses
        .lock()
        .ok()
        .and_then(|mut responses| responses.pop_front());
    match next {
        Some((status, body)) => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        None => (StatusCode::NOT_IMPLEMENTED, "no canned response left").into_response(),
    }
}

/// Gateway bypassing any proxy configured in the environment.
pub fn gateway_for(base_url: &str) -> HttpLeadGateway {
    let client = Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("http client");
    HttpLeadGateway::with_client(base_url, client)
}
