//! In-process mock backend and a client wired to it

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    body::Body,
    extract::{Query, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use biblioteka_client::{
    config::ApiConfig, HttpClient, Notification, NotificationSink, Services, Severity,
};
use serde_json::Value;

/// One request as seen by the mock backend
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: Option<Value>,
}

#[derive(Default)]
struct BackendState {
    replies: HashMap<(Method, String), (StatusCode, Option<Value>)>,
    requests: Mutex<Vec<Recorded>>,
}

/// Canned replies keyed by method and path; anything else answers 404
#[derive(Default)]
pub struct MockBackend {
    replies: HashMap<(Method, String), (StatusCode, Option<Value>)>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, method: Method, path: &str, status: StatusCode, body: Value) -> Self {
        self.replies
            .insert((method, path.to_string()), (status, Some(body)));
        self
    }

    pub fn reply_empty(mut self, method: Method, path: &str, status: StatusCode) -> Self {
        self.replies.insert((method, path.to_string()), (status, None));
        self
    }

    pub async fn spawn(self) -> TestClient {
        let state = Arc::new(BackendState {
            replies: self.replies,
            requests: Mutex::new(Vec::new()),
        });

        let router = Router::new()
            .fallback(handle)
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let address = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let sink = Arc::new(RecordingSink::default());
        let config = ApiConfig {
            base_url: address.clone(),
            ..ApiConfig::default()
        };
        let http = HttpClient::new(&config, sink.clone()).expect("Failed to build client");

        TestClient {
            address,
            services: Services::new(http),
            sink,
            backend: state,
        }
    }
}

async fn handle(
    State(state): State<Arc<BackendState>>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    body: String,
) -> Response {
    state.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: uri.path().to_string(),
        query,
        body: serde_json::from_str(&body).ok(),
    });

    match state.replies.get(&(method, uri.path().to_string())) {
        Some((status, Some(body))) => (*status, Json(body.clone())).into_response(),
        Some((status, None)) => Response::builder()
            .status(*status)
            .body(Body::empty())
            .unwrap(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Keeps every notification so tests can count them
#[derive(Default)]
pub struct RecordingSink {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    pub fn all(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.all().iter().filter(|n| n.severity == severity).count()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

pub struct TestClient {
    pub address: String,
    pub services: Services,
    pub sink: Arc<RecordingSink>,
    backend: Arc<BackendState>,
}

impl TestClient {
    pub fn requests(&self) -> Vec<Recorded> {
        self.backend.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().expect("No request reached the backend")
    }
}
