use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Scripted reply for one of the two endpoints.
#[derive(Clone)]
pub struct MockResponse {
    pub status: StatusCode,
    pub body: String,
}

impl MockResponse {
    pub fn new(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// Everything the fake backend saw, for asserting on the wire format.
#[derive(Default)]
pub struct SeenRequests {
    pub list_params: Mutex<Vec<HashMap<String, String>>>,
    pub create_bodies: Mutex<Vec<serde_json::Value>>,
}

#[derive(Clone)]
struct MockState {
    list_response: MockResponse,
    create_response: MockResponse,
    seen: Arc<SeenRequests>,
}

/// In-process stand-in for the accounting backend, bound to an ephemeral
/// localhost port. Replies are scripted per endpoint; requests are
/// recorded for inspection.
pub struct MockApi {
    pub base_url: String,
    pub seen: Arc<SeenRequests>,
}

impl MockApi {
    pub async fn spawn(list_response: MockResponse, create_response: MockResponse) -> Self {
        let seen = Arc::new(SeenRequests::default());
        let state = MockState {
            list_response,
            create_response,
            seen: seen.clone(),
        };

        let app = Router::new()
            .route(
                "/api/v0/accountinginfo",
                get(list_handler).post(create_handler),
            )
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock listener");
        let addr = listener.local_addr().expect("mock listener addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve mock api");
        });

        Self {
            base_url: format!("http://{}/api/v0", addr),
            seen,
        }
    }

    /// The usual happy-path backend: empty result list, creates succeed.
    pub async fn happy() -> Self {
        Self::spawn(
            MockResponse::new(StatusCode::OK, "[]"),
            MockResponse::new(StatusCode::CREATED, r#"{"id": "1"}"#),
        )
        .await
    }
}

async fn list_handler(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    state.seen.list_params.lock().unwrap().push(params);
    respond(state.list_response)
}

async fn create_handler(
    State(state): State<MockState>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.seen.create_bodies.lock().unwrap().push(body);
    respond(state.create_response)
}

fn respond(response: MockResponse) -> impl IntoResponse {
    (
        response.status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
}
