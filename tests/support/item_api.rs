//! Local stand-in for the Shopee `item/get` endpoint.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

pub const ITEM_PATH: &str = "/api/v4/item/get";

/// What the fake endpoint answers with.
#[derive(Clone)]
pub enum ApiReply {
    Json(Value),
    Status(StatusCode),
    Text(&'static str),
    Delayed(Duration, Value),
}

#[derive(Clone)]
struct ApiState {
    reply: ApiReply,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

pub struct ItemApi {
    pub base_url: String,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl ItemApi {
    /// Start the server on an ephemeral port; it lives until the runtime stops.
    pub async fn spawn(reply: ApiReply) -> Self {
        let queries = Arc::new(Mutex::new(Vec::new()));
        let state = ApiState {
            reply,
            queries: Arc::clone(&queries),
        };
        let app = Router::new()
            .route(ITEM_PATH, get(item))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind item api");
        let addr = listener.local_addr().expect("item api addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve item api");
        });

        Self {
            base_url: format!("http://{addr}"),
            queries,
        }
    }

    pub fn item_url(&self) -> String {
        format!("{}{ITEM_PATH}", self.base_url)
    }

    /// Query parameters of every request received, in order.
    pub fn queries(&self) -> Vec<HashMap<String, String>> {
        self.queries.lock().expect("lock queries").clone()
    }
}

async fn item(
    State(state): State<ApiState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.queries.lock().expect("lock queries").push(params);
    match state.reply {
        ApiReply::Json(body) => Json(body).into_response(),
        ApiReply::Status(status) => (status, "upstream error").into_response(),
        ApiReply::Text(body) => (StatusCode::OK, body).into_response(),
        ApiReply::Delayed(delay, body) => {
            tokio::time::sleep(delay).await;
            Json(body).into_response()
        }
    }
}
