//! In-process axum stub for integration tests
//!
//! One server answers both the homework status route and the Bot API
//! methods. Each route replays its own queue of scripted responses and
//! records what the client sent.

#![allow(dead_code)]

use axum::extract::{Path, Query, State};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Path the homework client is pointed at
pub const HOMEWORK_PATH: &str = "/api/user_api/homework_statuses/";

/// Minimal Message object accepted by the bot client as a sendMessage result
pub const TELEGRAM_OK: &str = r#"{"ok":true,"result":{"message_id":7,"date":1700000000,"chat":{"id":99,"type":"private","first_name":"Student"},"from":{"id":1,"is_bot":true,"first_name":"relay"},"text":"ok"}}"#;

/// Bot API rejection with a real error description
pub const TELEGRAM_CHAT_NOT_FOUND: &str =
    r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#;

const SCRIPT_EXHAUSTED: &str =
    r#"{"ok":false,"error_code":410,"description":"No scripted response left"}"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Homework,
    BotApi,
}

/// One request as seen by the stub
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub route: Route,
    /// Bot token for Bot API calls
    pub token: Option<String>,
    /// Bot API method name as sent by the client
    pub method: Option<String>,
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

type Scripted = (StatusCode, String);

#[derive(Clone, Default)]
struct StubState {
    homework: Arc<Mutex<VecDeque<Scripted>>>,
    bot: Arc<Mutex<VecDeque<Scripted>>>,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl StubState {
    fn record(&self, request: CapturedRequest) {
        self.captured.lock().unwrap().push(request);
    }
}

fn reply(queue: &Mutex<VecDeque<Scripted>>) -> Response {
    let (status, body) = queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or((StatusCode::GONE, SCRIPT_EXHAUSTED.to_string()));
    (status, [(CONTENT_TYPE, "application/json")], body).into_response()
}

async fn homework_statuses(
    State(state): State<StubState>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.record(CapturedRequest {
        route: Route::Homework,
        token: None,
        method: None,
        query,
        authorization,
        body: None,
    });
    reply(&state.homework)
}

async fn bot_method(
    State(state): State<StubState>,
    Path((bot, method)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Response {
    state.record(CapturedRequest {
        route: Route::BotApi,
        token: bot.strip_prefix("bot").map(str::to_string),
        method: Some(method),
        query: HashMap::new(),
        authorization: None,
        body: Some(body),
    });
    reply(&state.bot)
}

/// Scripted answers for both routes, served in order
#[derive(Default)]
pub struct Script {
    homework: Vec<Scripted>,
    bot: Vec<Scripted>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn homework(mut self, status: u16, body: impl Into<String>) -> Self {
        self.homework.push((status_code(status), body.into()));
        self
    }

    pub fn bot(mut self, status: u16, body: impl Into<String>) -> Self {
        self.bot.push((status_code(status), body.into()));
        self
    }

    pub async fn serve(self) -> StubServer {
        let state = StubState::default();
        state.homework.lock().unwrap().extend(self.homework);
        state.bot.lock().unwrap().extend(self.bot);

        let app = Router::new()
            .route(HOMEWORK_PATH, get(homework_statuses))
            .route("/:bot/:method", post(bot_method))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
        let addr = listener.local_addr().expect("stub addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        StubServer {
            base_url: format!("http://{}", addr),
            state,
        }
    }
}

fn status_code(status: u16) -> StatusCode {
    StatusCode::from_u16(status).expect("valid HTTP status")
}

pub struct StubServer {
    pub base_url: String,
    state: StubState,
}

impl StubServer {
    pub fn homework_url(&self) -> String {
        format!("{}{}", self.base_url, HOMEWORK_PATH)
    }

    /// Base URL handed to the bot client
    pub fn bot_api_url(&self) -> &str {
        &self.base_url
    }

    pub fn requests(&self, route: Route) -> Vec<CapturedRequest> {
        self.state
            .captured
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.route == route)
            .cloned()
            .collect()
    }

    pub fn homework_requests(&self) -> Vec<CapturedRequest> {
        self.requests(Route::Homework)
    }

    pub fn bot_requests(&self) -> Vec<CapturedRequest> {
        self.requests(Route::BotApi)
    }
}

/// URL of a port nobody listens on
pub async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind free port");
    let addr = listener.local_addr().expect("free port addr");
    drop(listener);
    format!("http://{}/", addr)
}
