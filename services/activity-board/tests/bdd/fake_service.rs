//! In-process stand-in for the activities service

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use activity_board::model::{ErrorResponse, MessageResponse};
use activity_board::{Activities, Activity};
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tokio::task::JoinHandle;

/// A request as it arrived, with the path and query still encoded
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub uri: String,
}

#[derive(Debug, Default)]
pub struct FakeState {
    pub activities: Vec<(String, Activity)>,
    pub html_listing: bool,
    pub requests: Vec<RecordedRequest>,
}

impl FakeState {
    fn record(&mut self, method: &'static str, uri: &Uri) {
        self.requests.push(RecordedRequest {
            method,
            uri: uri.to_string(),
        });
    }

    pub fn activity_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    pub fn requests_for(&self, method: &str) -> Vec<RecordedRequest> {
        self.requests
            .iter()
            .filter(|r| r.method == method)
            .cloned()
            .collect()
    }
}

pub type SharedFakeState = Arc<Mutex<FakeState>>;

#[derive(Debug, Deserialize)]
struct EmailQuery {
    email: String,
}

#[derive(Debug)]
pub struct FakeService {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl FakeService {
    pub async fn start(state: SharedFakeState) -> Self {
        let router = Router::new()
            .route("/activities", get(list_activities))
            .route("/activities/{name}/signup", post(sign_up))
            .route("/activities/{name}/unregister", delete(unregister))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake service");
        let addr = listener.local_addr().expect("fake service address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        Self { addr, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for FakeService {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn rejected(status: StatusCode, detail: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            detail: detail.to_string(),
        }),
    )
        .into_response()
}

fn confirmed(message: String) -> Response {
    Json(MessageResponse { message }).into_response()
}

async fn list_activities(State(state): State<SharedFakeState>, uri: Uri) -> Response {
    let mut state = state.lock().unwrap();
    state.record("GET", &uri);

    if state.html_listing {
        return (StatusCode::OK, "<html><body>Down for maintenance</body></html>").into_response();
    }

    let activities: Activities = state.activities.iter().cloned().collect();
    Json(activities).into_response()
}

async fn sign_up(
    State(state): State<SharedFakeState>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
    uri: Uri,
) -> Response {
    let mut state = state.lock().unwrap();
    state.record("POST", &uri);

    let Some(activity) = state.activity_mut(&name) else {
        return rejected(StatusCode::NOT_FOUND, "Activity not found");
    };
    if activity.participants.contains(&query.email) {
        return rejected(StatusCode::BAD_REQUEST, "Student is already signed up");
    }
    activity.participants.push(query.email.clone());
    if let Some(current) = activity.current_participants.as_mut() {
        *current += 1;
    }

    confirmed(format!("Signed up {} for {}", query.email, name))
}

async fn unregister(
    State(state): State<SharedFakeState>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
    uri: Uri,
) -> Response {
    let mut state = state.lock().unwrap();
    state.record("DELETE", &uri);

    let Some(activity) = state.activity_mut(&name) else {
        return rejected(StatusCode::NOT_FOUND, "Activity not found");
    };
    let Some(index) = activity.participants.iter().position(|p| *p == query.email) else {
        return rejected(
            StatusCode::NOT_FOUND,
            "Student is not signed up for this activity",
        );
    };
    activity.participants.remove(index);
    if let Some(current) = activity.current_participants.as_mut() {
        *current = current.saturating_sub(1);
    }

    confirmed(format!("Unregistered {} from {}", query.email, name))
}
