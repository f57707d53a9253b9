//! Requests against the activities service

use std::sync::Arc;

use reqwest::Url;

use crate::config::BoardConfig;
use crate::io::{HttpClient, HttpResponse};
use crate::model::{Activities, ErrorResponse, MessageResponse, SignupRequest};

/// Typed access to `/activities` and its per-activity actions
#[derive(Clone)]
pub struct ActivitiesApi {
    base: Url,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for ActivitiesApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivitiesApi")
            .field("base", &self.base.as_str())
            .finish()
    }
}

impl ActivitiesApi {
    pub fn new(config: &BoardConfig, http: Arc<dyn HttpClient>) -> crate::Result<Self> {
        let base = config.api_base_url()?;
        tracing::debug!("Created ActivitiesApi for {}", base);
        Ok(Self { base, http })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // api_base_url() already refused cannot-be-a-base URLs
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn action_url(&self, action: &str, request: &SignupRequest) -> String {
        let mut url = self.endpoint(&["activities", &request.activity_name, action]);
        url.query_pairs_mut().append_pair("email", &request.email);
        url.into()
    }

    pub fn activities_url(&self) -> String {
        self.endpoint(&["activities"]).into()
    }

    pub fn signup_url(&self, request: &SignupRequest) -> String {
        self.action_url("signup", request)
    }

    pub fn unregister_url(&self, request: &SignupRequest) -> String {
        self.action_url("unregister", request)
    }

    /// `GET /activities`. Anything but a 2xx JSON map is an error.
    pub async fn fetch_activities(&self) -> crate::Result<Activities> {
        let url = self.activities_url();
        let response = self.http.get(&url).await?;

        if !response.is_success() {
            return Err(crate::BoardError::Http(format!(
                "GET {} returned status {}",
                url, response.status
            )));
        }

        let activities: Activities = serde_json::from_str(&response.body)?;
        tracing::debug!("Fetched {} activities", activities.len());
        Ok(activities)
    }

    /// `POST /activities/{name}/signup?email=...`, returning the confirmation
    pub async fn sign_up(&self, request: &SignupRequest) -> crate::Result<String> {
        let response = self.http.post(&self.signup_url(request)).await?;
        confirmation(response)
    }

    /// `DELETE /activities/{name}/unregister?email=...`, returning the confirmation
    pub async fn unregister(&self, request: &SignupRequest) -> crate::Result<String> {
        let response = self.http.delete(&self.unregister_url(request)).await?;
        confirmation(response)
    }
}

/// `{message}` on success, `{detail}` on rejection.
///
/// A failure body without a string `detail` is not a rejection the student can
/// read, so it is reported as a transport problem.
fn confirmation(response: HttpResponse) -> crate::Result<String> {
    if response.is_success() {
        let body: MessageResponse = serde_json::from_str(&response.body)?;
        return Ok(body.message);
    }

    match serde_json::from_str::<ErrorResponse>(&response.body) {
        Ok(body) => Err(crate::BoardError::Rejected {
            status: response.status,
            detail: body.detail,
        }),
        Err(_) => Err(crate::BoardError::Http(format!(
            "Unexpected status {}: {}",
            response.status, response.body
        ))),
    }
}
