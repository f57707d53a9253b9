//! The activity board: load, display, sign up, unregister
//!
//! Every operation is a single request/response. Failures are reported on the
//! surface and never retried; the board stays usable after any of them.

use std::sync::Arc;

use crate::api::ActivitiesApi;
use crate::config::{BoardConfig, MessageConfig};
use crate::io::HttpClient;
use crate::model::{Activities, SignupRequest};
use crate::render::{build_cards, BoardView};
use crate::surface::{BoardSurface, Notice};
use crate::validate::validate_email;
use crate::BoardError;

/// Activity board client bound to one surface
#[derive(Clone)]
pub struct ActivityBoard {
    api: ActivitiesApi,
    surface: Arc<dyn BoardSurface>,
    messages: Arc<MessageConfig>,
}

impl std::fmt::Debug for ActivityBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityBoard").field("api", &self.api).finish()
    }
}

impl ActivityBoard {
    pub fn new(
        config: &BoardConfig,
        http: Arc<dyn HttpClient>,
        surface: Arc<dyn BoardSurface>,
    ) -> crate::Result<Self> {
        Ok(Self {
            api: ActivitiesApi::new(config, http)?,
            surface,
            messages: Arc::new(config.messages.clone()),
        })
    }

    pub fn api(&self) -> &ActivitiesApi {
        &self.api
    }

    /// Fetch the activity list and redraw the container.
    ///
    /// On failure the container shows the load error message instead.
    pub async fn load_activities(&self) {
        match self.api.fetch_activities().await {
            Ok(activities) => self.display_activities(&activities),
            Err(e) => {
                tracing::warn!("Loading activities failed: {}", e);
                self.surface
                    .render(BoardView::LoadError(self.messages.load_failed.clone()));
            }
        }
    }

    /// Replace the container contents with one card per activity
    pub fn display_activities(&self, activities: &Activities) {
        let cards = build_cards(activities);
        tracing::debug!("Rendering {} activity cards", cards.len());
        self.surface.render(BoardView::Cards(cards));
    }

    /// Sign the email currently in the input field up for `activity_name`.
    ///
    /// Invalid input is reported without touching the network. On success the
    /// list is reloaded once. The outcome is also returned to the caller.
    pub async fn sign_up(&self, activity_name: &str) -> crate::Result<String> {
        let raw = self.surface.email();
        let email = match validate_email(&raw) {
            Ok(email) => email,
            Err(e) => {
                tracing::debug!("Sign-up for {} refused locally: {}", activity_name, e);
                self.surface.notify(Notice::error(e.to_string()));
                return Err(e.into());
            }
        };

        let request = SignupRequest::new(activity_name, email);
        let outcome = self.api.sign_up(&request).await;
        self.settle(&request, outcome, &self.messages.signup_failed)
            .await
    }

    /// Remove `email` from `activity_name`, reloading the list on success
    pub async fn unregister(&self, activity_name: &str, email: &str) -> crate::Result<String> {
        let request = SignupRequest::new(activity_name, email);
        let outcome = self.api.unregister(&request).await;
        self.settle(&request, outcome, &self.messages.unregister_failed)
            .await
    }

    async fn settle(
        &self,
        request: &SignupRequest,
        outcome: crate::Result<String>,
        fallback: &str,
    ) -> crate::Result<String> {
        match &outcome {
            Ok(message) => {
                tracing::debug!(
                    "Request for {} / {} accepted",
                    request.activity_name,
                    request.email
                );
                self.surface.notify(Notice::success(message.clone()));
                self.load_activities().await;
            }
            Err(BoardError::Rejected { status, detail }) => {
                tracing::warn!(
                    "Request for {} rejected with status {}: {}",
                    request.activity_name,
                    status,
                    detail
                );
                self.surface.notify(Notice::error(detail.clone()));
            }
            Err(e) => {
                tracing::error!("Request for {} failed: {}", request.activity_name, e);
                self.surface.notify(Notice::error(fallback));
            }
        }
        outcome
    }
}
