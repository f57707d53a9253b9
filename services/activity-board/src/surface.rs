//! The view side of the board: container, email field, notifications

use serde::{Deserialize, Serialize};

use crate::render::BoardView;

/// Whether a notice reports success or failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
}

/// A blocking message for the student
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Handles to the page the board draws on, passed in at construction
#[cfg_attr(test, mockall::automock)]
pub trait BoardSurface: Send + Sync {
    /// Replace everything in the activities container
    fn render(&self, view: BoardView);

    /// Show a blocking notification
    fn notify(&self, notice: Notice);

    /// Current value of the shared email input
    fn email(&self) -> String;
}
