//! Activity Board - client for the activity sign-up service
//!
//! Loads the activity list, renders it as cards on an injected surface, and
//! submits sign-up and unregister requests for the student's email.

pub mod api;
pub mod board;
pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod render;
pub mod surface;
pub mod validate;

pub use board::ActivityBoard;
pub use config::{parse_config, BoardConfig, MessageConfig};
pub use error::{BoardError, EmailError, Result};
pub use io::{HttpClient, HttpResponse, ReqwestHttpClient};
pub use model::{Activities, Activity, SignupRequest};
pub use render::{ActivityCard, BoardView, Capacity, Roster, NO_PARTICIPANTS};
pub use surface::{BoardSurface, Notice, NoticeKind};
