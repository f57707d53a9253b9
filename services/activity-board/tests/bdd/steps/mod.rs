//! BDD step definitions for the activity board client

pub mod service_steps;
pub mod signup_steps;
