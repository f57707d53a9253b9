//! View components for the activity board

pub mod activity_card;
pub mod capacity_badge;
pub mod signup_form;
