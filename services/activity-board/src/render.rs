//! Turning activities into cards
//!
//! Cards are plain data. The frontend builds elements from them, so participant
//! emails never pass through a markup string.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Activities, Activity};

/// Shown in place of the roster when nobody has signed up
pub const NO_PARTICIPANTS: &str = "No participants yet";

/// Seats taken over seats offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capacity {
    pub taken: u32,
    pub max: u32,
    pub spots_left: u32,
}

impl Capacity {
    pub fn is_full(&self) -> bool {
        self.spots_left == 0
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.taken, self.max)
    }
}

/// Who is on an activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Roster {
    Empty,
    Participants(Vec<String>),
}

/// Everything one card shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub capacity: Capacity,
    pub roster: Roster,
}

impl ActivityCard {
    pub fn new(name: &str, activity: &Activity) -> Self {
        let roster = if activity.participants.is_empty() {
            Roster::Empty
        } else {
            Roster::Participants(activity.participants.clone())
        };

        Self {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            capacity: Capacity {
                taken: activity.taken(),
                max: activity.max_participants,
                spots_left: activity.spots_left(),
            },
            roster,
        }
    }
}

/// What the activities container currently holds.
///
/// Each render replaces the previous view entirely.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoardView {
    #[default]
    Loading,
    Cards(Vec<ActivityCard>),
    LoadError(String),
}

/// One card per activity, in the order given
pub fn build_cards(activities: &Activities) -> Vec<ActivityCard> {
    activities
        .iter()
        .map(|(name, activity)| ActivityCard::new(name, activity))
        .collect()
}
