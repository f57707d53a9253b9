//! Wire types for the activities service

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An activity as returned by `GET /activities`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_participants: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_spots: Option<i64>,
}

impl Activity {
    /// Number of seats taken.
    ///
    /// The server may send `current_participants`; when it does, it wins over
    /// the length of the roster. The two are not reconciled.
    pub fn taken(&self) -> u32 {
        self.current_participants
            .unwrap_or_else(|| u32::try_from(self.participants.len()).unwrap_or(u32::MAX))
    }

    /// Seats still open, preferring the server's own figure.
    pub fn spots_left(&self) -> u32 {
        match self.available_spots {
            Some(spots) => u32::try_from(spots.max(0)).unwrap_or(u32::MAX),
            None => self.max_participants.saturating_sub(self.taken()),
        }
    }
}

/// Activities keyed by name, in the order the server listed them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Activities(Vec<(String, Activity)>);

impl Activities {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.0.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }
}

impl FromIterator<(String, Activity)> for Activities {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Activities {
    type Item = (String, Activity);
    type IntoIter = std::vec::IntoIter<(String, Activity)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for Activities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, activity) in &self.0 {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Activities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ActivitiesVisitor;

        impl<'de> Visitor<'de> for ActivitiesVisitor {
            type Value = Activities;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
                    entries.push((name, activity));
                }
                Ok(Activities(entries))
            }
        }

        deserializer.deserialize_map(ActivitiesVisitor)
    }
}

/// Who wants to join or leave which activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub activity_name: String,
    pub email: String,
}

impl SignupRequest {
    pub fn new(activity_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            activity_name: activity_name.into(),
            email: email.into(),
        }
    }
}

/// Body of a successful sign-up or unregister
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of a rejected request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
