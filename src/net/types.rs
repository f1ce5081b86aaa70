//! Wire DTOs for the activities API.
//!
//! DESIGN
//! ======
//! The activities endpoint returns a JSON object keyed by activity name. The
//! snapshot keeps entries in the order the server emitted them so the rendered
//! list matches the backend's ordering instead of a hash or sort order.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{Error as _, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// One signup-able activity as returned by `GET /activities`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Activity {
    /// Free-form description shown on the activity card.
    pub description: String,
    /// Human-readable schedule (e.g. `"Fridays, 3:30 PM - 5:00 PM"`).
    pub schedule: String,
    /// Roster capacity.
    #[serde(deserialize_with = "deserialize_capacity")]
    pub max_participants: u32,
    /// Participant emails in server order.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Negative when the server reports an over-full roster.
    #[must_use]
    pub fn spots_left(&self) -> i64 {
        let taken = i64::try_from(self.participants.len()).unwrap_or(i64::MAX);
        i64::from(self.max_participants) - taken
    }
}

/// Full set of activities from one successful fetch, in server order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivitiesSnapshot {
    entries: Vec<(String, Activity)>,
}

impl ActivitiesSnapshot {
    /// Insert or replace an activity. A replaced activity keeps its position.
    pub fn insert(&mut self, name: String, activity: Activity) {
        if let Some(slot) = self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            slot.1 = activity;
        } else {
            self.entries.push((name, activity));
        }
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, activity)| activity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(name, activity)| (name.as_str(), activity))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
impl FromIterator<(String, Activity)> for ActivitiesSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        let mut snapshot = Self::default();
        for (name, activity) in iter {
            snapshot.insert(name, activity);
        }
        snapshot
    }
}

impl<'de> Deserialize<'de> for ActivitiesSnapshot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SnapshotVisitor;

        impl<'de> Visitor<'de> for SnapshotVisitor {
            type Value = ActivitiesSnapshot;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping activity names to activities")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut snapshot = ActivitiesSnapshot::default();
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    snapshot.insert(name, activity);
                }
                Ok(snapshot)
            }
        }

        deserializer.deserialize_map(SnapshotVisitor)
    }
}

/// Success body of the signup and unregister endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Failure body of the activities endpoints.
///
/// The server normally answers `{"detail": "..."}`. Validation failures carry
/// a list in `detail`, and proxies may answer with a bare JSON string or
/// number. Only a non-empty string `detail` counts as detail text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorBody {
    detail: Option<String>,
}

impl ErrorBody {
    pub fn from_value(value: &serde_json::Value) -> Self {
        let detail = value
            .get("detail")
            .and_then(serde_json::Value::as_str)
            .filter(|detail| !detail.is_empty())
            .map(str::to_owned);
        Self { detail }
    }

    #[must_use]
    pub fn detail_text(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn into_detail(self) -> Option<String> {
        self.detail
    }
}

fn deserialize_capacity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return u32::try_from(int).map_err(|_| D::Error::custom("capacity out of range"));
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= f64::from(u32::MAX)
            {
                return Ok(float as u32);
            }
            Err(D::Error::custom("expected non-negative integer capacity"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
