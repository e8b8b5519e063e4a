//! Activity data as returned by `GET /activities`.
//!
//! The backend answers with a JSON object keyed by activity name:
//! ```text
//! {
//!   "Chess Club": {
//!     "description": "Learn strategies and compete in chess tournaments",
//!     "schedule": "Fridays, 3:30 PM - 5:00 PM",
//!     "max_participants": 12,
//!     "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
//!   },
//!   ...
//! }
//! ```
//! Activities keep the order the backend emitted them in, and rosters keep
//! signup order.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// One extracurricular offering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Capacity minus current roster size.
    ///
    /// Signed: the backend owns the capacity rule, so an over-full activity
    /// reports a negative count instead of wrapping.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// All activities, in backend order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Activities {
    entries: Vec<(String, Activity)>,
}

impl Activities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the body of `GET /activities`.
    pub fn from_json(body: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Append an activity, replacing any existing entry with the same name
    /// in place.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = activity,
            None => self.entries.push((name, activity)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for Activities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ActivitiesVisitor;

        impl<'de> Visitor<'de> for ActivitiesVisitor {
            type Value = Activities;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping activity names to activities")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Activities, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut activities = Activities::new();
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    activities.insert(name, activity);
                }
                Ok(activities)
            }
        }

        deserializer.deserialize_map(ActivitiesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Soccer Team": {
            "description": "Join the school soccer team",
            "schedule": "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            "max_participants": 22,
            "participants": ["james@mergington.edu"]
        },
        "Chess Club": {
            "description": "Learn strategies and compete in chess tournaments",
            "schedule": "Fridays, 3:30 PM - 5:00 PM",
            "max_participants": 12,
            "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
        },
        "Art Studio": {
            "description": "Painting and sculpture",
            "schedule": "Wednesdays, 3:30 PM - 5:00 PM",
            "max_participants": 15,
            "participants": []
        }
    }"#;

    #[test]
    fn test_parse_keeps_backend_order() {
        let activities = Activities::from_json(SAMPLE).unwrap();
        let names: Vec<&str> = activities.names().collect();
        assert_eq!(names, vec!["Soccer Team", "Chess Club", "Art Studio"]);
    }

    #[test]
    fn test_parse_keeps_roster_order() {
        let activities = Activities::from_json(SAMPLE).unwrap();
        let chess = activities.get("Chess Club").unwrap();
        assert_eq!(
            chess.participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
    }

    #[test]
    fn test_spots_left() {
        let activity = Activity {
            description: String::new(),
            schedule: String::new(),
            max_participants: 10,
            participants: vec!["a@x.edu".into(), "b@x.edu".into(), "c@x.edu".into()],
        };
        assert_eq!(activity.spots_left(), 7);
    }

    #[test]
    fn test_spots_left_over_capacity_is_negative() {
        let activity = Activity {
            description: String::new(),
            schedule: String::new(),
            max_participants: 1,
            participants: vec!["a@x.edu".into(), "b@x.edu".into()],
        };
        assert_eq!(activity.spots_left(), -1);
    }

    #[test]
    fn test_missing_participants_defaults_empty() {
        let body = r#"{"Drama Club": {"description": "d", "schedule": "s", "max_participants": 5}}"#;
        let activities = Activities::from_json(body).unwrap();
        assert!(activities.get("Drama Club").unwrap().participants.is_empty());
    }

    #[test]
    fn test_rejects_non_object_body() {
        assert!(Activities::from_json("[]").is_err());
        assert!(Activities::from_json("<html>").is_err());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut activities = Activities::from_json(SAMPLE).unwrap();
        let replacement = Activity {
            description: "Chess".into(),
            schedule: "Mondays".into(),
            max_participants: 4,
            participants: vec![],
        };
        activities.insert("Chess Club", replacement.clone());
        assert_eq!(activities.len(), 3);
        assert_eq!(activities.names().nth(1), Some("Chess Club"));
        assert_eq!(activities.get("Chess Club"), Some(&replacement));
    }
}
