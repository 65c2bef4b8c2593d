use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
}

/// One signup-able activity as served by `GET /activities`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Insertion order is signup order.
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Signed and unclamped: a roster that exceeds
    /// capacity shows up as a negative count rather than being hidden.
    pub fn spots_left(&self) -> i64 {
        self.max_participants as i64 - self.participants.len() as i64
    }
}

/// The whole board keyed by activity name. Replaced wholesale on every
/// load, never merged.
pub type ActivityCollection = BTreeMap<String, Activity>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Transient banner shown after a user action. A hidden message keeps its
/// last text until the next one replaces it.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
    pub visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_activity_collection() {
        let json = r#"{"Yoga": {"description":"d","schedule":"s","max_participants":2,"participants":["a@x.com"]}}"#;
        let activities: ActivityCollection = serde_json::from_str(json).unwrap();

        let yoga = &activities["Yoga"];
        assert_eq!(yoga.description, "d");
        assert_eq!(yoga.schedule, "s");
        assert_eq!(yoga.max_participants, 2);
        assert_eq!(yoga.participants, vec!["a@x.com"]);
        assert_eq!(yoga.spots_left(), 1);
    }

    #[test]
    fn spots_left_is_capacity_minus_roster() {
        let activity = Activity {
            description: String::new(),
            schedule: String::new(),
            max_participants: 20,
            participants: vec!["a@x.com".into(), "b@x.com".into()],
        };
        assert_eq!(activity.spots_left(), 18);
    }

    #[test]
    fn spots_left_goes_negative_when_overbooked() {
        let activity = Activity {
            description: String::new(),
            schedule: String::new(),
            max_participants: 1,
            participants: vec!["a@x.com".into(), "b@x.com".into(), "c@x.com".into()],
        };
        assert_eq!(activity.spots_left(), -2);
    }

    #[test]
    fn config_parses_from_toml() {
        let cfg: Config =
            toml::from_str("[api]\nbase_url = \"http://localhost:8000\"\n").unwrap();
        assert_eq!(cfg.api.base_url, "http://localhost:8000");
    }
}
