//! Gate record types shared by every screen

use serde::{de, Deserialize, Deserializer, Serialize};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    /// A quit confirmation dialog is showing
    QuitRequested,
    Quitting,
}

/// Operational state of a level-crossing gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum GateStatus {
    Open,
    Closed,
    Maintenance,
}

impl GateStatus {
    pub fn label(&self) -> &'static str {
        match self {
            GateStatus::Open => "Open",
            GateStatus::Closed => "Closed",
            GateStatus::Maintenance => "Maintenance",
        }
    }
}

impl std::fmt::Display for GateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Health classification reported alongside a sensor reading.
///
/// Authored with the data; not derived from `Sensor::health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum SensorStatus {
    Good,
    Warning,
    Error,
}

impl SensorStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SensorStatus::Good => "Good",
            SensorStatus::Warning => "Warning",
            SensorStatus::Error => "Error",
        }
    }
}

impl std::fmt::Display for SensorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A CCTV camera attached to a gate
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CctvFeed {
    pub id: String,
    pub name: String,
}

/// A sensor reading with health percentage.
///
/// Stored wider than a percentage needs so that out-of-range payload values
/// survive parsing and get rejected by catalog validation with the gate named.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Sensor {
    pub name: String,
    pub health: u16,
    pub status: SensorStatus,
}

/// One entry of a gate's activity log
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GateLogEntry {
    /// Display timestamp, kept verbatim
    pub timestamp: String,
    pub action: String,
    pub user: String,
}

/// A railway level-crossing gate with its cameras, sensors and activity log
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GateRecord {
    pub id: String,
    pub name: String,
    pub location: String,
    pub status: GateStatus,
    pub latitude: f64,
    pub longitude: f64,
    /// Every gate carries exactly two camera feeds
    #[serde(alias = "cctvFeeds", deserialize_with = "deserialize_feed_pair")]
    pub cctv_feeds: [CctvFeed; 2],
    #[serde(default)]
    pub sensors: Vec<Sensor>,
    /// Most recent first, by convention of the payload author
    #[serde(default)]
    pub logs: Vec<GateLogEntry>,
}

impl GateRecord {
    /// Case-insensitive substring match against name or location.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.location.to_lowercase().contains(needle)
    }
}

/// Accept a sequence of feeds of any length and reject anything but two.
fn deserialize_feed_pair<'de, D>(deserializer: D) -> Result<[CctvFeed; 2], D::Error>
where
    D: Deserializer<'de>,
{
    let feeds = Vec::<CctvFeed>::deserialize(deserializer)?;
    feeds
        .try_into()
        .map_err(|v: Vec<CctvFeed>| de::Error::invalid_length(v.len(), &"exactly 2 CCTV feeds"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(name: &str, location: &str) -> GateRecord {
        GateRecord {
            id: "T1".to_string(),
            name: name.to_string(),
            location: location.to_string(),
            status: GateStatus::Open,
            latitude: 0.0,
            longitude: 0.0,
            cctv_feeds: [
                CctvFeed {
                    id: "A".to_string(),
                    name: "North".to_string(),
                },
                CctvFeed {
                    id: "B".to_string(),
                    name: "South".to_string(),
                },
            ],
            sensors: Vec::new(),
            logs: Vec::new(),
        }
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(GateStatus::Open.to_string(), "Open");
        assert_eq!(GateStatus::Closed.to_string(), "Closed");
        assert_eq!(GateStatus::Maintenance.to_string(), "Maintenance");
        assert_eq!(SensorStatus::Warning.to_string(), "Warning");
    }

    #[test]
    fn test_matches_name_or_location() {
        let g = gate("Gate 2 - Bekasi Line", "Bekasi West, KM 24.8");
        assert!(g.matches_lowercase("bekasi"));
        assert!(g.matches_lowercase("km 24"));
        assert!(!g.matches_lowercase("depok"));
    }

    #[test]
    fn test_matches_empty_needle() {
        let g = gate("Gate", "Somewhere");
        assert!(g.matches_lowercase(""));
    }

    #[test]
    fn test_feed_pair_rejects_single_feed() {
        let json = r#"{
            "id": "X1", "name": "X", "location": "Y", "status": "Open",
            "latitude": 0.0, "longitude": 0.0,
            "cctv_feeds": [{"id": "A", "name": "Only"}]
        }"#;
        let err = serde_json::from_str::<GateRecord>(json).unwrap_err();
        assert!(err.to_string().contains("exactly 2 CCTV feeds"));
    }

    #[test]
    fn test_feed_pair_accepts_two_feeds() {
        let json = r#"{
            "id": "X1", "name": "X", "location": "Y", "status": "Closed",
            "latitude": 0.0, "longitude": 0.0,
            "cctv_feeds": [{"id": "A", "name": "East"}, {"id": "B", "name": "West"}]
        }"#;
        let gate: GateRecord = serde_json::from_str(json).unwrap();
        assert_eq!(gate.cctv_feeds[1].name, "West");
        assert!(gate.sensors.is_empty());
        assert!(gate.logs.is_empty());
    }

    #[test]
    fn test_camel_case_feed_key_accepted() {
        let json = r#"{
            "id": "G001", "name": "Gate 1", "location": "Jakarta", "status": "Open",
            "latitude": -6.1751, "longitude": 106.865,
            "cctvFeeds": [{"id": "CAM1A", "name": "North"}, {"id": "CAM1B", "name": "South"}]
        }"#;
        let gate: GateRecord = serde_json::from_str(json).unwrap();
        assert_eq!(gate.cctv_feeds[0].id, "CAM1A");
    }

    #[test]
    fn test_health_above_u8_range_still_parses() {
        let sensor: Sensor =
            serde_json::from_str(r#"{"name": "Gate Motor", "health": 300, "status": "Good"}"#)
                .unwrap();
        assert_eq!(sensor.health, 300);
    }

    #[test]
    fn test_status_deserializes_from_plain_name() {
        #[derive(Deserialize)]
        struct Wrapper {
            status: GateStatus,
        }
        let w: Wrapper = toml::from_str("status = \"Maintenance\"").unwrap();
        assert_eq!(w.status, GateStatus::Maintenance);
    }
}
