// Snapshot domain model - what /tram publishes
use super::vehicle::{VehicleData, VehiclesResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_update: DateTime<Utc>,
    pub vehicles: Vec<VehicleData>,
}

impl Snapshot {
    /// Placeholder held until the first successful fetch
    pub fn empty() -> Self {
        Self {
            last_update: DateTime::UNIX_EPOCH,
            vehicles: Vec::new(),
        }
    }

    /// Build the published view of an upstream response.
    ///
    /// Deleted vehicles are dropped, the rest keep their upstream order.
    /// The timestamp is cut down to whole seconds. Returns `None` when the
    /// reported time cannot be represented.
    pub fn from_response(response: VehiclesResponse) -> Option<Self> {
        let last_update = truncate_to_seconds(response.last_update)?;
        let vehicles = response
            .vehicles
            .into_iter()
            .filter(|v| !v.is_deleted)
            .collect();

        Some(Self {
            last_update,
            vehicles,
        })
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

fn truncate_to_seconds(epoch_ms: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(epoch_ms / 1000, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(id: &str, is_deleted: bool) -> VehicleData {
        VehicleData {
            id: id.to_string(),
            is_deleted,
            ..Default::default()
        }
    }

    #[test]
    fn test_filters_deleted_and_keeps_order() {
        let response = VehiclesResponse {
            last_update: 1620000000000,
            vehicles: vec![
                vehicle("a", false),
                vehicle("b", true),
                vehicle("c", false),
                vehicle("d", true),
                vehicle("e", false),
            ],
        };

        let snapshot = Snapshot::from_response(response).unwrap();
        let ids: Vec<&str> = snapshot.vehicles.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "e"]);
    }

    #[test]
    fn test_all_deleted_gives_empty_list() {
        let response = VehiclesResponse {
            last_update: 0,
            vehicles: vec![vehicle("x", true)],
        };

        let snapshot = Snapshot::from_response(response).unwrap();
        assert!(snapshot.vehicles.is_empty());
    }

    #[test]
    fn test_last_update_truncated_to_seconds() {
        let response = VehiclesResponse {
            last_update: 1620000000999,
            vehicles: vec![],
        };

        let snapshot = Snapshot::from_response(response).unwrap();
        assert_eq!(snapshot.last_update.timestamp_millis(), 1620000000000);

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["lastUpdate"], 1620000000000i64);
    }

    #[test]
    fn test_unrepresentable_timestamp() {
        let response = VehiclesResponse {
            last_update: i64::MAX,
            vehicles: vec![],
        };

        assert!(Snapshot::from_response(response).is_none());
    }

    #[test]
    fn test_empty_serializes_to_epoch() {
        let json = serde_json::to_string(&Snapshot::empty()).unwrap();
        assert_eq!(json, r#"{"lastUpdate":0,"vehicles":[]}"#);
    }
}
