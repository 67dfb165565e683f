// Vehicle domain models, shaped like the TTSS vehicleinfo payload
use serde::{Deserialize, Deserializer, Serialize};

/// Body of the upstream vehicles endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehiclesResponse {
    /// Epoch milliseconds of the upstream data
    #[serde(deserialize_with = "null_as_default")]
    pub last_update: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub vehicles: Vec<VehicleData>,
}

/// Single vehicle entry.
///
/// Deleted entries arrive with little more than `id` and `isDeleted`,
/// so every field falls back to its zero value when absent or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleData {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_deleted: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(deserialize_with = "null_as_default")]
    pub trip_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub path: Vec<VehiclePath>,
    #[serde(deserialize_with = "null_as_default")]
    pub longitude: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub latitude: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub heading: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehiclePath {
    #[serde(deserialize_with = "null_as_default")]
    pub length: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub y1: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub y2: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub x1: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub x2: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub angle: i32,
}

/// Upstream sends `null` where it means "nothing"; read it as the zero value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
