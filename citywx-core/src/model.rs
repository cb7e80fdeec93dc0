use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic identity of a resolved city, as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub country: String,
}

/// Immutable snapshot of current conditions for one location.
///
/// `temp_c` always holds the provider's native Celsius value; unit
/// conversion happens at render time and is never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: Location,
    pub temp_c: f64,
    pub condition: String,
    pub observed_at: DateTime<Utc>,
}
