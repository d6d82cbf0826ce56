// One pull of the aggregated dashboard state (GET {base}/dashboard)

use serde::Deserialize;

use super::{Camera, Zone};
use crate::error::CycleError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Peak {
    pub count: u64,
    /// Wall-clock text of the peak, e.g. "14:00".
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stats {
    pub current_occupancy: u64,
    pub today_footfall: u64,
    pub peak: Peak,
    pub active_cameras: u64,
}

/// Hourly footfall histogram; `labels[i]` names the bucket holding `values[i]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hourly {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Snapshot {
    pub stats: Stats,
    pub cameras: Vec<Camera>,
    pub zones: Vec<Zone>,
    pub hourly: Hourly,
    /// Stable path of the heatmap image; cache-busting happens client side.
    pub heatmap_url: String,
}

impl Snapshot {
    /// Parse a response body and check its structural shape.
    pub fn from_json(body: &str) -> Result<Self, CycleError> {
        let snapshot: Snapshot =
            serde_json::from_str(body).map_err(|e| CycleError::Payload(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Structural checks serde cannot express.
    pub fn validate(&self) -> Result<(), CycleError> {
        if self.hourly.labels.len() != self.hourly.values.len() {
            return Err(CycleError::Payload(format!(
                "hourly.labels has {} entries but hourly.values has {}",
                self.hourly.labels.len(),
                self.hourly.values.len()
            )));
        }
        Ok(())
    }
}
