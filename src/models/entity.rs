// Camera feeds and zone analytics shown in the entity grids

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Camera {
    pub name: String,
    /// Opaque image source for the live feed.
    pub stream_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Zone {
    pub name: String,
    pub count: u64,
    /// Average dwell time in seconds.
    pub dwell_time: f64,
}
