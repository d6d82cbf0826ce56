// Render targets and the presenters that write into them

pub mod grid;
mod heatmap;
mod page;
pub mod stats;
mod status;

pub use heatmap::HeatmapRef;
pub use page::{Element, Page};
pub use status::ConnectionStatusMonitor;

use std::fmt;

use crate::error::RenderError;

/// Named mount points of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mount {
    ConnectionIndicator,
    ConnectionText,
    CurrentOccupancy,
    TodayFootfall,
    PeakCount,
    PeakTime,
    ActiveCameras,
    CameraGrid,
    ZoneGrid,
    HourlyChart,
    RealtimeChart,
    Heatmap,
    LastUpdated,
}

impl Mount {
    pub const ALL: [Mount; 13] = [
        Mount::ConnectionIndicator,
        Mount::ConnectionText,
        Mount::CurrentOccupancy,
        Mount::TodayFootfall,
        Mount::PeakCount,
        Mount::PeakTime,
        Mount::ActiveCameras,
        Mount::CameraGrid,
        Mount::ZoneGrid,
        Mount::HourlyChart,
        Mount::RealtimeChart,
        Mount::Heatmap,
        Mount::LastUpdated,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Mount::ConnectionIndicator => "status-indicator",
            Mount::ConnectionText => "status-text",
            Mount::CurrentOccupancy => "current-occupancy",
            Mount::TodayFootfall => "today-footfall",
            Mount::PeakCount => "peak-count",
            Mount::PeakTime => "peak-time",
            Mount::ActiveCameras => "active-cameras",
            Mount::CameraGrid => "camera-grid",
            Mount::ZoneGrid => "zone-grid",
            Mount::HourlyChart => "hourly-chart",
            Mount::RealtimeChart => "realtime-chart",
            Mount::Heatmap => "heatmap-img",
            Mount::LastUpdated => "last-update",
        }
    }
}

impl fmt::Display for Mount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One rendered entity in a grid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Card {
    pub title: String,
    pub image: Option<String>,
    pub lines: Vec<String>,
}

/// UI mutation capability. Implementable over any toolkit or a headless harness.
pub trait RenderTarget {
    fn has_mount(&self, mount: Mount) -> bool;
    fn set_text(&mut self, mount: Mount, value: &str) -> Result<(), RenderError>;
    fn set_attr(&mut self, mount: Mount, name: &str, value: &str) -> Result<(), RenderError>;
    /// Drop all children of `mount` and append `cards` in order.
    fn replace_children(&mut self, mount: Mount, cards: Vec<Card>) -> Result<(), RenderError>;
}
