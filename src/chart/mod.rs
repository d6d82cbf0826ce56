// Chart lifecycle: the hourly bar chart is rebuilt when its categories move,
// the realtime line chart is built once and only redrawn.

mod registry;

pub use registry::{ChartInstance, ChartRegistry};

use tracing::{debug, error};

use crate::error::RenderError;
use crate::timeseries::TimeSeriesBuffer;
use crate::view::Mount;

/// Opaque id of one constructed chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChartHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Categorical axis, one bar per label.
    Bar,
    /// Continuous trend line.
    Line,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    /// Series name shown in the legend/title.
    pub series: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Borrowed series handed to [`ChartBackend::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartData<'a> {
    pub labels: &'a [String],
    pub values: &'a [f64],
}

/// Minimal charting capability; any rendering library can sit behind it.
pub trait ChartBackend {
    /// Construct a chart on `mount`. Fails if the mount point is absent.
    fn create(&mut self, mount: Mount, config: ChartConfig) -> Result<ChartHandle, RenderError>;
    /// Redraw an existing chart with new data, keeping the instance.
    fn update(&mut self, handle: ChartHandle, data: ChartData<'_>) -> Result<(), RenderError>;
    /// Release the instance and everything it holds.
    fn dispose(&mut self, handle: ChartHandle);
}

#[derive(Debug, Clone, PartialEq)]
enum Slot {
    Empty,
    Live {
        handle: ChartHandle,
        labels: Vec<String>,
    },
    /// Mount point missing; this chart stays off for the rest of the process.
    Disabled,
}

/// Owns both dashboard charts and enforces one live instance per mount point.
pub struct ChartManager<B: ChartBackend> {
    backend: B,
    hourly_mount: Mount,
    realtime_mount: Mount,
    hourly: Slot,
    realtime: Slot,
}

impl<B: ChartBackend> ChartManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            hourly_mount: Mount::HourlyChart,
            realtime_mount: Mount::RealtimeChart,
            hourly: Slot::Empty,
            realtime: Slot::Empty,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn hourly_handle(&self) -> Option<ChartHandle> {
        match self.hourly {
            Slot::Live { handle, .. } => Some(handle),
            _ => None,
        }
    }

    pub fn realtime_handle(&self) -> Option<ChartHandle> {
        match self.realtime {
            Slot::Live { handle, .. } => Some(handle),
            _ => None,
        }
    }

    /// Bind the hourly chart to `labels`/`values`.
    ///
    /// Same categories as the live instance: values are updated in place.
    /// Different categories: the old instance is disposed before the new one
    /// is constructed, so the bound labels are never a merge of two snapshots.
    pub fn init_or_replace(&mut self, labels: &[String], values: &[f64]) -> Result<(), RenderError> {
        if let Slot::Live { handle, labels: bound } = &self.hourly
            && bound.as_slice() == labels
        {
            let handle = *handle;
            match self.backend.update(handle, ChartData { labels, values }) {
                Ok(()) => return Ok(()),
                Err(e) => debug!(error = %e, "hourly chart update failed; recreating"),
            }
        }

        match std::mem::replace(&mut self.hourly, Slot::Empty) {
            Slot::Live { handle, .. } => self.backend.dispose(handle),
            Slot::Disabled => {
                self.hourly = Slot::Disabled;
                return Ok(());
            }
            Slot::Empty => {}
        }

        let config = ChartConfig {
            kind: ChartKind::Bar,
            series: "Hourly footfall".into(),
            labels: labels.to_vec(),
            values: values.to_vec(),
        };
        match self.backend.create(self.hourly_mount, config) {
            Ok(handle) => {
                self.hourly = Slot::Live {
                    handle,
                    labels: labels.to_vec(),
                };
                Ok(())
            }
            Err(e) => {
                self.disable_on_missing_mount(ChartKind::Bar, &e);
                Err(e)
            }
        }
    }

    /// Construct the realtime chart over the buffer. Done once at startup;
    /// later calls are no-ops.
    pub fn init_realtime(&mut self, buffer: &TimeSeriesBuffer) -> Result<(), RenderError> {
        if self.realtime != Slot::Empty {
            return Ok(());
        }
        let config = ChartConfig {
            kind: ChartKind::Line,
            series: "Occupancy".into(),
            labels: buffer.labels().to_vec(),
            values: buffer.values().to_vec(),
        };
        match self.backend.create(self.realtime_mount, config) {
            Ok(handle) => {
                self.realtime = Slot::Live {
                    handle,
                    labels: Vec::new(),
                };
                Ok(())
            }
            Err(e) => {
                self.disable_on_missing_mount(ChartKind::Line, &e);
                Err(e)
            }
        }
    }

    /// Redraw the realtime chart from the buffer. Never recreates it.
    pub fn redraw_realtime(&mut self, buffer: &TimeSeriesBuffer) -> Result<(), RenderError> {
        match self.realtime {
            Slot::Live { handle, .. } => self.backend.update(handle, buffer.as_chart_data()),
            Slot::Empty | Slot::Disabled => Ok(()),
        }
    }

    fn disable_on_missing_mount(&mut self, kind: ChartKind, e: &RenderError) {
        if let RenderError::MissingMount(mount) = e {
            error!(mount = %mount, chart = ?kind, "chart mount point missing; chart disabled");
            match kind {
                ChartKind::Bar => self.hourly = Slot::Disabled,
                ChartKind::Line => self.realtime = Slot::Disabled,
            }
        }
    }
}
