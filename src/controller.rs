// One refresh cycle: pull a snapshot, fan it out to every presenter.
// On failure only the connection indicator changes; everything else stays
// as last rendered.

use tracing::{debug, info, warn};

use crate::chart::{ChartBackend, ChartManager};
use crate::error::{CycleError, FaultKind};
use crate::models::{ConnectionState, Snapshot};
use crate::scheduler::RefreshTask;
use crate::snapshot_repo::SnapshotSource;
use crate::timeseries::TimeSeriesBuffer;
use crate::view::{self, ConnectionStatusMonitor, HeatmapRef, Mount, RenderTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    Applied,
    Failed(FaultKind),
}

/// The single dashboard view of this process: owns the buffer, both charts
/// and the presenter state.
pub struct DashboardController<S, R, C>
where
    S: SnapshotSource,
    R: RenderTarget,
    C: ChartBackend,
{
    source: S,
    target: R,
    charts: ChartManager<C>,
    buffer: TimeSeriesBuffer,
    status: ConnectionStatusMonitor,
    heatmap: HeatmapRef,
    last_fault: Option<FaultKind>,
    cycles_applied: u64,
    cycles_failed: u64,
}

impl<S, R, C> DashboardController<S, R, C>
where
    S: SnapshotSource,
    R: RenderTarget,
    C: ChartBackend,
{
    /// Builds the controller and constructs the realtime chart. A missing
    /// chart mount disables that chart only.
    pub fn new(source: S, target: R, backend: C, capacity: usize) -> Self {
        let buffer = TimeSeriesBuffer::new(capacity);
        let mut charts = ChartManager::new(backend);
        if let Err(e) = charts.init_realtime(&buffer) {
            debug!(error = %e, "realtime chart unavailable");
        }
        Self {
            source,
            target,
            charts,
            buffer,
            status: ConnectionStatusMonitor::new(),
            heatmap: HeatmapRef::default(),
            last_fault: None,
            cycles_applied: 0,
            cycles_failed: 0,
        }
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn charts(&self) -> &ChartManager<C> {
        &self.charts
    }

    pub fn buffer(&self) -> &TimeSeriesBuffer {
        &self.buffer
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn connection(&self) -> Option<ConnectionState> {
        self.status.state()
    }

    /// Cause of the most recent failed cycle; cleared by a successful one.
    pub fn last_fault(&self) -> Option<FaultKind> {
        self.last_fault
    }

    pub fn heatmap_src(&self) -> Option<&str> {
        self.heatmap.current()
    }

    pub fn cycles_applied(&self) -> u64 {
        self.cycles_applied
    }

    pub fn cycles_failed(&self) -> u64 {
        self.cycles_failed
    }

    pub async fn run_cycle(&mut self) -> CycleOutcome {
        let result = match self.source.fetch().await {
            Ok(snapshot) => self.apply(&snapshot),
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => {
                self.last_fault = None;
                self.cycles_applied += 1;
                CycleOutcome::Applied
            }
            Err(e) => {
                let kind = e.kind();
                warn!(fault = %kind, error = %e, operation = "run_cycle", "refresh cycle failed");
                // Render faults flip the indicator too, even though the API answered.
                if let Err(e) = self.status.set_status(&mut self.target, false) {
                    warn!(error = %e, "connection indicator unavailable");
                }
                self.last_fault = Some(kind);
                self.cycles_failed += 1;
                CycleOutcome::Failed(kind)
            }
        }
    }

    fn apply(&mut self, snapshot: &Snapshot) -> Result<(), CycleError> {
        view::stats::render(&mut self.target, &snapshot.stats)?;
        view::grid::render(
            &mut self.target,
            Mount::CameraGrid,
            &snapshot.cameras,
            view::grid::camera_card,
        )?;
        view::grid::render(
            &mut self.target,
            Mount::ZoneGrid,
            &snapshot.zones,
            view::grid::zone_card,
        )?;

        if let Err(e) = self
            .charts
            .init_or_replace(&snapshot.hourly.labels, &snapshot.hourly.values)
        {
            debug!(error = %e, "hourly chart not rendered");
        }

        let now = chrono::Local::now();
        self.buffer.append(
            now.format("%H:%M:%S").to_string(),
            snapshot.stats.current_occupancy as f64,
        );
        if let Err(e) = self.charts.redraw_realtime(&self.buffer) {
            debug!(error = %e, "realtime chart not redrawn");
        }

        self.heatmap.update(&mut self.target, &snapshot.heatmap_url)?;
        self.target.set_text(
            Mount::LastUpdated,
            &format!("Last updated: {}", now.format("%H:%M:%S")),
        )?;

        // Online only once every fallible presenter has succeeded.
        if let Err(e) = self.status.set_status(&mut self.target, true) {
            warn!(error = %e, "connection indicator unavailable");
        }

        info!(
            occupancy = snapshot.stats.current_occupancy,
            cameras = snapshot.cameras.len(),
            zones = snapshot.zones.len(),
            trend_points = self.buffer.len(),
            "snapshot applied"
        );
        Ok(())
    }
}

impl<S, R, C> RefreshTask for DashboardController<S, R, C>
where
    S: SnapshotSource,
    R: RenderTarget,
    C: ChartBackend,
{
    async fn refresh(&mut self) {
        self.run_cycle().await;
    }
}
