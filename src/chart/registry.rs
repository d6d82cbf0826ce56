// In-process chart backend: keeps every live instance so the terminal
// frontend can draw them and tests can count them.

use std::collections::{BTreeMap, HashSet};

use super::{ChartBackend, ChartConfig, ChartData, ChartHandle, ChartKind};
use crate::error::RenderError;
use crate::view::Mount;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartInstance {
    pub mount: Mount,
    pub kind: ChartKind,
    pub series: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Number of redraws since construction.
    pub revision: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartRegistry {
    mounts: HashSet<Mount>,
    live: BTreeMap<ChartHandle, ChartInstance>,
    next_id: u64,
    created_total: u64,
    disposed_total: u64,
}

impl Default for ChartRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartRegistry {
    /// Registry with both chart mount points present.
    pub fn new() -> Self {
        Self::with_mounts([Mount::HourlyChart, Mount::RealtimeChart])
    }

    pub fn with_mounts(mounts: impl IntoIterator<Item = Mount>) -> Self {
        Self {
            mounts: mounts.into_iter().collect(),
            live: BTreeMap::new(),
            next_id: 1,
            created_total: 0,
            disposed_total: 0,
        }
    }

    pub fn get(&self, handle: ChartHandle) -> Option<&ChartInstance> {
        self.live.get(&handle)
    }

    /// Live instances attached to `mount`.
    pub fn live_on(&self, mount: Mount) -> Vec<&ChartInstance> {
        self.live.values().filter(|c| c.mount == mount).collect()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn created_total(&self) -> u64 {
        self.created_total
    }

    pub fn disposed_total(&self) -> u64 {
        self.disposed_total
    }
}

impl ChartBackend for ChartRegistry {
    fn create(&mut self, mount: Mount, config: ChartConfig) -> Result<ChartHandle, RenderError> {
        if !self.mounts.contains(&mount) {
            return Err(RenderError::MissingMount(mount));
        }
        let handle = ChartHandle(self.next_id);
        self.next_id += 1;
        self.created_total += 1;
        self.live.insert(
            handle,
            ChartInstance {
                mount,
                kind: config.kind,
                series: config.series,
                labels: config.labels,
                values: config.values,
                revision: 0,
            },
        );
        Ok(handle)
    }

    fn update(&mut self, handle: ChartHandle, data: ChartData<'_>) -> Result<(), RenderError> {
        let chart = self
            .live
            .get_mut(&handle)
            .ok_or(RenderError::UnknownChart(handle))?;
        chart.labels.clear();
        chart.labels.extend_from_slice(data.labels);
        chart.values.clear();
        chart.values.extend_from_slice(data.values);
        chart.revision += 1;
        Ok(())
    }

    fn dispose(&mut self, handle: ChartHandle) {
        if self.live.remove(&handle).is_some() {
            self.disposed_total += 1;
        }
    }
}
