// Shared test helpers

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use footfall::error::CycleError;
use footfall::models::*;
use footfall::snapshot_repo::SnapshotSource;
use reqwest::StatusCode;

/// The worked example: one camera, one zone, two hourly buckets.
pub const EXAMPLE_JSON: &str = r#"{
    "stats": {
        "current_occupancy": 12,
        "today_footfall": 340,
        "peak": { "count": 50, "time": "14:00" },
        "active_cameras": 3
    },
    "cameras": [ { "name": "Entrance", "stream_url": "/s/1" } ],
    "zones": [ { "name": "Aisle 1", "count": 4, "dwell_time": 95 } ],
    "hourly": { "labels": ["09:00", "10:00"], "values": [20, 35] },
    "heatmap_url": "/heatmap.png"
}"#;

pub fn example_snapshot() -> Snapshot {
    Snapshot::from_json(EXAMPLE_JSON).expect("example snapshot parses")
}

/// Example snapshot with a different occupancy and hourly window.
pub fn shifted_snapshot(occupancy: u64, labels: &[&str]) -> Snapshot {
    let mut snapshot = example_snapshot();
    snapshot.stats.current_occupancy = occupancy;
    snapshot.hourly = Hourly {
        labels: labels.iter().map(|l| l.to_string()).collect(),
        values: (0..labels.len()).map(|i| (i * 10) as f64).collect(),
    };
    snapshot
}

/// Stand-in for an unreachable backend.
pub fn transport_fault() -> CycleError {
    CycleError::Status(StatusCode::SERVICE_UNAVAILABLE)
}

/// Replays a fixed script of fetch results, then fails with a transport fault.
#[derive(Default)]
pub struct ScriptedSource {
    script: RefCell<VecDeque<Result<Snapshot, CycleError>>>,
    calls: RefCell<usize>,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = Result<Snapshot, CycleError>>) -> Self {
        Self {
            script: RefCell::new(script.into_iter().collect()),
            calls: RefCell::new(0),
        }
    }

    pub fn push(&self, next: Result<Snapshot, CycleError>) {
        self.script.borrow_mut().push_back(next);
    }

    pub fn calls(&self) -> usize {
        *self.calls.borrow()
    }
}

impl SnapshotSource for ScriptedSource {
    async fn fetch(&self) -> Result<Snapshot, CycleError> {
        *self.calls.borrow_mut() += 1;
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(transport_fault()))
    }
}
