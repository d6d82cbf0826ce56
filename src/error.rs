// Failure taxonomy for refresh cycles and render targets

use reqwest::StatusCode;
use thiserror::Error;

use crate::chart::ChartHandle;
use crate::view::Mount;

/// A presentation step could not reach its target.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("mount point `{0}` is not present")]
    MissingMount(Mount),
    #[error("chart instance {0:?} is not live")]
    UnknownChart(ChartHandle),
}

/// Why a refresh cycle did not apply its snapshot.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server answered {0}")]
    Status(StatusCode),
    #[error("malformed snapshot: {0}")]
    Payload(String),
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
}

/// Coarse cause of a failed cycle. Logged, never rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    Transport,
    Payload,
    Render,
}

impl FaultKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FaultKind::Transport => "transport",
            FaultKind::Payload => "payload",
            FaultKind::Render => "render",
        }
    }
}

impl std::fmt::Display for FaultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CycleError {
    pub fn kind(&self) -> FaultKind {
        match self {
            // A non-success status is reported the same way as an unreachable server.
            CycleError::Transport(_) | CycleError::Status(_) => FaultKind::Transport,
            CycleError::Payload(_) => FaultKind::Payload,
            CycleError::Render(_) => FaultKind::Render,
        }
    }
}
