// Online/Offline indicator

use tracing::{info, warn};

use super::{Mount, RenderTarget};
use crate::error::RenderError;
use crate::models::ConnectionState;

#[derive(Debug, Default)]
pub struct ConnectionStatusMonitor {
    state: Option<ConnectionState>,
}

impl ConnectionStatusMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last state written; `None` before the first cycle.
    pub fn state(&self) -> Option<ConnectionState> {
        self.state
    }

    /// Overwrite indicator and text together. Nothing is written unless both
    /// mount points exist.
    pub fn set_status<R: RenderTarget + ?Sized>(
        &mut self,
        target: &mut R,
        online: bool,
    ) -> Result<(), RenderError> {
        for mount in [Mount::ConnectionIndicator, Mount::ConnectionText] {
            if !target.has_mount(mount) {
                return Err(RenderError::MissingMount(mount));
            }
        }
        let next = ConnectionState::from_online(online);
        target.set_attr(Mount::ConnectionIndicator, "class", next.indicator_class())?;
        target.set_text(Mount::ConnectionText, next.label())?;

        if self.state != Some(next) {
            match next {
                ConnectionState::Online => info!(state = next.label(), "connection state changed"),
                ConnectionState::Offline => warn!(state = next.label(), "connection state changed"),
            }
        }
        self.state = Some(next);
        Ok(())
    }
}
