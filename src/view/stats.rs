// Scalar stat tiles

use super::{Mount, RenderTarget};
use crate::error::RenderError;
use crate::models::Stats;

/// Project the five scalar stats onto their tiles. A missing tile is an error,
/// not a silent skip.
pub fn render<R: RenderTarget + ?Sized>(target: &mut R, stats: &Stats) -> Result<(), RenderError> {
    target.set_text(Mount::CurrentOccupancy, &stats.current_occupancy.to_string())?;
    target.set_text(Mount::TodayFootfall, &stats.today_footfall.to_string())?;
    target.set_text(Mount::PeakCount, &stats.peak.count.to_string())?;
    target.set_text(Mount::PeakTime, &stats.peak.time)?;
    target.set_text(Mount::ActiveCameras, &stats.active_cameras.to_string())?;
    Ok(())
}
