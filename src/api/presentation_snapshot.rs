use serde::{Deserialize, Serialize};

use crate::charts::ChartBackend;
use crate::core::{ChartTargetId, ControlState};
use crate::display::DisplaySurface;

use super::Presentation;

/// Serializable view of presentation state for diagnostics and tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationSnapshot {
    pub current_slide: u32,
    pub total_slides: u32,
    pub controls: ControlState,
    pub chart_library_ready: bool,
    pub pending_tasks: usize,
    pub elapsed_ms: u64,
    pub live_charts: Vec<ChartTargetId>,
}

impl<D: DisplaySurface, B: ChartBackend> Presentation<D, B> {
    #[must_use]
    pub fn snapshot(&self) -> PresentationSnapshot {
        PresentationSnapshot {
            current_slide: self.current_slide(),
            total_slides: self.total_slides(),
            controls: self.control_state(),
            chart_library_ready: self.is_chart_library_ready(),
            pending_tasks: self.pending_task_count(),
            elapsed_ms: u64::try_from(self.elapsed().as_millis()).unwrap_or(u64::MAX),
            live_charts: self.live_chart_targets(),
        }
    }
}
