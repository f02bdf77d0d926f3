//! Display substrate the presentation drives.

mod headless;

pub use headless::HeadlessDisplay;

use crate::core::ChartTargetId;
use crate::interaction::ControlId;

/// Markup/display layer consumed by the presentation controller.
///
/// Implementations map slide ids to displayable regions and own the counter
/// and control widgets. Missing elements are reported through the query
/// methods; setters on absent elements are no-ops.
pub trait DisplaySurface {
    /// Ids of every slide region present, in display order.
    fn slide_ids(&self) -> Vec<u32>;

    fn has_slide(&self, slide: u32) -> bool;

    fn set_slide_active(&mut self, slide: u32, active: bool);

    fn set_counter_text(&mut self, text: &str);

    fn set_control_disabled(&mut self, control: ControlId, disabled: bool);

    fn has_chart_target(&self, target: &ChartTargetId) -> bool;
}
