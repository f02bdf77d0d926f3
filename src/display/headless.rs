use indexmap::{IndexMap, IndexSet};

use crate::core::ChartTargetId;
use crate::interaction::ControlId;

use super::DisplaySurface;

/// In-memory display used by tests and headless tools.
///
/// Starts the way the deck's markup does: slide 1 active, empty counter,
/// both controls enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessDisplay {
    slides: IndexMap<u32, bool>,
    counter_text: String,
    previous_disabled: bool,
    next_disabled: bool,
    chart_targets: IndexSet<ChartTargetId>,
}

impl HeadlessDisplay {
    #[must_use]
    pub fn with_slides(count: u32) -> Self {
        Self {
            slides: (1..=count).map(|slide| (slide, slide == 1)).collect(),
            counter_text: String::new(),
            previous_disabled: false,
            next_disabled: false,
            chart_targets: IndexSet::new(),
        }
    }

    #[must_use]
    pub fn with_chart_target(mut self, target: impl Into<ChartTargetId>) -> Self {
        self.chart_targets.insert(target.into());
        self
    }

    /// Drops the region of `slide`, as if the markup lacked it.
    #[must_use]
    pub fn without_slide(mut self, slide: u32) -> Self {
        self.slides.shift_remove(&slide);
        self
    }

    #[must_use]
    pub fn active_slides(&self) -> Vec<u32> {
        self.slides
            .iter()
            .filter(|(_, active)| **active)
            .map(|(slide, _)| *slide)
            .collect()
    }

    #[must_use]
    pub fn is_slide_active(&self, slide: u32) -> bool {
        self.slides.get(&slide).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn counter_text(&self) -> &str {
        &self.counter_text
    }

    #[must_use]
    pub fn is_control_disabled(&self, control: ControlId) -> bool {
        match control {
            ControlId::Previous => self.previous_disabled,
            ControlId::Next => self.next_disabled,
        }
    }
}

impl DisplaySurface for HeadlessDisplay {
    fn slide_ids(&self) -> Vec<u32> {
        self.slides.keys().copied().collect()
    }

    fn has_slide(&self, slide: u32) -> bool {
        self.slides.contains_key(&slide)
    }

    fn set_slide_active(&mut self, slide: u32, active: bool) {
        if let Some(state) = self.slides.get_mut(&slide) {
            *state = active;
        }
    }

    fn set_counter_text(&mut self, text: &str) {
        text.clone_into(&mut self.counter_text);
    }

    fn set_control_disabled(&mut self, control: ControlId, disabled: bool) {
        match control {
            ControlId::Previous => self.previous_disabled = disabled,
            ControlId::Next => self.next_disabled = disabled,
        }
    }

    fn has_chart_target(&self, target: &ChartTargetId) -> bool {
        self.chart_targets.contains(target)
    }
}
