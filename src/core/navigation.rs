use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};

pub const DEFAULT_TOTAL_SLIDES: u32 = 12;

/// Enabled/disabled state of the previous and next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

/// Bounded slide counter.
///
/// `current` always stays in `[1, total]`; the only mutation path is
/// [`NavigationState::go_to`], which refuses out-of-range targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    current: u32,
    total: u32,
}

impl NavigationState {
    pub fn new(total: u32) -> DeckResult<Self> {
        if total == 0 {
            return Err(DeckError::InvalidConfig(
                "presentation needs at least one slide".to_owned(),
            ));
        }
        Ok(Self { current: 1, total })
    }

    #[must_use]
    pub fn current(self) -> u32 {
        self.current
    }

    #[must_use]
    pub fn total(self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn contains(self, slide: u32) -> bool {
        (1..=self.total).contains(&slide)
    }

    /// Moves to `slide`. Returns `false` and leaves the state untouched when
    /// the target is out of range.
    pub fn go_to(&mut self, slide: u32) -> bool {
        if !self.contains(slide) {
            return false;
        }
        self.current = slide;
        true
    }

    /// Target of a "previous" step, or `None` on the first slide.
    #[must_use]
    pub fn previous_target(self) -> Option<u32> {
        (self.current > 1).then(|| self.current - 1)
    }

    /// Target of a "next" step, or `None` on the last slide.
    #[must_use]
    pub fn next_target(self) -> Option<u32> {
        (self.current < self.total).then(|| self.current + 1)
    }

    #[must_use]
    pub fn control_state(self) -> ControlState {
        ControlState {
            previous_disabled: self.current == 1,
            next_disabled: self.current == self.total,
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current: 1,
            total: DEFAULT_TOTAL_SLIDES,
        }
    }
}
