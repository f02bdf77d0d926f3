use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::charts::{NEWSPAPER_CHART_TARGET, SOCIAL_MEDIA_CHART_TARGET};
use crate::core::{ChartTargetId, DEFAULT_TOTAL_SLIDES};
use crate::error::{DeckError, DeckResult};

/// Binds a chart target to the slide that shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSlideBinding {
    pub slide: u32,
    pub target: ChartTargetId,
}

impl ChartSlideBinding {
    #[must_use]
    pub fn new(slide: u32, target: impl Into<ChartTargetId>) -> Self {
        Self {
            slide,
            target: target.into(),
        }
    }
}

/// Public presentation bootstrap configuration.
///
/// Serializable so hosts can ship deck setup as JSON; every field falls back
/// to the default deck when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationConfig {
    #[serde(default = "default_total_slides")]
    pub total_slides: u32,
    /// Delay between activating a chart slide and rebuilding its chart.
    #[serde(default = "default_chart_refresh_delay_ms")]
    pub chart_refresh_delay_ms: u64,
    /// Delay between chart library readiness and the initial chart pass.
    #[serde(default = "default_chart_init_delay_ms")]
    pub chart_init_delay_ms: u64,
    #[serde(default = "default_chart_slides")]
    pub chart_slides: Vec<ChartSlideBinding>,
}

fn default_total_slides() -> u32 {
    DEFAULT_TOTAL_SLIDES
}

fn default_chart_refresh_delay_ms() -> u64 {
    100
}

fn default_chart_init_delay_ms() -> u64 {
    200
}

fn default_chart_slides() -> Vec<ChartSlideBinding> {
    vec![
        ChartSlideBinding::new(3, NEWSPAPER_CHART_TARGET),
        ChartSlideBinding::new(5, SOCIAL_MEDIA_CHART_TARGET),
    ]
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            total_slides: default_total_slides(),
            chart_refresh_delay_ms: default_chart_refresh_delay_ms(),
            chart_init_delay_ms: default_chart_init_delay_ms(),
            chart_slides: default_chart_slides(),
        }
    }
}

impl PresentationConfig {
    /// Creates a config with `total_slides` and no chart slides.
    #[must_use]
    pub fn new(total_slides: u32) -> Self {
        Self {
            total_slides,
            chart_slides: Vec::new(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_chart_slide(mut self, slide: u32, target: impl Into<ChartTargetId>) -> Self {
        self.chart_slides.push(ChartSlideBinding::new(slide, target));
        self
    }

    #[must_use]
    pub fn with_delays_ms(mut self, chart_refresh_delay_ms: u64, chart_init_delay_ms: u64) -> Self {
        self.chart_refresh_delay_ms = chart_refresh_delay_ms;
        self.chart_init_delay_ms = chart_init_delay_ms;
        self
    }

    #[must_use]
    pub fn chart_refresh_delay(&self) -> Duration {
        Duration::from_millis(self.chart_refresh_delay_ms)
    }

    #[must_use]
    pub fn chart_init_delay(&self) -> Duration {
        Duration::from_millis(self.chart_init_delay_ms)
    }

    /// Chart target shown on `slide`, if any.
    #[must_use]
    pub fn chart_target_for_slide(&self, slide: u32) -> Option<&ChartTargetId> {
        self.chart_slides
            .iter()
            .find(|binding| binding.slide == slide)
            .map(|binding| &binding.target)
    }

    pub fn validate(&self) -> DeckResult<()> {
        if self.total_slides == 0 {
            return Err(DeckError::InvalidConfig(
                "total_slides must be >= 1".to_owned(),
            ));
        }

        let mut slides = HashSet::new();
        let mut targets = HashSet::new();
        for binding in &self.chart_slides {
            if !(1..=self.total_slides).contains(&binding.slide) {
                return Err(DeckError::InvalidConfig(format!(
                    "chart slide {} for `{}` is outside 1..={}",
                    binding.slide, binding.target, self.total_slides
                )));
            }
            if !slides.insert(binding.slide) {
                return Err(DeckError::InvalidConfig(format!(
                    "slide {} is bound to more than one chart",
                    binding.slide
                )));
            }
            if !targets.insert(&binding.target) {
                return Err(DeckError::InvalidConfig(format!(
                    "chart target `{}` is bound to more than one slide",
                    binding.target
                )));
            }
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> DeckResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            DeckError::InvalidConfig(format!("failed to parse presentation config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> DeckResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            DeckError::InvalidConfig(format!("failed to serialize presentation config: {e}"))
        })
    }
}
