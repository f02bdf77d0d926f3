use std::time::Duration;

use indexmap::IndexMap;
use tracing::{debug, info, trace};

use crate::charts::{ChartBackend, ChartHandle, ChartRegistry, ChartSpec, default_chart_specs};
use crate::core::{ChartTargetId, ControlState, NavigationState};
use crate::display::DisplaySurface;
use crate::error::{DeckError, DeckResult};
use crate::interaction::{ControlId, KeyInput, KeyOutcome};

use super::{DeferredQueue, DeferredTask, PresentationConfig};

/// Slide presentation controller.
///
/// Owns navigation state, the chart specs of chart-bearing slides and the
/// live chart handles; drives a [`DisplaySurface`] and a [`ChartBackend`].
/// The host constructs one instance and feeds it input events, the chart
/// library readiness signal and clock ticks.
pub struct Presentation<D: DisplaySurface, B: ChartBackend> {
    display: D,
    backend: B,
    config: PresentationConfig,
    navigation: NavigationState,
    chart_specs: IndexMap<ChartTargetId, ChartSpec>,
    charts: ChartRegistry,
    deferred: DeferredQueue,
    chart_library_ready: bool,
}

impl<D: DisplaySurface, B: ChartBackend> Presentation<D, B> {
    /// Builds a presentation and syncs the display to slide 1.
    ///
    /// Every chart slide binding in `config` needs a spec in `chart_specs`.
    pub fn new(
        display: D,
        backend: B,
        config: PresentationConfig,
        chart_specs: IndexMap<ChartTargetId, ChartSpec>,
    ) -> DeckResult<Self> {
        config.validate()?;
        let navigation = NavigationState::new(config.total_slides)?;
        for binding in &config.chart_slides {
            let spec = chart_specs.get(&binding.target).ok_or_else(|| {
                DeckError::InvalidConfig(format!(
                    "no chart spec for target `{}` bound to slide {}",
                    binding.target, binding.slide
                ))
            })?;
            spec.validate()?;
        }

        let mut presentation = Self {
            display,
            backend,
            config,
            navigation,
            chart_specs,
            charts: ChartRegistry::new(),
            deferred: DeferredQueue::new(),
            chart_library_ready: false,
        };
        let current = presentation.navigation.current();
        if presentation.display.has_slide(current) {
            presentation.activate_exclusively(current);
        }
        presentation.sync_counter_and_controls();
        info!(
            total_slides = presentation.navigation.total(),
            chart_slides = presentation.config.chart_slides.len(),
            "presentation initialized"
        );
        Ok(presentation)
    }

    /// Builds the default twelve-slide deck with its two charts.
    pub fn with_default_deck(display: D, backend: B) -> DeckResult<Self> {
        Self::new(
            display,
            backend,
            PresentationConfig::default(),
            default_chart_specs()?,
        )
    }

    #[must_use]
    pub fn current_slide(&self) -> u32 {
        self.navigation.current()
    }

    #[must_use]
    pub fn total_slides(&self) -> u32 {
        self.navigation.total()
    }

    #[must_use]
    pub fn control_state(&self) -> ControlState {
        self.navigation.control_state()
    }

    #[must_use]
    pub fn config(&self) -> &PresentationConfig {
        &self.config
    }

    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn chart_handle(&self, target: &ChartTargetId) -> Option<&ChartHandle> {
        self.charts.handle(target)
    }

    #[must_use]
    pub fn live_chart_targets(&self) -> Vec<ChartTargetId> {
        self.charts.live_targets()
    }

    #[must_use]
    pub fn is_chart_library_ready(&self) -> bool {
        self.chart_library_ready
    }

    #[must_use]
    pub fn pending_task_count(&self) -> usize {
        self.deferred.len()
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.deferred.now()
    }

    #[must_use]
    pub fn into_parts(self) -> (D, B) {
        (self.display, self.backend)
    }

    /// Shows slide `slide`. Returns `false` and changes nothing when the
    /// slide is out of range or has no display region.
    pub fn go_to_slide(&mut self, slide: u32) -> bool {
        if !self.navigation.contains(slide) {
            debug!(
                slide,
                total = self.navigation.total(),
                "ignoring out-of-range slide"
            );
            return false;
        }
        if !self.display.has_slide(slide) {
            debug!(slide, "slide has no display region; ignoring");
            return false;
        }

        self.activate_exclusively(slide);
        self.navigation.go_to(slide);
        self.sync_counter_and_controls();
        debug!(slide, "navigated");

        if let Some(target) = self.config.chart_target_for_slide(slide).cloned() {
            self.deferred.schedule(
                self.config.chart_refresh_delay(),
                DeferredTask::RefreshChart(target),
            );
        }
        true
    }

    pub fn previous_slide(&mut self) -> bool {
        match self.navigation.previous_target() {
            Some(slide) => self.go_to_slide(slide),
            None => false,
        }
    }

    pub fn next_slide(&mut self) -> bool {
        match self.navigation.next_target() {
            Some(slide) => self.go_to_slide(slide),
            None => false,
        }
    }

    /// Activates a navigation control as a pointer click would.
    pub fn click(&mut self, control: ControlId) -> bool {
        match control {
            ControlId::Previous => self.previous_slide(),
            ControlId::Next => self.next_slide(),
        }
    }

    /// Dispatches a key press. Arrow keys are consumed even when they hit a
    /// boundary.
    pub fn handle_key(&mut self, key: KeyInput) -> KeyOutcome {
        match key.navigation_control() {
            Some(control) => {
                self.click(control);
                KeyOutcome::Consumed
            }
            None => KeyOutcome::Ignored,
        }
    }

    /// One-shot readiness signal from whatever loads the chart library.
    ///
    /// The first call schedules the initial chart pass; later calls return
    /// `false` and do nothing.
    pub fn chart_library_ready(&mut self) -> bool {
        if self.chart_library_ready {
            return false;
        }
        self.chart_library_ready = true;
        self.deferred
            .schedule(self.config.chart_init_delay(), DeferredTask::CreateAllCharts);
        debug!("chart library ready; initial chart pass scheduled");
        true
    }

    /// Advances the presentation clock and runs the deferred tasks that came
    /// due. Returns how many tasks ran.
    pub fn advance_time(&mut self, elapsed: Duration) -> usize {
        let due = self.deferred.advance(elapsed);
        let count = due.len();
        for task in due {
            self.run_task(task);
        }
        count
    }

    /// Destroys and rebuilds the chart on `target` right away.
    pub fn refresh_chart(&mut self, target: &ChartTargetId) -> bool {
        let Some(spec) = self.chart_specs.get(target) else {
            debug!(target = %target, "no chart spec for target");
            return false;
        };
        self.charts
            .refresh_chart(&self.display, &mut self.backend, target, spec)
    }

    fn run_task(&mut self, task: DeferredTask) {
        trace!(
            ?task,
            elapsed_ms = self.deferred.now().as_millis() as u64,
            "run deferred task"
        );
        match task {
            DeferredTask::CreateAllCharts => {
                let targets: Vec<ChartTargetId> = self
                    .config
                    .chart_slides
                    .iter()
                    .map(|binding| binding.target.clone())
                    .collect();
                for target in &targets {
                    self.refresh_chart(target);
                }
            }
            DeferredTask::RefreshChart(target) => {
                if !self.chart_library_ready {
                    trace!(
                        target = %target,
                        "chart library not ready; refresh left to initial pass"
                    );
                    return;
                }
                self.refresh_chart(&target);
            }
        }
    }

    /// Deactivates every slide, then activates `slide`.
    fn activate_exclusively(&mut self, slide: u32) {
        for id in self.display.slide_ids() {
            self.display.set_slide_active(id, false);
        }
        self.display.set_slide_active(slide, true);
    }

    fn sync_counter_and_controls(&mut self) {
        let controls = self.navigation.control_state();
        self.display
            .set_counter_text(&self.navigation.current().to_string());
        self.display
            .set_control_disabled(ControlId::Previous, controls.previous_disabled);
        self.display
            .set_control_disabled(ControlId::Next, controls.next_disabled);
    }
}
