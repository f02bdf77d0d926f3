use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::ChartTargetId;
use crate::display::DisplaySurface;
use crate::error::DeckResult;

use super::{ChartBackend, ChartHandle, ChartSpec};

/// Live chart handles keyed by display target, at most one per target.
#[derive(Debug, Default)]
pub struct ChartRegistry {
    handles: IndexMap<ChartTargetId, ChartHandle>,
}

impl ChartRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a chart on `target`. Any chart already live there is destroyed
    /// first. Returns `false` without side effects when the display has no
    /// such target or the backend refuses to destroy the live chart, and
    /// `false` with no live chart left when the backend refuses to build one.
    pub fn create_chart<D, B>(
        &mut self,
        display: &D,
        backend: &mut B,
        target: &ChartTargetId,
        spec: &ChartSpec,
    ) -> bool
    where
        D: DisplaySurface + ?Sized,
        B: ChartBackend + ?Sized,
    {
        if !display.has_chart_target(target) {
            debug!(target = %target, "chart target missing from display; skipping");
            return false;
        }

        if let Err(err) = self.destroy_chart(backend, target) {
            warn!(target = %target, error = %err, "live chart kept; skipping rebuild");
            return false;
        }
        match backend.create_chart(target, spec) {
            Ok(handle) => {
                self.handles.insert(target.clone(), handle);
                true
            }
            Err(err) => {
                warn!(target = %target, error = %err, "chart backend failed to build chart");
                false
            }
        }
    }

    /// Destroy-then-create from the same static spec.
    pub fn refresh_chart<D, B>(
        &mut self,
        display: &D,
        backend: &mut B,
        target: &ChartTargetId,
        spec: &ChartSpec,
    ) -> bool
    where
        D: DisplaySurface + ?Sized,
        B: ChartBackend + ?Sized,
    {
        debug!(target = %target, live = self.handles.contains_key(target), "refresh chart");
        self.create_chart(display, backend, target, spec)
    }

    /// Destroys the chart live on `target`. Returns whether one existed.
    ///
    /// When the backend refuses, the handle stays registered and the error is
    /// returned.
    pub fn destroy_chart<B>(&mut self, backend: &mut B, target: &ChartTargetId) -> DeckResult<bool>
    where
        B: ChartBackend + ?Sized,
    {
        let Some((index, key, handle)) = self.handles.shift_remove_full(target) else {
            return Ok(false);
        };
        let retained = ChartHandle::new(handle.id(), handle.target().clone());
        if let Err(err) = backend.destroy_chart(handle) {
            self.handles.shift_insert(index, key, retained);
            return Err(err);
        }
        Ok(true)
    }

    #[must_use]
    pub fn handle(&self, target: &ChartTargetId) -> Option<&ChartHandle> {
        self.handles.get(target)
    }

    #[must_use]
    pub fn live_targets(&self) -> Vec<ChartTargetId> {
        self.handles.keys().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
