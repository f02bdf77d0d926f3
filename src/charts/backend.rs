use indexmap::IndexMap;
use tracing::debug;

use crate::core::{ChartTargetId, Viewport};
use crate::error::{DeckError, DeckResult};
use crate::render::{RenderFrame, Renderer};

use super::{ChartSpec, layout};

/// Opaque reference to a live chart instance.
///
/// Handles are move-only: destroying a chart consumes its handle, so a
/// destroyed chart cannot be addressed again.
#[derive(Debug, PartialEq, Eq)]
pub struct ChartHandle {
    id: u64,
    target: ChartTargetId,
}

impl ChartHandle {
    #[must_use]
    pub fn new(id: u64, target: ChartTargetId) -> Self {
        Self { id, target }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn target(&self) -> &ChartTargetId {
        &self.target
    }
}

/// Contract of a chart-rendering library.
pub trait ChartBackend {
    fn create_chart(&mut self, target: &ChartTargetId, spec: &ChartSpec)
    -> DeckResult<ChartHandle>;

    fn destroy_chart(&mut self, handle: ChartHandle) -> DeckResult<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiveChart {
    pub target: ChartTargetId,
    pub frame: RenderFrame,
}

/// Chart library that lays charts out into [`RenderFrame`]s and draws them
/// through a [`Renderer`].
pub struct FrameChartBackend<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    next_id: u64,
    live: IndexMap<u64, LiveChart>,
    created_total: usize,
    destroyed_total: usize,
}

impl<R: Renderer> FrameChartBackend<R> {
    pub fn new(renderer: R, viewport: Viewport) -> DeckResult<Self> {
        if !viewport.is_valid() {
            return Err(DeckError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Self {
            renderer,
            viewport,
            next_id: 1,
            live: IndexMap::new(),
            created_total: 0,
            destroyed_total: 0,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn live_count_for(&self, target: &ChartTargetId) -> usize {
        self.live
            .values()
            .filter(|chart| &chart.target == target)
            .count()
    }

    #[must_use]
    pub fn is_live(&self, id: u64) -> bool {
        self.live.contains_key(&id)
    }

    /// Frame of the live chart bound to `target`, if any.
    #[must_use]
    pub fn frame_for(&self, target: &ChartTargetId) -> Option<&RenderFrame> {
        self.live
            .values()
            .find(|chart| &chart.target == target)
            .map(|chart| &chart.frame)
    }

    #[must_use]
    pub fn created_total(&self) -> usize {
        self.created_total
    }

    #[must_use]
    pub fn destroyed_total(&self) -> usize {
        self.destroyed_total
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

impl<R: Renderer> ChartBackend for FrameChartBackend<R> {
    fn create_chart(
        &mut self,
        target: &ChartTargetId,
        spec: &ChartSpec,
    ) -> DeckResult<ChartHandle> {
        spec.validate()?;
        let frame = layout::build_chart_frame(spec, self.viewport)?;
        self.renderer.render(&frame)?;

        let id = self.next_id;
        self.next_id += 1;
        self.created_total += 1;
        debug!(
            chart_id = id,
            target = %target,
            kind = ?spec.kind,
            records = spec.dataset.len(),
            "chart created"
        );
        self.live.insert(
            id,
            LiveChart {
                target: target.clone(),
                frame,
            },
        );
        Ok(ChartHandle::new(id, target.clone()))
    }

    fn destroy_chart(&mut self, handle: ChartHandle) -> DeckResult<()> {
        if self.live.shift_remove(&handle.id()).is_none() {
            return Err(DeckError::Backend(format!(
                "unknown chart handle {} for target `{}`",
                handle.id(),
                handle.target()
            )));
        }
        self.destroyed_total += 1;
        debug!(chart_id = handle.id(), target = %handle.target(), "chart destroyed");
        Ok(())
    }
}
