//! slide-deck: headless slide presentation controller with embedded charts.
//!
//! The controller tracks a bounded slide index, keeps exactly one slide
//! active on a [`display::DisplaySurface`], and rebuilds the doughnut and bar
//! charts of chart-bearing slides through a [`charts::ChartBackend`]. The
//! bundled [`charts::FrameChartBackend`] lays charts out into render frames
//! drawn by any [`render::Renderer`].

pub mod api;
pub mod charts;
pub mod core;
pub mod display;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{Presentation, PresentationConfig};
pub use error::{DeckError, DeckResult};
