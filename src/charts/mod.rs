//! Chart-rendering library abstraction: declarative chart specs, the backend
//! contract, and the per-target lifecycle of live chart handles.

mod backend;
pub mod format;
pub mod layout;
pub mod presets;
mod registry;
mod spec;

pub use backend::{ChartBackend, ChartHandle, FrameChartBackend, LiveChart};
pub use presets::{
    DECK_PALETTE_HEX, NEWSPAPER_CHART_TARGET, SOCIAL_MEDIA_CHART_TARGET, deck_palette,
    default_chart_specs, newspaper_chart_spec, social_media_chart_spec,
};
pub use registry::ChartRegistry;
pub use spec::{
    AnimationConfig, AxesConfig, AxisConfig, BorderColor, ChartKind, ChartSpec, Easing, FontSpec,
    LegendConfig, LegendPosition, Palette, RecordFormatter, SegmentStyle, TooltipConfig,
};
