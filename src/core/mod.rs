pub mod dataset;
pub mod navigation;
pub mod types;

pub use dataset::{ChartDataset, ChartRecord, newspaper_circulation, social_media_users};
pub use navigation::{ControlState, DEFAULT_TOTAL_SLIDES, NavigationState};
pub use types::{ChartTargetId, Viewport};
