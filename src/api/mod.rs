mod deferred;
mod json_contract;
mod presentation;
mod presentation_config;
mod presentation_snapshot;

pub use deferred::{DeferredQueue, DeferredTask};
pub use json_contract::{PRESENTATION_SNAPSHOT_JSON_SCHEMA_V1, PresentationSnapshotJsonContractV1};
pub use presentation::Presentation;
pub use presentation_config::{ChartSlideBinding, PresentationConfig};
pub use presentation_snapshot::PresentationSnapshot;
