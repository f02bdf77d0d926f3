use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};

use super::PresentationSnapshot;

pub const PRESENTATION_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: PresentationSnapshot,
}

impl PresentationSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> DeckResult<String> {
        let payload = PresentationSnapshotJsonContractV1 {
            schema_version: PRESENTATION_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            DeckError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> DeckResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<PresentationSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: PresentationSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                DeckError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != PRESENTATION_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(DeckError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
