use serde::{Deserialize, Serialize};

use crate::core::NormalizedScale;
use crate::error::{ScaleError, ScaleResult};

use super::ScaleRequest;

pub const SCALE_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope pairing a request with the scale computed for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleJsonContractV1 {
    pub schema_version: u32,
    pub request: ScaleRequest,
    pub scale: NormalizedScale,
}

impl ScaleJsonContractV1 {
    pub fn from_json_str(input: &str) -> ScaleResult<Self> {
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            ScaleError::InvalidData(format!("failed to parse scale contract payload: {e}"))
        })?;
        if payload.schema_version != SCALE_JSON_SCHEMA_V1 {
            return Err(ScaleError::InvalidData(format!(
                "unsupported scale schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload)
    }
}

impl ScaleRequest {
    pub fn from_json_str(input: &str) -> ScaleResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ScaleError::InvalidData(format!("failed to parse scale request: {e}")))
    }

    pub fn to_json_pretty(self) -> ScaleResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            ScaleError::InvalidData(format!("failed to serialize scale request: {e}"))
        })
    }
}

impl NormalizedScale {
    pub fn to_json_pretty(self) -> ScaleResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ScaleError::InvalidData(format!("failed to serialize scale: {e}")))
    }

    pub fn to_json_contract_v1_pretty(self, request: ScaleRequest) -> ScaleResult<String> {
        let payload = ScaleJsonContractV1 {
            schema_version: SCALE_JSON_SCHEMA_V1,
            request,
            scale: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ScaleError::InvalidData(format!("failed to serialize scale contract v1: {e}"))
        })
    }
}
