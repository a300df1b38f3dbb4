use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::ChartLayoutFrame;

pub const CHART_LAYOUT_FRAME_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayoutFrameJsonContractV1 {
    pub schema_version: u32,
    pub frame: ChartLayoutFrame,
}

impl ChartLayoutFrame {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize layout frame json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartLayoutFrameJsonContractV1 {
            schema_version: CHART_LAYOUT_FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize layout frame contract v1: {e}"))
        })
    }

    /// Accepts either a bare frame or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(frame) = serde_json::from_str::<ChartLayoutFrame>(input) {
            return Ok(frame);
        }
        let payload: ChartLayoutFrameJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse layout frame json payload: {e}"))
        })?;
        if payload.schema_version != CHART_LAYOUT_FRAME_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported layout frame schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.frame)
    }
}
