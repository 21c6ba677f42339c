//! JSON form of a [`RenderRequest`].
//!
//! Written payloads carry a `schema_version` next to the request. Reading
//! also accepts a bare request object, which is what older callers stored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BuildResult, GraphiteError};

use super::RenderRequest;

pub const RENDER_REQUEST_SCHEMA_VERSION: u32 = 1;

const SCHEMA_VERSION_FIELD: &str = "schema_version";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedRenderRequest {
    pub schema_version: u32,
    pub request: RenderRequest,
}

impl RenderRequest {
    pub fn to_json_pretty(&self) -> BuildResult<String> {
        let payload = VersionedRenderRequest {
            schema_version: RENDER_REQUEST_SCHEMA_VERSION,
            request: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| json_error("encode", e))
    }

    pub fn from_json_str(input: &str) -> BuildResult<Self> {
        let value: Value = serde_json::from_str(input).map_err(|e| json_error("decode", e))?;
        if value.get(SCHEMA_VERSION_FIELD).is_none() {
            return serde_json::from_value(value).map_err(|e| json_error("decode", e));
        }

        let payload: VersionedRenderRequest =
            serde_json::from_value(value).map_err(|e| json_error("decode", e))?;
        if payload.schema_version != RENDER_REQUEST_SCHEMA_VERSION {
            return Err(GraphiteError::InvalidData(format!(
                "render request json: schema v{} is not supported (expected v{RENDER_REQUEST_SCHEMA_VERSION})",
                payload.schema_version
            )));
        }
        Ok(payload.request)
    }
}

fn json_error(action: &str, source: serde_json::Error) -> GraphiteError {
    GraphiteError::InvalidData(format!("render request json: cannot {action}: {source}"))
}
