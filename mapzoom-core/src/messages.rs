//! JSON messages exchanged with the zoom endpoint.

use crate::{ClickOffset, ViewportState, ZoomError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status value marking a successful response. Anything else is a failure.
pub const STATUS_OK: &str = "ok";

/// Body of the POST sent on an armed double-click.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ZoomRequest {
    /// Current zoom level. Omitted while undefined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
    /// Current center X. Omitted while undefined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Current center Y. Omitted while undefined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    pub offset_x: f64,
    pub offset_y: f64,
    pub is_increased_map: bool,
}

impl ZoomRequest {
    pub fn new(viewport: &ViewportState, offset: ClickOffset, is_increased_map: bool) -> Self {
        Self {
            zoom: viewport.zoom,
            x: viewport.x,
            y: viewport.y,
            offset_x: offset.x,
            offset_y: offset.y,
            is_increased_map,
        }
    }

    pub fn to_json(&self) -> Result<String, ZoomError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Response body exactly as the server sends it, before validation.
#[derive(Deserialize, Debug, Clone)]
pub struct WireResponse {
    /// Compared against `"ok"` as-is; any other JSON value means failure.
    pub status: Option<Value>,
    pub svg_content: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub zoom: Option<f64>,
    pub message: Option<String>,
}

/// Server response, discriminated by its `status` field.
#[derive(Debug, Clone, PartialEq)]
pub enum ZoomResponse {
    Ok {
        svg_content: String,
        x: f64,
        y: f64,
        zoom: f64,
    },
    Failure {
        message: String,
    },
}

impl ZoomResponse {
    /// Parse and validate a raw response body.
    pub fn from_json(body: &str) -> Result<Self, ZoomError> {
        let wire: WireResponse = serde_json::from_str(body)?;
        Self::try_from(wire)
    }
}

impl TryFrom<WireResponse> for ZoomResponse {
    type Error = ZoomError;

    fn try_from(wire: WireResponse) -> Result<Self, Self::Error> {
        if wire.status.as_ref().and_then(Value::as_str) != Some(STATUS_OK) {
            return Ok(ZoomResponse::Failure {
                message: wire.message.unwrap_or_default(),
            });
        }

        Ok(ZoomResponse::Ok {
            svg_content: wire
                .svg_content
                .ok_or(ZoomError::IncompleteResponse("svg_content"))?,
            x: wire.x.ok_or(ZoomError::IncompleteResponse("x"))?,
            y: wire.y.ok_or(ZoomError::IncompleteResponse("y"))?,
            zoom: wire.zoom.ok_or(ZoomError::IncompleteResponse("zoom"))?,
        })
    }
}
