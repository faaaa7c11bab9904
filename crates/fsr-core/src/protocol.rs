//! Wire frames exchanged with the telemetry server.
//!
//! Every frame is a JSON array whose first element is a string tag. Inbound
//! frames are parsed strictly into [`Inbound`]; nothing received is ever
//! evaluated. Tags this build does not know decode to [`Inbound::Unknown`] so
//! newer servers keep working.

use crate::error::{CoreError, CoreResult};
use serde::Deserialize;
use serde_json::Value;

pub const TAG_VALUES: &str = "values";
pub const TAG_THRESHOLDS: &str = "thresholds";
pub const TAG_UPDATE_THRESHOLD: &str = "update_threshold";

#[derive(Deserialize)]
struct ValuesPayload {
    values: Vec<f32>,
}

#[derive(Deserialize)]
struct ThresholdsPayload {
    thresholds: Vec<f32>,
}

/// Frames the server sends.
#[derive(Clone, Debug, PartialEq)]
pub enum Inbound {
    /// One sample per pad, in registry order.
    Values(Vec<f32>),
    /// Full threshold table, same arity as `Values`.
    Thresholds(Vec<f32>),
    Unknown { tag: String },
}

impl Inbound {
    pub fn tag(&self) -> &str {
        match self {
            Inbound::Values(_) => TAG_VALUES,
            Inbound::Thresholds(_) => TAG_THRESHOLDS,
            Inbound::Unknown { tag } => tag,
        }
    }

    pub fn decode(text: &str) -> CoreResult<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| CoreError::MalformedFrame(format!("invalid JSON: {e}")))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> CoreResult<Self> {
        let Value::Array(mut parts) = value else {
            return Err(CoreError::MalformedFrame("frame is not an array".into()));
        };
        if parts.len() != 2 {
            return Err(CoreError::MalformedFrame(format!(
                "frame has {} elements, expected [tag, payload]",
                parts.len()
            )));
        }
        let payload = parts.swap_remove(1);
        let tag = match &parts[0] {
            Value::String(s) => s.as_str(),
            _ => return Err(CoreError::MalformedFrame("tag is not a string".into())),
        };
        match tag {
            TAG_VALUES => {
                let p: ValuesPayload = serde_json::from_value(payload)
                    .map_err(|e| CoreError::MalformedFrame(format!("`values` payload: {e}")))?;
                Ok(Inbound::Values(finite(TAG_VALUES, p.values)?))
            }
            TAG_THRESHOLDS => {
                let p: ThresholdsPayload = serde_json::from_value(payload).map_err(|e| {
                    CoreError::MalformedFrame(format!("`thresholds` payload: {e}"))
                })?;
                Ok(Inbound::Thresholds(finite(TAG_THRESHOLDS, p.thresholds)?))
            }
            other => Ok(Inbound::Unknown {
                tag: other.to_string(),
            }),
        }
    }
}

// Out-of-range JSON numbers such as 1e300 decode to infinity.
fn finite(tag: &str, channels: Vec<f32>) -> CoreResult<Vec<f32>> {
    match channels.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(CoreError::MalformedFrame(format!(
            "`{tag}` channel {i} is not a finite number"
        ))),
        None => Ok(channels),
    }
}

/// Frames the dashboard sends.
#[derive(Clone, Debug, PartialEq)]
pub enum Outbound {
    /// Full updated table plus the index just edited; the server uses the
    /// index for its partial-update path.
    UpdateThreshold { thresholds: Vec<f32>, index: usize },
}

impl Outbound {
    pub fn tag(&self) -> &'static str {
        match self {
            Outbound::UpdateThreshold { .. } => TAG_UPDATE_THRESHOLD,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Outbound::UpdateThreshold { thresholds, index } => {
                serde_json::json!([TAG_UPDATE_THRESHOLD, thresholds, index])
            }
        }
    }

    pub fn encode(&self) -> String {
        self.to_value().to_string()
    }
}
