//! Host wiring consumed at construction time.

use crate::constants::{
    DEFAULT_ENDPOINT_PATH, DEFAULT_ENDPOINT_PORT, DEFAULT_GREETING, DEFAULT_RING_CAPACITY,
    DEFAULT_SMOOTHING_WINDOW, DEFAULT_THRESHOLD, PAD_NAMES,
};
use crate::error::{CoreError, CoreResult};
use crate::selection::ThresholdTable;
use fnv::FnvHashSet;
use serde::Deserialize;
use std::time::Duration;

/// Whether the host reconnects after a connection ends. The connection
/// manager itself never does.
#[derive(Clone, Debug, PartialEq, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReconnectPolicy {
    #[default]
    Never,
    Backoff {
        initial_ms: u64,
        max_ms: u64,
        factor: f32,
    },
}

impl ReconnectPolicy {
    /// Delay before reconnect attempt `attempt` (0-based), or `None` to stay
    /// disconnected.
    pub fn delay(&self, attempt: u32) -> Option<Duration> {
        match *self {
            ReconnectPolicy::Never => None,
            ReconnectPolicy::Backoff {
                initial_ms,
                max_ms,
                factor,
            } => {
                let scaled = initial_ms as f64 * (factor.max(1.0) as f64).powi(attempt as i32);
                Some(Duration::from_millis(scaled.min(max_ms as f64) as u64))
            }
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    /// Full `ws://` or `wss://` URL. Empty means "derive from the page host".
    pub endpoint_url: String,
    pub pad_names: Vec<String>,
    pub ring_buffer_capacity: usize,
    pub default_threshold: f32,
    pub smoothing_window: usize,
    /// Text sent once the socket opens; empty disables it.
    pub greeting: String,
    pub reconnect: ReconnectPolicy,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoint_url: String::new(),
            pad_names: PAD_NAMES.iter().map(|s| s.to_string()).collect(),
            ring_buffer_capacity: DEFAULT_RING_CAPACITY,
            default_threshold: DEFAULT_THRESHOLD,
            smoothing_window: DEFAULT_SMOOTHING_WINDOW,
            greeting: DEFAULT_GREETING.to_string(),
            reconnect: ReconnectPolicy::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(text: &str) -> CoreResult<Self> {
        let cfg: Self = serde_json::from_str(text)
            .map_err(|e| CoreError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.pad_names.is_empty() {
            return Err(CoreError::InvalidConfig("no pads registered".into()));
        }
        let mut seen = FnvHashSet::default();
        if let Some(dup) = self.pad_names.iter().find(|n| !seen.insert(n.as_str())) {
            return Err(CoreError::InvalidConfig(format!("duplicate pad `{dup}`")));
        }
        if self.ring_buffer_capacity == 0 {
            return Err(CoreError::InvalidConfig("ring buffer capacity is 0".into()));
        }
        if !self.endpoint_url.is_empty()
            && !(self.endpoint_url.starts_with("ws://") || self.endpoint_url.starts_with("wss://"))
        {
            return Err(CoreError::InvalidConfig(format!(
                "endpoint `{}` is not a ws:// or wss:// URL",
                self.endpoint_url
            )));
        }
        Ok(())
    }

    /// Endpoint to dial. Falls back to `ws(s)://<host>:5000/ws` when unset.
    pub fn endpoint_for_host(&self, hostname: &str, secure: bool) -> String {
        if !self.endpoint_url.is_empty() {
            return self.endpoint_url.clone();
        }
        let scheme = if secure { "wss" } else { "ws" };
        format!(
            "{}://{}:{}{}",
            scheme, hostname, DEFAULT_ENDPOINT_PORT, DEFAULT_ENDPOINT_PATH
        )
    }

    pub fn default_thresholds(&self) -> ThresholdTable {
        ThresholdTable::filled(self.pad_names.len(), self.default_threshold)
    }
}
