use crate::connection::ConnectionState;
use thiserror::Error;

/// Failures surfaced by the dashboard core.
///
/// Runtime conditions (`ShapeMismatch`, `MalformedFrame`, `Transport`) are
/// reported to the caller and never retried here. `NotReady` is a caller bug:
/// the caller must check readiness before emitting.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("payload has {actual} channels, expected {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("emit while connection is {state:?}; only Ready may send")]
    NotReady { state: ConnectionState },

    #[error("`{0}` is not a registered pad")]
    UnknownPad(String),

    #[error("pad index {index} out of range for {len} pads")]
    PadIndexOutOfRange { index: usize, len: usize },

    #[error("malformed frame: {0}")]
    MalformedFrame(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Check that a payload matches the registered pad count.
    pub(crate) fn check_arity(expected: usize, actual: usize) -> CoreResult<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(CoreError::ShapeMismatch { expected, actual })
        }
    }
}
