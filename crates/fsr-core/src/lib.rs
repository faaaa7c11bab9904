//! Real-time telemetry sync and interactive selection for the FSR pad
//! dashboard. Platform-free; the web frontend binds it to the browser.

pub mod camera;
pub mod config;
pub mod connection;
pub mod constants;
pub mod dashboard;
pub mod error;
pub mod hit_test;
pub mod motion;
pub mod protocol;
pub mod ring_buffer;
pub mod scene;
pub mod selection;
pub mod smoothing;
pub mod tilt;

pub use camera::*;
pub use config::*;
pub use connection::*;
pub use constants::*;
pub use dashboard::*;
pub use error::*;
pub use hit_test::*;
pub use motion::*;
pub use protocol::*;
pub use ring_buffer::*;
pub use scene::*;
pub use selection::*;
pub use smoothing::*;
pub use tilt::*;
