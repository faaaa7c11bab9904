use glam::Vec3;

// Shared device/scene tuning constants used by the core and the web frontend.

// Pad registry, in wire order (index i of `values`/`thresholds` is PAD_NAMES[i])
pub const PAD_NAMES: [&str; 4] = ["PadLeft", "PadBottom", "PadTop", "PadRight"];

// Telemetry
pub const DEFAULT_RING_CAPACITY: usize = 1000; // samples of history kept per session
pub const DEFAULT_THRESHOLD: f32 = 512.0; // used until the first `thresholds` frame
pub const DEFAULT_SMOOTHING_WINDOW: usize = 16; // hull moving average width
pub const DEFAULT_ENDPOINT_PORT: u16 = 5000;
pub const DEFAULT_ENDPOINT_PATH: &str = "/ws";
pub const DEFAULT_GREETING: &str = "Hello, WebSocket!";

// ADC range of the sensor readings (10-bit)
pub const FORCE_MIN: f32 = 1.0;
pub const FORCE_MAX: f32 = 1023.0;

// Smoothing
pub const WMA_MAX_WIDTH: usize = 50;

// Camera
pub const CAMERA_FOVY_DEGREES: f32 = 20.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const INITIAL_EYE: Vec3 = Vec3::new(5.0, 5.0, 5.0);

// Focus motion triggered by a pad hit
pub const FOCUSED_EYE: Vec3 = Vec3::new(5.0, 10.0, 0.0);
pub const MODEL_NUDGE: Vec3 = Vec3::new(0.0, 0.0, 2.0); // applied once, only from z == 0
pub const FOCUS_TWEEN_MS: u64 = 800;

// Emphasis colors (sRGB hex) for pad nodes
pub const PAD_COLOR_IDLE: u32 = 0x2D2D2D;
pub const PAD_COLOR_SELECTED: u32 = 0x000000;
