// DOM hooks and visual tuning for the web frontend.

// Element ids expected in index.html
pub const CANVAS_ID: &str = "app-canvas";
pub const PANEL_ID: &str = "readout-panel";
pub const PANEL_ROWS_ID: &str = "readout-rows";
pub const PANEL_CLOSE_ID: &str = "readout-close";
pub const STATUS_ID: &str = "connection-status";
pub const CONFIG_SCRIPT_ID: &str = "fsr-config"; // <script type="application/json">

// Row element id prefixes; suffixed with the pad index
pub const FORCE_TEXT_PREFIX: &str = "fsr-force-";
pub const FORCE_SLIDER_PREFIX: &str = "fsr-slider-";
pub const SMOOTHED_TEXT_PREFIX: &str = "fsr-smooth-";
pub const PAD_INDEX_ATTR: &str = "data-pad-index";

// Canvas colors
pub const CLEAR_COLOR: &str = "#d8dee9";
pub const BASE_COLOR: &str = "#4c566a";
pub const LABEL_COLOR: &str = "#eceff4";
pub const STATUS_COLOR: &str = "#2e3440";

// Device layout (world units); pads sit on a square base plate
pub const BASE_HALF_EXTENTS: [f32; 3] = [1.6, 0.05, 1.6];
pub const PAD_HALF_EXTENTS: [f32; 3] = [0.35, 0.05, 0.35];
pub const PAD_RING_RADIUS: f32 = 0.9; // distance of each pad center from the middle
pub const PAD_LIFT: f32 = 0.1; // pads sit this far above the base center

// Panel tilt
pub const PANEL_TILT_MAX_DEG: f32 = 4.0;

// Threshold input bounds (ADC counts)
pub const THRESHOLD_INPUT_MIN: u32 = 1;
pub const THRESHOLD_INPUT_MAX: u32 = 1023;
