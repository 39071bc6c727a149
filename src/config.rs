// ---------------------------------------------------------------------------
// Application configuration (compile-time)
// ---------------------------------------------------------------------------

/// Dataset loaded at startup, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "spacex_launch_dash.csv";

/// Window title.
pub const APP_TITLE: &str = "SpaceX Launch Dashboard";

pub const WINDOW_SIZE: [f32; 2] = [1280.0, 860.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [720.0, 480.0];

/// Value emitted by the site selector for "all sites".
pub const ALL_SITES: &str = "ALL";

/// Payload slider domain in kg. Fixed regardless of the loaded data.
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX: f64 = 10_000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1_000.0;
/// Labelled tick spacing under the payload sliders.
pub const PAYLOAD_SLIDER_MARK_STEP: f64 = 2_500.0;
