//! Constants used throughout the application

/// Circle radius search band, as fractions of the frame height.
///
/// Restricting the search to 35-48% of the frame height gives fairly good
/// results across different gauge samples.
pub const MIN_RADIUS_RATIO: f64 = 0.35;
pub const MAX_RADIUS_RATIO: f64 = 0.48;

/// Hough circle transform defaults
pub const DEFAULT_ACCUMULATOR_RESOLUTION: f64 = 1.0;
pub const DEFAULT_MIN_CENTER_DISTANCE: f64 = 20.0;
pub const DEFAULT_EDGE_THRESHOLD: f64 = 100.0;
pub const DEFAULT_CENTER_THRESHOLD: f64 = 50.0;

/// Needle color band in 8-bit HSV (hue 0-180, saturation/value 0-255).
/// Tuned against one sample gauge; substitute per gauge type via the config file.
pub const DEFAULT_HUE_MIN: f64 = 15.0;
pub const DEFAULT_HUE_MAX: f64 = 35.0;
pub const DEFAULT_SATURATION_MIN: f64 = 30.0;
pub const DEFAULT_SATURATION_MAX: f64 = 50.0;
pub const DEFAULT_VALUE_MIN: f64 = 70.0;
pub const DEFAULT_VALUE_MAX: f64 = 110.0;

/// Mask binarization cutoff and output value
pub const DEFAULT_MASK_THRESHOLD: f64 = 175.0;
pub const MASK_MAX_VALUE: f64 = 255.0;

/// Probabilistic Hough line transform defaults
pub const DEFAULT_DISTANCE_RESOLUTION: f64 = 3.0;
pub const DEFAULT_ANGLE_RESOLUTION_DEG: f64 = 1.0;
pub const DEFAULT_VOTES_THRESHOLD: i32 = 100;
pub const DEFAULT_MIN_LINE_LENGTH: f64 = 30.0;
pub const DEFAULT_MAX_LINE_GAP: f64 = 0.0;

/// Overlay drawing parameters
pub const GAUGE_OUTLINE_THICKNESS: i32 = 3;
pub const CENTER_MARK_RADIUS: i32 = 2;
pub const CENTER_MARK_THICKNESS: i32 = 3;
pub const NEEDLE_LINE_THICKNESS: i32 = 2;

/// Default camera index
pub const DEFAULT_CAMERA_INDEX: i32 = 0;

/// Valid hue bound in OpenCV 8-bit HSV
pub const HUE_UPPER_BOUND: f64 = 180.0;

/// Valid saturation/value/threshold bound
pub const CHANNEL_UPPER_BOUND: f64 = 255.0;
