//! Configuration management for the gauge detection application

use crate::constants::{
    CHANNEL_UPPER_BOUND, DEFAULT_ACCUMULATOR_RESOLUTION, DEFAULT_ANGLE_RESOLUTION_DEG, DEFAULT_CENTER_THRESHOLD,
    DEFAULT_DISTANCE_RESOLUTION, DEFAULT_EDGE_THRESHOLD, DEFAULT_HUE_MAX, DEFAULT_HUE_MIN, DEFAULT_MASK_THRESHOLD,
    DEFAULT_MAX_LINE_GAP, DEFAULT_MIN_CENTER_DISTANCE, DEFAULT_MIN_LINE_LENGTH, DEFAULT_SATURATION_MAX,
    DEFAULT_SATURATION_MIN, DEFAULT_VALUE_MAX, DEFAULT_VALUE_MIN, DEFAULT_VOTES_THRESHOLD, HUE_UPPER_BOUND,
    MAX_RADIUS_RATIO, MIN_RADIUS_RATIO,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Detection tuning configuration
///
/// Every transform-sensitivity and color-band constant of the pipeline is
/// exposed here so a different gauge type can be handled by swapping the
/// config file instead of recompiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gauge face locator parameters
    pub locator: LocatorConfig,

    /// Needle extraction parameters
    pub needle: NeedleConfig,
}

/// Hough circle transform parameters for locating the gauge face
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocatorConfig {
    /// Lower bound of the candidate radius, as a fraction of frame height
    pub min_radius_ratio: f64,

    /// Upper bound of the candidate radius, as a fraction of frame height
    pub max_radius_ratio: f64,

    /// Inverse ratio of the accumulator resolution to the image resolution
    pub accumulator_resolution: f64,

    /// Minimum distance between detected circle centers (pixels)
    pub min_center_distance: f64,

    /// Upper Canny threshold used by the internal edge detector
    pub edge_threshold: f64,

    /// Accumulator threshold for center detection
    pub center_threshold: f64,
}

/// Color band and line transform parameters for extracting the needle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeedleConfig {
    /// Needle hue band (OpenCV 8-bit HSV, 0-180)
    pub hue_min: f64,
    pub hue_max: f64,

    /// Needle saturation band (0-255)
    pub saturation_min: f64,
    pub saturation_max: f64,

    /// Needle value band (0-255)
    pub value_min: f64,
    pub value_max: f64,

    /// Binarization cutoff applied to the in-range mask (0-255)
    pub mask_threshold: f64,

    /// Invert the binarized mask so out-of-band pixels become foreground
    /// instead of the needle band. Off by default.
    pub invert_mask: bool,

    /// Distance resolution of the line accumulator (pixels)
    pub distance_resolution: f64,

    /// Angle resolution of the line accumulator (degrees)
    pub angle_resolution_deg: f64,

    /// Minimum accumulator votes for a line candidate
    pub votes_threshold: i32,

    /// Minimum accepted segment length (pixels)
    pub min_line_length: f64,

    /// Maximum gap between collinear points joined into one segment (pixels)
    pub max_line_gap: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locator: LocatorConfig::default(),
            needle: NeedleConfig::default(),
        }
    }
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            min_radius_ratio: MIN_RADIUS_RATIO,
            max_radius_ratio: MAX_RADIUS_RATIO,
            accumulator_resolution: DEFAULT_ACCUMULATOR_RESOLUTION,
            min_center_distance: DEFAULT_MIN_CENTER_DISTANCE,
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
            center_threshold: DEFAULT_CENTER_THRESHOLD,
        }
    }
}

impl Default for NeedleConfig {
    fn default() -> Self {
        Self {
            hue_min: DEFAULT_HUE_MIN,
            hue_max: DEFAULT_HUE_MAX,
            saturation_min: DEFAULT_SATURATION_MIN,
            saturation_max: DEFAULT_SATURATION_MAX,
            value_min: DEFAULT_VALUE_MIN,
            value_max: DEFAULT_VALUE_MAX,
            mask_threshold: DEFAULT_MASK_THRESHOLD,
            invert_mask: false,
            distance_resolution: DEFAULT_DISTANCE_RESOLUTION,
            angle_resolution_deg: DEFAULT_ANGLE_RESOLUTION_DEG,
            votes_threshold: DEFAULT_VOTES_THRESHOLD,
            min_line_length: DEFAULT_MIN_LINE_LENGTH,
            max_line_gap: DEFAULT_MAX_LINE_GAP,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` describing the first invalid field found
    pub fn validate(&self) -> Result<()> {
        // Locator: radius band and transform sensitivity
        if !(0.0..=1.0).contains(&self.locator.min_radius_ratio)
            || !(0.0..=1.0).contains(&self.locator.max_radius_ratio)
        {
            return Err(Error::ConfigError(
                "Radius ratios must be between 0.0 and 1.0".to_string(),
            ));
        }
        if self.locator.min_radius_ratio >= self.locator.max_radius_ratio {
            return Err(Error::ConfigError(
                "Minimum radius ratio must be below the maximum".to_string(),
            ));
        }
        if self.locator.accumulator_resolution <= 0.0 {
            return Err(Error::ConfigError(
                "Accumulator resolution must be greater than 0".to_string(),
            ));
        }
        if self.locator.min_center_distance <= 0.0 {
            return Err(Error::ConfigError(
                "Minimum center distance must be greater than 0".to_string(),
            ));
        }
        if self.locator.edge_threshold <= 0.0 || self.locator.center_threshold <= 0.0 {
            return Err(Error::ConfigError(
                "Hough circle thresholds must be greater than 0".to_string(),
            ));
        }

        // Needle: color band ordering and channel ranges
        if !(0.0..=HUE_UPPER_BOUND).contains(&self.needle.hue_min)
            || !(0.0..=HUE_UPPER_BOUND).contains(&self.needle.hue_max)
        {
            return Err(Error::ConfigError("Hue bounds must be between 0 and 180".to_string()));
        }
        for (name, min, max) in [
            ("hue", self.needle.hue_min, self.needle.hue_max),
            ("saturation", self.needle.saturation_min, self.needle.saturation_max),
            ("value", self.needle.value_min, self.needle.value_max),
        ] {
            if min > max {
                return Err(Error::ConfigError(format!(
                    "Needle {name} band is inverted: {min} > {max}"
                )));
            }
        }
        for (name, value) in [
            ("saturation_min", self.needle.saturation_min),
            ("saturation_max", self.needle.saturation_max),
            ("value_min", self.needle.value_min),
            ("value_max", self.needle.value_max),
            ("mask_threshold", self.needle.mask_threshold),
        ] {
            if !(0.0..=CHANNEL_UPPER_BOUND).contains(&value) {
                return Err(Error::ConfigError(format!("{name} must be between 0 and 255")));
            }
        }

        // Needle: line transform sensitivity
        if self.needle.distance_resolution <= 0.0 || self.needle.angle_resolution_deg <= 0.0 {
            return Err(Error::ConfigError(
                "Line accumulator resolutions must be greater than 0".to_string(),
            ));
        }
        if self.needle.votes_threshold <= 0 {
            return Err(Error::ConfigError(
                "Line votes threshold must be greater than 0".to_string(),
            ));
        }
        if self.needle.min_line_length < 0.0 || self.needle.max_line_gap < 0.0 {
            return Err(Error::ConfigError(
                "Line length and gap must not be negative".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Gauge Detector Configuration

# Gauge face locator (Hough circle transform)
locator:
  min_radius_ratio: 0.35
  max_radius_ratio: 0.48
  accumulator_resolution: 1.0
  min_center_distance: 20.0
  edge_threshold: 100.0
  center_threshold: 50.0

# Needle extraction (HSV color band + Hough line transform)
needle:
  hue_min: 15.0
  hue_max: 35.0
  saturation_min: 30.0
  saturation_max: 50.0
  value_min: 70.0
  value_max: 110.0
  mask_threshold: 175.0
  invert_mask: false
  distance_resolution: 3.0
  angle_resolution_deg: 1.0
  votes_threshold: 100
  min_line_length: 30.0
  max_line_gap: 0.0
"#;
