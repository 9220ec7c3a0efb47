//! Analog gauge detection library for real-time camera feeds.
//!
//! This library locates a circular analog gauge in a color frame and extracts
//! needle line segments, using `OpenCV` for all image-processing primitives:
//! - Hough circle transform for finding the gauge face
//! - HSV color-band thresholding for isolating the needle
//! - Probabilistic Hough line transform for finding needle segments
//!
//! The per-frame pipeline is stateless:
//! 1. The gauge locator converts the frame to grayscale and searches for
//!    circles inside a radius band proportional to the frame height, then
//!    averages all candidates into one estimate.
//! 2. The needle extractor builds a binary mask of pixels inside a configured
//!    HSV band and runs line detection over it.
//! 3. Both stages draw their detections onto the frame for visual feedback.
//!
//! All tuning constants (radius band, transform sensitivity, color band) are
//! exposed through [`config::Config`] so a different gauge type can be
//! handled by swapping a YAML file.
//!
//! # Examples
//!
//! ## Processing a single image
//!
//! ```no_run
//! use gauge_detector::{config::Config, gauge_locator::GaugeLocator, needle_extractor::NeedleExtractor};
//! use opencv::{imgcodecs, imgproc, core::Mat, prelude::*};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let locator = GaugeLocator::new(config.locator);
//! let extractor = NeedleExtractor::new(config.needle);
//!
//! // The pipeline operates on four-channel RGBA frames
//! let bgr = imgcodecs::imread("gauge.jpg", imgcodecs::IMREAD_COLOR)?;
//! let mut frame = Mat::default();
//! imgproc::cvt_color(&bgr, &mut frame, imgproc::COLOR_BGR2RGBA, 0)?;
//!
//! if let Some(circle) = locator.detect(&frame)? {
//!     println!("Gauge at ({}, {}), radius {}", circle.x, circle.y, circle.r);
//!     locator.annotate(&mut frame, &circle)?;
//! }
//!
//! let lines = extractor.detect(&frame)?;
//! println!("{} needle segments", lines.len());
//! extractor.annotate(&mut frame, &lines)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Running the live application loop
//!
//! ```no_run
//! use gauge_detector::{
//!     app::{AppConfig, GaugeApp, GuiMode, InvertMode},
//!     config::Config,
//!     frame_source::VideoSource,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let app_config = AppConfig {
//!     video_source: VideoSource::Camera(0),
//!     gui_mode: GuiMode::Camera,
//!     invert_mode: InvertMode::None,
//!     brightness: 0.0,
//! };
//!
//! let mut app = GaugeApp::new(app_config, Config::default())?;
//! app.run()?;
//! # Ok(())
//! # }
//! ```

/// Gauge face location via the Hough circle transform
pub mod gauge_locator;

/// Needle segment extraction via color thresholding and line detection
pub mod needle_extractor;

/// Frame delivery abstraction over camera and video-file capture
pub mod frame_source;

/// Main application module
pub mod app;

/// Configuration management
pub mod config;

/// Constants used throughout the application
pub mod constants;

/// Error types and result handling
pub mod error;

/// Numeric conversion helpers
pub mod utils;

pub use error::{Error, Result};
