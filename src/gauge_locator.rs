//! Gauge face location using the Hough circle transform.

use crate::config::LocatorConfig;
use crate::constants::{CENTER_MARK_RADIUS, CENTER_MARK_THICKNESS, GAUGE_OUTLINE_THICKNESS};
use crate::utils::{f64_to_i32_round, f64_to_i32_trunc};
use crate::{Error, Result};
use opencv::core::{Mat, Point, Scalar, Vec3f, Vector};
use opencv::imgproc::{self, HOUGH_GRADIENT, LINE_AA};
use opencv::prelude::*;

/// Gauge face estimate: circle center and radius in frame pixels
///
/// Recomputed from scratch every frame; carries no identity across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircleEstimate {
    /// Center x coordinate
    pub x: i32,
    /// Center y coordinate
    pub y: i32,
    /// Radius
    pub r: i32,
}

/// Locates the circular gauge face in a color frame
pub struct GaugeLocator {
    config: LocatorConfig,
}

impl GaugeLocator {
    /// Create a locator with the given transform parameters
    #[must_use]
    pub fn new(config: LocatorConfig) -> Self {
        Self { config }
    }

    /// Detect the gauge face in an RGBA frame
    ///
    /// The candidate radius is restricted to the configured band relative to
    /// the frame height. All returned candidates are averaged into a single
    /// estimate; averaging proved more accurate than tuning the transform
    /// parameters to return exactly one circle.
    ///
    /// Returns `Ok(None)` when no candidate falls inside the radius band.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty frame, or `OpenCV` if a transform fails
    pub fn detect(&self, frame: &Mat) -> Result<Option<CircleEstimate>> {
        let height = frame.rows();
        if height <= 0 || frame.cols() <= 0 {
            return Err(Error::InvalidInput("Frame has no pixels".to_string()));
        }

        let mut gray = Mat::default();
        imgproc::cvt_color(frame, &mut gray, imgproc::COLOR_RGBA2GRAY, 0)?;

        let min_radius = f64_to_i32_trunc(f64::from(height) * self.config.min_radius_ratio);
        let max_radius = f64_to_i32_trunc(f64::from(height) * self.config.max_radius_ratio);

        let mut circles = Vector::<Vec3f>::new();
        imgproc::hough_circles(
            &gray,
            &mut circles,
            HOUGH_GRADIENT,
            self.config.accumulator_resolution,
            self.config.min_center_distance,
            self.config.edge_threshold,
            self.config.center_threshold,
            min_radius,
            max_radius,
        )?;

        if circles.is_empty() {
            log::debug!("No circle candidates in radius band {}..{}", min_radius, max_radius);
        }

        Ok(average_circles(&circles))
    }

    /// Draw the estimated circle outline and center mark onto the frame
    ///
    /// # Errors
    ///
    /// Returns `OpenCV` if a drawing call fails
    pub fn annotate(&self, frame: &mut Mat, circle: &CircleEstimate) -> Result<()> {
        let center = Point::new(circle.x, circle.y);

        imgproc::circle(
            frame,
            center,
            circle.r,
            Scalar::new(255.0, 0.0, 0.0, 255.0), // Red outline
            GAUGE_OUTLINE_THICKNESS,
            LINE_AA,
            0,
        )?;
        imgproc::circle(
            frame,
            center,
            CENTER_MARK_RADIUS,
            Scalar::new(0.0, 255.0, 0.0, 255.0), // Green center dot
            CENTER_MARK_THICKNESS,
            LINE_AA,
            0,
        )?;

        Ok(())
    }
}

/// True arithmetic mean of all circle candidates
///
/// Sums are accumulated across all candidates and divided once at the end,
/// never re-normalized mid-loop.
#[must_use]
pub fn average_circles(circles: &Vector<Vec3f>) -> Option<CircleEstimate> {
    if circles.is_empty() {
        return None;
    }

    let mut sum_x = 0.0f64;
    let mut sum_y = 0.0f64;
    let mut sum_r = 0.0f64;

    for candidate in circles.iter() {
        sum_x += f64::from(candidate[0]);
        sum_y += f64::from(candidate[1]);
        sum_r += f64::from(candidate[2]);
    }

    let count = circles.len() as f64;
    Some(CircleEstimate {
        x: f64_to_i32_round(sum_x / count),
        y: f64_to_i32_round(sum_y / count),
        r: f64_to_i32_round(sum_r / count),
    })
}
