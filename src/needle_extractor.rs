//! Needle segment extraction by HSV color thresholding and the Hough line transform.

use crate::config::NeedleConfig;
use crate::constants::{MASK_MAX_VALUE, NEEDLE_LINE_THICKNESS};
use crate::{Error, Result};
use opencv::core::{self, Mat, Point, Scalar, Vec4i, Vector};
use opencv::imgproc::{self, LINE_8, THRESH_BINARY, THRESH_BINARY_INV};
use opencv::prelude::*;

/// A detected needle line segment in frame pixels
///
/// Used only for visualization; segments are never aggregated into a gauge
/// reading. Mapping the needle angle to a numeric value is a separate,
/// not-yet-built calibration step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeedleLine {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl NeedleLine {
    /// Euclidean length of the segment
    #[must_use]
    pub fn length(&self) -> f64 {
        let dx = f64::from(self.x2 - self.x1);
        let dy = f64::from(self.y2 - self.y1);
        (dx * dx + dy * dy).sqrt()
    }
}

/// Extracts needle line segments from a color frame
pub struct NeedleExtractor {
    config: NeedleConfig,
}

impl NeedleExtractor {
    /// Create an extractor with the given color band and transform parameters
    #[must_use]
    pub fn new(config: NeedleConfig) -> Self {
        Self { config }
    }

    /// Build the binary needle mask for an RGBA frame
    ///
    /// Pixels whose hue/saturation/value fall inside the configured band are
    /// selected, then the mask is binarized at the configured cutoff. With
    /// `invert_mask` set, out-of-band pixels become foreground instead.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty frame, or `OpenCV` if a transform fails
    pub fn mask(&self, frame: &Mat) -> Result<Mat> {
        if frame.rows() <= 0 || frame.cols() <= 0 {
            return Err(Error::InvalidInput("Frame has no pixels".to_string()));
        }

        let mut rgb = Mat::default();
        imgproc::cvt_color(frame, &mut rgb, imgproc::COLOR_RGBA2RGB, 0)?;
        let mut hsv = Mat::default();
        imgproc::cvt_color(&rgb, &mut hsv, imgproc::COLOR_RGB2HSV, 0)?;

        let lower = Scalar::new(self.config.hue_min, self.config.saturation_min, self.config.value_min, 0.0);
        let upper = Scalar::new(self.config.hue_max, self.config.saturation_max, self.config.value_max, 0.0);

        let mut in_band = Mat::default();
        core::in_range(&hsv, &lower, &upper, &mut in_band)?;

        // Binarize; helps the line transform downstream
        let thresh_type = if self.config.invert_mask {
            THRESH_BINARY_INV
        } else {
            THRESH_BINARY
        };
        let mut mask = Mat::default();
        imgproc::threshold(&in_band, &mut mask, self.config.mask_threshold, MASK_MAX_VALUE, thresh_type)?;

        Ok(mask)
    }

    /// Detect needle line segments in an RGBA frame
    ///
    /// Runs the probabilistic Hough line transform over the binary needle
    /// mask. An empty result is not an error; a frame with no in-band pixels
    /// simply yields no segments.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty frame, or `OpenCV` if a transform fails
    pub fn detect(&self, frame: &Mat) -> Result<Vec<NeedleLine>> {
        let mask = self.mask(frame)?;

        let mut lines = Vector::<Vec4i>::new();
        imgproc::hough_lines_p(
            &mask,
            &mut lines,
            self.config.distance_resolution,
            self.config.angle_resolution_deg.to_radians(),
            self.config.votes_threshold,
            self.config.min_line_length,
            self.config.max_line_gap,
        )?;

        log::debug!("Found {} needle line candidates", lines.len());

        Ok(lines
            .iter()
            .map(|line| NeedleLine {
                x1: line[0],
                y1: line[1],
                x2: line[2],
                y2: line[3],
            })
            .collect())
    }

    /// Draw every detected segment onto the frame
    ///
    /// # Errors
    ///
    /// Returns `OpenCV` if a drawing call fails
    pub fn annotate(&self, frame: &mut Mat, lines: &[NeedleLine]) -> Result<()> {
        for line in lines {
            imgproc::line(
                frame,
                Point::new(line.x1, line.y1),
                Point::new(line.x2, line.y2),
                Scalar::new(0.0, 255.0, 0.0, 255.0), // Green
                NEEDLE_LINE_THICKNESS,
                LINE_8,
                0,
            )?;
        }

        Ok(())
    }
}
