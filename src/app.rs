//! Main application module for gauge detection.

use crate::{
    config::Config,
    error::Result,
    frame_source::{CameraSource, FrameSource, VideoSource},
    gauge_locator::{CircleEstimate, GaugeLocator},
    needle_extractor::{NeedleExtractor, NeedleLine},
};
use log::{info, warn};
use opencv::{
    core::{Mat, Point, Scalar},
    highgui::{self, WINDOW_NORMAL},
    imgproc::{self, FONT_HERSHEY_SIMPLEX, LINE_8},
};
use std::time::{Duration, Instant};

/// Display window title
const WINDOW_NAME: &str = "Gauge Detector";

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Camera index or video file path
    pub video_source: VideoSource,
    /// GUI display mode
    pub gui_mode: GuiMode,
    /// Image inversion mode
    pub invert_mode: InvertMode,
    /// Brightness adjustment value
    pub brightness: f32,
}

/// GUI display mode
#[derive(Debug, Clone, PartialEq)]
pub enum GuiMode {
    /// Show the annotated camera window
    Camera,
    /// No GUI (headless)
    None,
}

/// Image inversion mode
#[derive(Debug, Clone, PartialEq)]
pub enum InvertMode {
    /// No inversion
    None,
    /// Mirror horizontally
    X,
    /// Flip vertically
    Y,
    /// Both horizontal and vertical
    XY,
}

/// Result of processing a single frame
#[derive(Debug, Clone)]
pub struct FrameAnalysis {
    /// Estimated gauge face, if any circle candidates were found
    pub circle: Option<CircleEstimate>,
    /// Detected needle line segments
    pub needle_lines: Vec<NeedleLine>,
}

/// Main application struct
pub struct GaugeApp {
    config: AppConfig,
    locator: GaugeLocator,
    extractor: NeedleExtractor,
    frames: Box<dyn FrameSource>,
}

impl GaugeApp {
    /// Create a new gauge detection application over a camera or video file
    ///
    /// # Errors
    ///
    /// Returns an error if the video source cannot be opened or a GUI window
    /// cannot be created
    pub fn new(config: AppConfig, detection: Config) -> Result<Self> {
        let frames = Box::new(CameraSource::new(config.video_source.clone())?);
        Self::with_source(config, detection, frames)
    }

    /// Create the application over an injected frame source
    ///
    /// # Errors
    ///
    /// Returns an error if a GUI window cannot be created
    pub fn with_source(config: AppConfig, detection: Config, frames: Box<dyn FrameSource>) -> Result<Self> {
        info!("Initializing gauge detection over {}", frames.name());

        if config.gui_mode == GuiMode::Camera {
            highgui::named_window(WINDOW_NAME, WINDOW_NORMAL)?;
        }

        Ok(Self {
            config,
            locator: GaugeLocator::new(detection.locator),
            extractor: NeedleExtractor::new(detection.needle),
            frames,
        })
    }

    /// Run the main frame loop until the source is exhausted or the user exits
    ///
    /// # Errors
    ///
    /// Returns an error if frame capture, processing, or display fails
    pub fn run(&mut self) -> Result<()> {
        info!("Starting main frame loop");

        let mut frame = Mat::default();
        let mut frame_count = 0u32;
        let start_time = Instant::now();
        let mut last_fps_update = Instant::now();
        let mut fps = 0.0;

        loop {
            if !self.frames.grab(&mut frame)? {
                if !self.frames.is_live() {
                    info!("End of video source reached");
                    break;
                }
                warn!("Failed to read frame, retrying...");
                continue;
            }

            self.apply_transformations(&mut frame)?;

            let analysis = self.process_frame(&mut frame)?;

            frame_count += 1;
            if last_fps_update.elapsed() >= Duration::from_secs(1) {
                fps = f64::from(frame_count) / start_time.elapsed().as_secs_f64();
                last_fps_update = Instant::now();
            }

            if self.config.gui_mode != GuiMode::None {
                self.display_results(&frame, &analysis, fps)?;

                let key = highgui::wait_key(1)?;
                if key == 27 || key == i32::from(b'q') {
                    info!("Exit requested by user");
                    break;
                }
            }
        }

        info!("Application shutting down");
        Ok(())
    }

    /// Apply image transformations (brightness, inversion)
    fn apply_transformations(&self, frame: &mut Mat) -> Result<()> {
        if self.config.brightness != 0.0 {
            let brightness_scalar = Scalar::new(
                f64::from(self.config.brightness),
                f64::from(self.config.brightness),
                f64::from(self.config.brightness),
                0.0,
            );
            let temp = frame.clone();
            opencv::core::add(&temp, &brightness_scalar, frame, &Mat::default(), -1)?;
        }

        match self.config.invert_mode {
            InvertMode::None => {}
            InvertMode::X => {
                let temp = frame.clone();
                opencv::core::flip(&temp, frame, 1)?;
            }
            InvertMode::Y => {
                let temp = frame.clone();
                opencv::core::flip(&temp, frame, 0)?;
            }
            InvertMode::XY => {
                let temp = frame.clone();
                opencv::core::flip(&temp, frame, -1)?;
            }
        }

        Ok(())
    }

    /// Process a single RGBA frame: locate the gauge, extract needle segments,
    /// and draw both onto the frame
    ///
    /// A frame with no circle candidates passes through unannotated rather
    /// than aborting the cycle, keeping the display responsive.
    ///
    /// # Errors
    ///
    /// Returns an error if a transform or drawing call fails
    pub fn process_frame(&self, frame: &mut Mat) -> Result<FrameAnalysis> {
        let circle = self.locator.detect(frame)?;
        if let Some(circle) = &circle {
            self.locator.annotate(frame, circle)?;
        }

        let needle_lines = self.extractor.detect(frame)?;
        self.extractor.annotate(frame, &needle_lines)?;

        Ok(FrameAnalysis { circle, needle_lines })
    }

    /// Display the annotated frame with a HUD overlay
    fn display_results(&self, frame: &Mat, analysis: &FrameAnalysis, fps: f64) -> Result<()> {
        let mut display_frame = Mat::default();
        imgproc::cvt_color(frame, &mut display_frame, imgproc::COLOR_RGBA2BGR, 0)?;

        let fps_text = format!("FPS: {:.1}", fps);
        imgproc::put_text(
            &mut display_frame,
            &fps_text,
            Point::new(10, 30),
            FONT_HERSHEY_SIMPLEX,
            1.0,
            Scalar::new(0.0, 255.0, 0.0, 0.0),
            2,
            LINE_8,
            false,
        )?;

        let status_text = match &analysis.circle {
            Some(circle) => format!(
                "Gauge: ({}, {}) r={}  segments: {}",
                circle.x,
                circle.y,
                circle.r,
                analysis.needle_lines.len()
            ),
            None => "Gauge: not found".to_string(),
        };
        imgproc::put_text(
            &mut display_frame,
            &status_text,
            Point::new(10, 60),
            FONT_HERSHEY_SIMPLEX,
            0.6,
            Scalar::new(0.0, 255.0, 255.0, 0.0),
            1,
            LINE_8,
            false,
        )?;

        highgui::imshow(WINDOW_NAME, &display_frame)?;

        Ok(())
    }
}
