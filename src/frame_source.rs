//! Frame delivery abstraction over camera and video-file capture.

use crate::{Error, Result};
use log::info;
use opencv::core::Mat;
use opencv::imgproc;
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture, CAP_PROP_BUFFERSIZE};

/// Video source type
#[derive(Debug, Clone)]
pub enum VideoSource {
    /// Webcam index
    Camera(i32),
    /// Video file path
    File(String),
}

/// Delivers one RGBA frame per call
///
/// The host loop owns the cadence; implementations hold whatever capture
/// resources they need and release them on drop.
pub trait FrameSource {
    /// Read the next frame into `frame` as `CV_8UC4` RGBA.
    ///
    /// Returns `Ok(false)` when the source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying capture fails
    fn grab(&mut self, frame: &mut Mat) -> Result<bool>;

    /// Human-readable source description for logging
    fn name(&self) -> String;

    /// Whether the source is a live device (read failures are retried)
    /// rather than a finite file (read failures end the stream)
    fn is_live(&self) -> bool;
}

/// Frame source backed by an `OpenCV` `VideoCapture`
pub struct CameraSource {
    capture: VideoCapture,
    source: VideoSource,
    bgr: Mat,
}

impl CameraSource {
    /// Open a webcam or video file
    ///
    /// # Errors
    ///
    /// Returns `VideoSource` if the device or file cannot be opened
    pub fn new(source: VideoSource) -> Result<Self> {
        let capture = match &source {
            VideoSource::Camera(index) => {
                info!("Opening camera {}", index);
                let mut cap = VideoCapture::new(*index, videoio::CAP_ANY)?;

                // Reduce buffer size for lower latency (webcam only)
                cap.set(CAP_PROP_BUFFERSIZE, 1.0)?;

                cap
            }
            VideoSource::File(path) => {
                info!("Opening video file: {}", path);
                VideoCapture::from_file(path, videoio::CAP_ANY)?
            }
        };

        if !capture.is_opened()? {
            return Err(Error::VideoSource(match &source {
                VideoSource::Camera(index) => format!("Failed to open camera {index}"),
                VideoSource::File(path) => format!("Failed to open video file {path}"),
            }));
        }

        Ok(Self {
            capture,
            source,
            bgr: Mat::default(),
        })
    }
}

impl FrameSource for CameraSource {
    fn grab(&mut self, frame: &mut Mat) -> Result<bool> {
        if !self.capture.read(&mut self.bgr)? || self.bgr.empty() {
            return Ok(false);
        }

        // The pipeline always sees four-channel RGBA regardless of what the
        // capture backend delivers
        imgproc::cvt_color(&self.bgr, frame, imgproc::COLOR_BGR2RGBA, 0)?;

        Ok(true)
    }

    fn name(&self) -> String {
        match &self.source {
            VideoSource::Camera(index) => format!("camera {index}"),
            VideoSource::File(path) => path.clone(),
        }
    }

    fn is_live(&self) -> bool {
        matches!(self.source, VideoSource::Camera(_))
    }
}
