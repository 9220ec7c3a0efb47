//! Integration tests for the full per-frame pipeline


use gauge_detector::app::{AppConfig, FrameAnalysis, GaugeApp, GuiMode, InvertMode};
use gauge_detector::config::Config;
use gauge_detector::frame_source::{FrameSource, VideoSource};
use gauge_detector::Result;
use opencv::core::Mat;
use test_helpers::{create_rgba_frame, draw_gauge_ring, draw_needle, frames_identical};

/// Delivers a fixed list of frames, then reports exhaustion like a video file
struct SyntheticSource {
    frames: Vec<Mat>,
    next: usize,
}

impl SyntheticSource {
    fn new(frames: Vec<Mat>) -> Self {
        Self { frames, next: 0 }
    }
}

impl FrameSource for SyntheticSource {
    fn grab(&mut self, frame: &mut Mat) -> Result<bool> {
        match self.frames.get(self.next) {
            Some(stored) => {
                self.next += 1;
                *frame = stored.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn name(&self) -> String {
        format!("synthetic source of {} frames", self.frames.len())
    }

    fn is_live(&self) -> bool {
        false
    }
}

fn headless_config() -> AppConfig {
    AppConfig {
        video_source: VideoSource::Camera(0),
        gui_mode: GuiMode::None,
        invert_mode: InvertMode::None,
        brightness: 0.0,
    }
}

/// A frame containing a gauge face ring and an in-band needle segment
fn synthetic_gauge_frame() -> Mat {
    let mut frame = create_rgba_frame(480, 640).unwrap();
    draw_gauge_ring(&mut frame, 320, 240, 200).unwrap();
    draw_needle(&mut frame, (320, 240), (500, 240)).unwrap();
    frame
}

#[test]
fn test_process_frame_detects_gauge_and_needle() {
    let source = SyntheticSource::new(Vec::new());
    let app = GaugeApp::with_source(headless_config(), Config::default(), Box::new(source)).unwrap();

    let mut frame = synthetic_gauge_frame();
    let before = frame.clone();

    let analysis: FrameAnalysis = app.process_frame(&mut frame).unwrap();

    let circle = analysis.circle.expect("gauge face should be found");
    assert!((circle.x - 320).abs() <= 3);
    assert!((circle.y - 240).abs() <= 3);
    assert!((circle.r - 200).abs() <= 3);

    assert!(!analysis.needle_lines.is_empty(), "needle segments should be found");

    // The frame was annotated in place
    assert!(!frames_identical(&frame, &before).unwrap());
}

#[test]
fn test_process_frame_without_gauge_passes_frame_through() {
    let source = SyntheticSource::new(Vec::new());
    let app = GaugeApp::with_source(headless_config(), Config::default(), Box::new(source)).unwrap();

    let mut frame = create_rgba_frame(480, 640).unwrap();
    let before = frame.clone();

    let analysis = app.process_frame(&mut frame).unwrap();

    assert!(analysis.circle.is_none());
    assert!(analysis.needle_lines.is_empty());
    assert!(frames_identical(&frame, &before).unwrap());
}

#[test]
fn test_run_completes_on_exhausted_source() {
    let frames = vec![synthetic_gauge_frame(), create_rgba_frame(480, 640).unwrap()];
    let source = SyntheticSource::new(frames);

    let mut app = GaugeApp::with_source(headless_config(), Config::default(), Box::new(source)).unwrap();

    app.run().unwrap();
}

#[test]
fn test_needle_detection_is_unaffected_by_circle_annotation() {
    let source = SyntheticSource::new(Vec::new());
    let app = GaugeApp::with_source(headless_config(), Config::default(), Box::new(source)).unwrap();

    // Same needle, with and without a gauge ring to annotate
    let mut with_ring = synthetic_gauge_frame();
    let mut needle_only = create_rgba_frame(480, 640).unwrap();
    draw_needle(&mut needle_only, (320, 240), (500, 240)).unwrap();

    let with_ring_analysis = app.process_frame(&mut with_ring).unwrap();
    let needle_only_analysis = app.process_frame(&mut needle_only).unwrap();

    assert!(!with_ring_analysis.needle_lines.is_empty());
    assert!(!needle_only_analysis.needle_lines.is_empty());
}
