//! Gauge detection application for real-time analog gauge reading overlay.

use anyhow::Result;
use clap::Parser;
use gauge_detector::app::{AppConfig, GaugeApp, GuiMode, InvertMode};
use gauge_detector::config::Config;
use gauge_detector::constants::DEFAULT_CAMERA_INDEX;
use gauge_detector::frame_source::VideoSource;
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Camera index to use
    #[arg(long, default_value_t = DEFAULT_CAMERA_INDEX)]
    cam: i32,

    /// Video file to process
    #[arg(short, long)]
    video: Option<String>,

    /// GUI display mode (cam, none)
    #[arg(short, long, default_value = "cam")]
    gui: String,

    /// Invert image (none, x, y, xy)
    #[arg(short, long, default_value = "none")]
    inv: String,

    /// Brightness adjustment value (0 to disable, typical: 30)
    #[arg(short, long, default_value = "0")]
    brightness: f32,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Path to detection tuning file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Analog Gauge Detector");

    // Load detection tuning if provided
    let detection = if let Some(config_path) = &args.config {
        info!("Loading detection tuning from: {}", config_path);
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };
    detection.validate()?;

    let config = AppConfig {
        video_source: if let Some(video_path) = args.video {
            VideoSource::File(video_path)
        } else {
            VideoSource::Camera(args.cam)
        },
        gui_mode: match args.gui.as_str() {
            "none" => GuiMode::None,
            _ => GuiMode::Camera,
        },
        invert_mode: match args.inv.as_str() {
            "x" => InvertMode::X,
            "y" => InvertMode::Y,
            "xy" => InvertMode::XY,
            _ => InvertMode::None,
        },
        brightness: args.brightness,
    };

    let mut app = GaugeApp::new(config, detection)?;
    app.run()?;

    Ok(())
}
