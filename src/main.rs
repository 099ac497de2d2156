#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod responsive;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

use crate::context::AppConfig;

/// Global configuration, set from command line
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the app configuration (set from command line or default)
pub fn get_config() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_else(|| AppConfig {
        output_dir: default_output_dir(),
        font: None,
        font_size: 16.0,
    })
}

fn default_output_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// BlockBeauty - code screenshots
#[derive(Parser, Debug)]
#[command(name = "blockbeauty-desktop")]
#[command(about = "BlockBeauty - style source code and export it as a PNG card")]
struct Args {
    /// Directory exported images are written to (default: downloads dir)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Monospace TTF/OTF font used when exporting
    #[arg(short, long)]
    font: Option<PathBuf>,

    /// Editor and export font size in pixels
    #[arg(long, default_value_t = 16.0)]
    font_size: f32,

    /// Initial window width
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Initial window height
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Log state changes (debug level)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let filter = if args.verbose {
        "blockbeauty=debug,blockbeauty_core=debug"
    } else {
        "blockbeauty=info,blockbeauty_core=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let config = AppConfig {
        output_dir: args.output_dir.unwrap_or_else(default_output_dir),
        font: args.font,
        font_size: args.font_size.clamp(8.0, 48.0),
    };

    // Store configuration globally
    let _ = CONFIG.set(config);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("BlockBeauty")
            .with_inner_size(LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
