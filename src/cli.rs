//! Command-line argument parsing for the canvas REPL
//!
//! Supports:
//! - Viewport dimensions (placement convention for new annotations)
//! - Deterministic seeding of the color/font generators
//! - Quiet mode for piping command scripts

use clap::Parser;

/// A canvas text annotation tool
#[derive(Parser, Debug)]
#[command(
    name = "placard",
    version,
    about = "Place and edit text annotations on a 2D canvas"
)]
pub struct CliArgs {
    /// Viewport width in pixels; new annotations are placed at the center
    #[arg(long, default_value_t = 1280.0, value_name = "PX")]
    pub width: f32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 720.0, value_name = "PX")]
    pub height: f32,

    /// Seed for the random color/font generators (for reproducible runs)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Suppress the banner and prompt (useful when piping commands)
    #[arg(short, long)]
    pub quiet: bool,
}
