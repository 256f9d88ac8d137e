use std::path::PathBuf;

use clap::Parser;

use crate::models::boundaries::GridConfig;
use crate::models::constants::{GRID_HEIGHT, GRID_WIDTH, STEP};

#[derive(Parser, Debug)]
#[command(name = "turtle_grid", version, about = "Steer a marker around a grid from the keyboard")]
pub struct Args {
    /// Seed for the random number generator
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Distance between grid points
    #[arg(long, default_value_t = STEP, allow_hyphen_values = true)]
    pub step: i32,

    /// Grid width in steps (even)
    #[arg(long, default_value_t = GRID_WIDTH, allow_hyphen_values = true)]
    pub width: i32,

    /// Grid height in steps (even)
    #[arg(long, default_value_t = GRID_HEIGHT, allow_hyphen_values = true)]
    pub height: i32,

    /// Hide the command and speed panel
    #[arg(long)]
    pub no_info: bool,

    /// Run headless with a key script (^ < > c f s q) and print the final frame
    #[arg(long, value_name = "KEYS")]
    pub replay: Option<String>,

    /// Write log output to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn grid_config(&self) -> GridConfig {
        GridConfig {
            step: self.step,
            width: self.width,
            height: self.height,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
