// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::scene::RingLevel;

#[derive(Parser, Debug, Clone)]
#[command(name = "carousel")]
#[command(about = "Animated three-level carousel scene", long_about = None)]
pub struct Cli {
    /// Run without a window against a synthetic 60 Hz clock
    #[arg(long)]
    pub headless: bool,

    /// Accepted ticks to run in headless mode
    #[arg(long, default_value_t = 120)]
    pub ticks: u64,

    /// Rings held engaged for the whole headless run
    #[arg(long, value_enum, value_delimiter = ',')]
    pub engage: Vec<LevelArg>,

    /// Seed for slot orders and spin rates (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the headless scene snapshot here instead of stdout
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Start in wireframe mode
    #[arg(long)]
    pub wireframe: bool,

    /// Load the carousel configuration from a JSON file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelArg {
    Inner,
    Middle,
    Outer,
}

impl From<LevelArg> for RingLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Inner => RingLevel::Inner,
            LevelArg::Middle => RingLevel::Middle,
            LevelArg::Outer => RingLevel::Outer,
        }
    }
}

impl Cli {
    pub fn engaged_levels(&self) -> Vec<RingLevel> {
        self.engage.iter().copied().map(RingLevel::from).collect()
    }
}
