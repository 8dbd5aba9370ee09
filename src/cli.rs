// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "bounce-scene")]
#[command(about = "Assembles the bounce level's lights and platforms", long_about = None)]
pub struct Cli {
    /// JSON level layout; the built-in scene is used when omitted
    #[arg(long)]
    pub layout: Option<PathBuf>,

    /// Built-in scene name, also read from the SCENE environment variable
    #[arg(long, env = "SCENE", default_value = "bounce")]
    pub scene: String,

    /// Reject platforms without a contact material
    #[arg(long, default_value = "false")]
    pub strict: bool,

    /// Print the assembled scene as JSON
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Disable console output besides logging
    #[arg(long = "quiet", default_value = "false")]
    pub quiet: bool,
}
