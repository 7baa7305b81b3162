//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Fabulist - illustrated, narrated children's stories from a single category
#[derive(Parser, Debug)]
#[command(name = "fabulist")]
#[command(about = "Illustrated, narrated children's stories from a single category", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file layered over the defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write and illustrate a story about a category
    Tell(TellArgs),

    /// Print the resolved configuration as TOML
    Config,
}

/// Options for `fabulist tell`
#[derive(Args, Debug, Clone)]
pub struct TellArgs {
    /// What the story should be about, e.g. "space" or "kindness"
    pub category: String,

    /// Also write the story as a self-contained HTML page
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// Print the story as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Narrate the story
    #[arg(long)]
    pub read_aloud: bool,

    /// Where narration is written
    #[arg(long, default_value = "story.wav")]
    pub wav: PathBuf,

    /// Play narration on the default audio device instead of writing a file
    #[arg(long, requires = "read_aloud")]
    pub speaker: bool,

    /// Narrate silently
    #[arg(long, requires = "read_aloud")]
    pub mute: bool,
}
