use clap::{Parser, ValueEnum};
use tracing::Level;
use crate::shell::messages::Language;

// OutputFormat selects how command results are written back to the user.
#[derive(Debug, PartialEq, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    // Menu, prompts and human readable messages.
    #[default]
    Text,
    // One JSON object per result, no menu or prompts.
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "library", about = "Interactive library catalog and lending tracker")]
pub struct ShellArgs {
    /// Language of menu and result messages
    #[arg(long, env = "LIBRARY_LANG", value_enum, default_value_t = Language::En)]
    pub lang: Language,

    /// Render results as text or as JSON lines
    #[arg(long, env = "LIBRARY_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Maximum log level written to stderr
    #[arg(long, env = "LIBRARY_LOG_LEVEL", default_value = "warn")]
    pub log_level: Level,

    /// Write log lines as JSON
    #[arg(long)]
    pub log_json: bool,
}
