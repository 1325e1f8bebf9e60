use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

/// How episodes are bucketed into series.
#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GroupBy {
    /// Filename text before the SxxEyy numbering
    #[default]
    Prefix,
    /// Name of the folder holding the file
    Folder,
}

/// Order of episodes inside each series.
#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Order {
    /// The order files were found in
    #[default]
    Discovery,
    /// By season, then episode number
    Episode,
}

#[derive(Debug, Clone, Copy, ValueEnum, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "episode-scanner")]
#[command(about = "Scan a folder for video files and group episodes by series")]
pub struct Cli {
    /// The folder to scan for videos
    pub folder: PathBuf,

    /// How episodes are grouped into series
    #[arg(long, value_enum)]
    pub group_by: Option<GroupBy>,

    /// Order of episodes within a series
    #[arg(long, value_enum)]
    pub order: Option<Order>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Comma separated list of video extensions to scan
    #[arg(long, value_delimiter = ',', conflicts_with = "all_files")]
    pub extensions: Option<Vec<String>>,

    /// Consider every file, whatever its extension
    #[arg(long)]
    pub all_files: bool,

    /// Path to a config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
