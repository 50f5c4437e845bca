//! Command-line surface.

use clap::{Args, Parser, Subcommand};
use listing::{PartialConfig, Resolution};
use std::path::PathBuf;

/// wallfetch - pick the best image from Reddit and make it your wallpaper
#[derive(Parser, Debug)]
#[command(name = "wallfetch", version)]
#[command(about = "Fetch a wallpaper from Reddit listings and apply it", long_about = None)]
pub struct Cli {
    /// Config file (defaults to <config dir>/wallfetch/config.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output from every stage
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Give up after this many seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Select, download and apply a wallpaper
    Run {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Do not show a desktop notification
        #[arg(long)]
        no_notify: bool,
    },

    /// Print the wallpaper that would be picked, without downloading it
    Select {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Print the effective configuration as JSON
    Config {
        #[command(flatten)]
        selection: SelectionArgs,
    },
}

impl Commands {
    pub fn selection(&self) -> &SelectionArgs {
        match self {
            Commands::Run { selection, .. }
            | Commands::Select { selection }
            | Commands::Config { selection } => selection,
        }
    }
}

/// Overrides layered on top of the config file.
#[derive(Args, Debug, Default)]
pub struct SelectionArgs {
    /// Subreddit to search (repeatable)
    #[arg(short = 'r', long = "subreddit")]
    pub subreddits: Vec<String>,

    /// top, hot, controversial or new
    #[arg(short, long)]
    pub sort: Option<String>,

    /// hour, day, week, month, year or all
    #[arg(short, long)]
    pub from: Option<String>,

    /// Minimum post score
    #[arg(long)]
    pub score: Option<i64>,

    /// Allowed image host (repeatable)
    #[arg(long = "domain")]
    pub domains: Vec<String>,

    /// Allowed file type (repeatable)
    #[arg(short = 't', long = "type")]
    pub types: Vec<String>,

    /// Skip images already in the wallpaper directory
    #[arg(long)]
    pub shuffle: bool,

    /// Where wallpapers are saved
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Minimum width declared in the post title
    #[arg(long, requires = "min_height")]
    pub min_width: Option<u32>,

    /// Minimum height declared in the post title
    #[arg(long, requires = "min_width")]
    pub min_height: Option<u32>,
}

impl SelectionArgs {
    /// The configuration layer these flags describe.
    ///
    /// Flags that were not given stay `None` so the file layer shows through.
    pub fn to_partial(&self) -> PartialConfig {
        let non_empty = |values: &Vec<String>| (!values.is_empty()).then(|| values.clone());

        PartialConfig {
            subreddits: non_empty(&self.subreddits),
            sort: self.sort.clone(),
            from: self.from.clone(),
            score: self.score,
            domains: non_empty(&self.domains),
            types: non_empty(&self.types),
            shuffle: self.shuffle.then_some(true),
            directory: self.directory.clone(),
            resolution: match (self.min_width, self.min_height) {
                (Some(width), Some(height)) => Some(Resolution::new(width, height)),
                _ => None,
            },
        }
    }
}
