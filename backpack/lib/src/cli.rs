use clap::Parser;
use std::path::PathBuf;

/// Check that a GitHub repository lists at least a given number of issues.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Account that owns the repository (e.g., 'rust-lang')
    #[arg(short, long)]
    pub user: String,

    /// Repository name (e.g., 'cargo')
    #[arg(short, long)]
    pub repo: String,

    /// Fewest issues the listing may return
    #[arg(short, long, default_value_t = 1)]
    pub minimum: usize,

    /// Override the API base URL (also read from `GITHUB_API_URL`)
    #[arg(long)]
    pub api_base: Option<String>,

    /// Read settings from this TOML file instead of the user config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub verbosity: clap_verbosity_flag::Verbosity,
}
