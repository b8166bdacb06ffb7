use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Board file to load (one row per line, symbols: . A B # w m f g r).
    pub board: PathBuf,

    /// Skip the board rendering and only print the result summary.
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}
