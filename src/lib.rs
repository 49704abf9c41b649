pub mod app;
pub mod cli;
pub mod codec;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod hash;
pub mod output;

pub use hash::{HashParams, ViewMode, parse};

use cli::Cli;
use error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    app::run(cli)
}
