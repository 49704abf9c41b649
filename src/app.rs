use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        json,
        verbose,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(json, verbose);

    match command {
        Command::Parse(args) => commands::parse::run(&ctx, args),
        Command::Decode(args) => commands::decode::run(&ctx, args),
        Command::Link(args) => commands::link::run(&ctx, args),
    }
}
