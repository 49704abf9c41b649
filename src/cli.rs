use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "hashparams",
    version,
    about = "Decode launch parameters from URL fragments"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Parse(ParseArgs),
    Decode(DecodeArgs),
    Link(LinkArgs),
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    #[arg(
        env = "HASHPARAMS_LOCATION",
        help = "Fragment text starting with '#', or a full URL"
    )]
    pub location: Option<String>,
    #[arg(long, help = "Fail on malformed fragments instead of returning nothing")]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct DecodeArgs {
    #[arg(help = "Base64 text to decode")]
    pub text: String,
    #[arg(long, default_value_t = 0, help = "Round output up to a multiple of this size")]
    pub block_size: usize,
}

#[derive(Debug, Args)]
pub struct LinkArgs {
    #[arg(long, help = "URL to append the fragment to")]
    pub base: Option<String>,
    #[arg(long, help = "Profile location to fetch")]
    pub profile_url: Option<String>,
    #[arg(long, help = "Display title override")]
    pub title: Option<String>,
    #[arg(long, help = "Locally referenced profile path")]
    pub local_profile_path: Option<String>,
    #[arg(long, help = "Initial view: time-ordered, left-heavy or sandwich")]
    pub view: Option<String>,
    #[arg(long, help = "Embed this file as the inline payload")]
    pub file: Option<PathBuf>,
    #[arg(long, help = "Suggested filename for the payload")]
    pub custom_filename: Option<String>,
}
