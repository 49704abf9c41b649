use clap::Parser;

fn main() {
    let cli = hashparams::cli::Cli::parse();

    if let Err(err) = hashparams::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
