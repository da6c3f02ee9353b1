use clap::Parser;

use fraudlens::cli::{check, output, run, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Run(args) => run::execute(args),
        Commands::Check(command) => check::execute(command),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
