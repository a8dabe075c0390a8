use clap::Parser;

mod cli;
use cli::commands::{self, SearchArgs};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    cvscan::logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Search {
            corpus,
            keywords,
            algorithm,
            top,
            threshold,
            config,
            per_document,
            json,
        } => commands::search(SearchArgs {
            corpus,
            keywords,
            algorithm,
            top,
            threshold,
            config,
            per_document,
            json,
        }),
        Commands::Scan {
            file,
            patterns,
            algorithm,
            threshold,
        } => commands::scan(&file, &patterns, &algorithm, threshold),
        Commands::Inspect { corpus } => commands::inspect(&corpus),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
