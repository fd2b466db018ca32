//! dwca CLI - convert delimited tabular files into a Darwin Core Archive.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Cli;
use commands::convert::ConvertOptions;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let options = ConvertOptions {
        output: cli.output,
        encoding: cli.encoding,
        title: cli.title,
        creator: cli.creator,
        tabs: cli.tabs,
    };

    if let Err(e) = commands::convert::run(cli.files, options) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
