//! studyhall CLI
//!
//! Console quiz sessions and CRUD commands for the library catalog.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;

use cli_types::{Cli, Commands};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let result = run(cli);
    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Quiz { config } => commands::quiz::run_quiz(config),
        Commands::Authors { action } => commands::authors::run_authors(cli.db, action),
        Commands::Genres { action } => commands::genres::run_genres(cli.db, action),
        Commands::Books { action } => commands::books::run_books(cli.db, action),
        Commands::Comments { action } => commands::comments::run_comments(cli.db, action),
        Commands::Db { action } => commands::db::run_db(cli.db, action),
    }
}

/// Configure the logger.
///
/// Default output is message-only info lines (the CLI's normal voice);
/// `--verbose` switches to timestamped debug logging and `--quiet` keeps
/// only warnings and errors.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);

    if !verbose {
        builder.format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level.to_string().to_lowercase(), record.args()),
        });
    }

    builder.init();
}

/// Log an empty info line between output sections.
pub(crate) fn log_blank() {
    log::info!("");
}
