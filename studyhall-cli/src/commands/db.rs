use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::cli_types::DbAction;
use crate::CliError;

use super::default_db_path;

pub(crate) fn run_db(db_path: Option<PathBuf>, action: DbAction) -> Result<(), CliError> {
    match action {
        DbAction::Stats => run_stats(db_path),
        DbAction::Seed => run_seed(db_path),
        DbAction::Path => {
            let path = db_path.unwrap_or_else(default_db_path);
            log::info!("{}", path.display());
            Ok(())
        }
    }
}

fn run_stats(db_path: Option<PathBuf>) -> Result<(), CliError> {
    let path = db_path.clone().unwrap_or_else(default_db_path);
    if !path.exists() {
        log::warn!("No library database found at {}", path.display());
        log::info!("Run 'studyhall db seed' to create one with demo data.");
        return Ok(());
    }

    let conn = super::open(db_path)?;
    let stats = studyhall_db::library_stats(&conn)?;

    log::info!(
        "{}",
        "Library Database Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", path.display());
    crate::log_blank();
    log::info!("  Authors:      {:>6}", stats.authors);
    log::info!("  Genres:       {:>6}", stats.genres);
    log::info!("  Books:        {:>6}", stats.books);
    log::info!("  Genre links:  {:>6}", stats.genre_links);
    log::info!("  Comments:     {:>6}", stats.comments);

    Ok(())
}

fn run_seed(db_path: Option<PathBuf>) -> Result<(), CliError> {
    let conn = super::open(db_path)?;

    let stats = studyhall_db::library_stats(&conn)?;
    if stats.authors + stats.genres + stats.books + stats.comments > 0 {
        log::warn!("Database already contains data, refusing to seed.");
        log::info!("Point --db at an empty file to load the demo set.");
        return Ok(());
    }

    let seeded = studyhall_db::seed_demo(&conn)?;
    log::info!(
        "{} Seeded {} author(s), {} genre(s), {} book(s), {} comment(s)",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        seeded.authors,
        seeded.genres,
        seeded.books,
        seeded.comments,
    );

    Ok(())
}
