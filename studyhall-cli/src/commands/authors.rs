use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use studyhall_library::Author;

use crate::cli_types::AuthorAction;
use crate::CliError;

pub(crate) fn run_authors(db_path: Option<PathBuf>, action: AuthorAction) -> Result<(), CliError> {
    let conn = super::open(db_path)?;

    match action {
        AuthorAction::List => {
            let authors = studyhall_db::list_authors(&conn)?;
            if authors.is_empty() {
                log::info!("No authors in the catalog.");
                return Ok(());
            }
            log::info!(
                "{}",
                format!("{} author(s):", authors.len()).if_supports_color(Stdout, |t| t.bold()),
            );
            for author in &authors {
                log::info!("  {author}");
            }
        }
        AuthorAction::Find { id } => match studyhall_db::find_author(&conn, id)? {
            Some(author) => log::info!("{author}"),
            None => log::warn!("Author with id {id} not found"),
        },
        AuthorAction::Insert { full_name } => {
            let saved = studyhall_db::save_author(&conn, &Author::new(&full_name))?;
            log::info!(
                "{} Inserted {saved}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            );
        }
        AuthorAction::Update { id, full_name } => {
            let saved = studyhall_db::save_author(&conn, &Author { id, full_name })?;
            log::info!(
                "{} Updated {saved}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            );
        }
        AuthorAction::Delete { id } => {
            studyhall_db::delete_author(&conn, id)?;
            log::info!("Deleted author {id} (if it existed)");
        }
    }

    Ok(())
}
