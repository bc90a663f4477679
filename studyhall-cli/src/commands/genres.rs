use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use studyhall_library::Genre;

use crate::cli_types::GenreAction;
use crate::CliError;

pub(crate) fn run_genres(db_path: Option<PathBuf>, action: GenreAction) -> Result<(), CliError> {
    let conn = super::open(db_path)?;

    match action {
        GenreAction::List => {
            let genres = studyhall_db::list_genres(&conn)?;
            if genres.is_empty() {
                log::info!("No genres in the catalog.");
                return Ok(());
            }
            log::info!(
                "{}",
                format!("{} genre(s):", genres.len()).if_supports_color(Stdout, |t| t.bold()),
            );
            for genre in &genres {
                log::info!("  {genre}");
            }
        }
        GenreAction::Find { id } => match studyhall_db::find_genre(&conn, id)? {
            Some(genre) => log::info!("{genre}"),
            None => log::warn!("Genre with id {id} not found"),
        },
        GenreAction::Insert { name } => {
            let saved = studyhall_db::save_genre(&conn, &Genre::new(&name))?;
            log::info!(
                "{} Inserted {saved}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            );
        }
        GenreAction::Update { id, name } => {
            let saved = studyhall_db::save_genre(&conn, &Genre { id, name })?;
            log::info!(
                "{} Updated {saved}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            );
        }
        GenreAction::Delete { id } => {
            studyhall_db::delete_genre(&conn, id)?;
            log::info!("Deleted genre {id} (if it existed)");
        }
    }

    Ok(())
}
