use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use studyhall_db::{Connection, StoreError};
use studyhall_library::{Author, Book, Genre};

use crate::cli_types::BookAction;
use crate::CliError;

pub(crate) fn run_books(db_path: Option<PathBuf>, action: BookAction) -> Result<(), CliError> {
    let conn = super::open(db_path)?;

    match action {
        BookAction::List => {
            let books = studyhall_db::list_books(&conn)?;
            if books.is_empty() {
                log::info!("No books in the catalog.");
                return Ok(());
            }
            log::info!(
                "{}",
                format!("{} book(s):", books.len()).if_supports_color(Stdout, |t| t.bold()),
            );
            for book in &books {
                log::info!("  {book}");
            }
        }
        BookAction::Find { id } => match studyhall_db::find_book(&conn, id)? {
            Some(book) => log::info!("{book}"),
            None => log::warn!("Book with id {id} not found"),
        },
        BookAction::Insert {
            title,
            author_id,
            genres,
        } => {
            let author = resolve_author(&conn, author_id)?;
            let genres = resolve_genres(&conn, &genres)?;
            let saved = studyhall_db::save_book(&conn, &Book::new(&title, author, genres))?;
            log::info!(
                "{} Inserted {saved}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            );
        }
        BookAction::Update {
            id,
            title,
            author_id,
            genres,
        } => {
            let author = resolve_author(&conn, author_id)?;
            let genres = resolve_genres(&conn, &genres)?;
            let saved = studyhall_db::save_book(
                &conn,
                &Book {
                    id,
                    title,
                    author,
                    genres,
                },
            )?;
            log::info!(
                "{} Updated {saved}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            );
        }
        BookAction::Delete { id } => {
            studyhall_db::delete_book(&conn, id)?;
            log::info!("Deleted book {id} (if it existed)");
        }
    }

    Ok(())
}

fn resolve_author(conn: &Connection, author_id: i64) -> Result<Author, CliError> {
    studyhall_db::find_author(conn, author_id)?
        .ok_or_else(|| {
            StoreError::MissingRelation {
                entity: "book",
                relation: "author",
                id: author_id,
            }
            .into()
        })
}

fn resolve_genres(conn: &Connection, genre_ids: &[i64]) -> Result<Vec<Genre>, CliError> {
    let genres = studyhall_db::find_genres_by_ids(conn, genre_ids)?;
    if genres.len() != genre_ids.len() {
        let known: Vec<i64> = genres.iter().map(|g| g.id).collect();
        for id in genre_ids {
            if !known.contains(id) {
                log::warn!("Genre with id {id} not found, skipping");
            }
        }
    }
    Ok(genres)
}
