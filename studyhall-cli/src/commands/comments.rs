use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use studyhall_library::Comment;

use crate::cli_types::CommentAction;
use crate::CliError;

pub(crate) fn run_comments(
    db_path: Option<PathBuf>,
    action: CommentAction,
) -> Result<(), CliError> {
    let conn = super::open(db_path)?;

    match action {
        CommentAction::ForBook { book_id } => {
            if studyhall_db::find_book(&conn, book_id)?.is_none() {
                log::warn!("Book with id {book_id} not found");
                return Ok(());
            }
            let comments = studyhall_db::comments_for_book(&conn, book_id)?;
            if comments.is_empty() {
                log::info!("No comments for book {book_id}.");
                return Ok(());
            }
            log::info!(
                "{}",
                format!("{} comment(s) for book {book_id}:", comments.len())
                    .if_supports_color(Stdout, |t| t.bold()),
            );
            for comment in &comments {
                log::info!("  {comment}");
            }
        }
        CommentAction::Find { id } => match studyhall_db::find_comment(&conn, id)? {
            Some(comment) => log::info!("{comment}"),
            None => log::warn!("Comment with id {id} not found"),
        },
        CommentAction::Insert { text, book_id } => {
            let saved = studyhall_db::save_comment(&conn, &Comment::new(&text, book_id))?;
            log::info!(
                "{} Inserted {saved}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            );
        }
        CommentAction::Update { id, text, book_id } => {
            let saved = studyhall_db::save_comment(&conn, &Comment { id, text, book_id })?;
            log::info!(
                "{} Updated {saved}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            );
        }
        CommentAction::Delete { id } => {
            studyhall_db::delete_comment(&conn, id)?;
            log::info!("Deleted comment {id} (if it existed)");
        }
    }

    Ok(())
}
