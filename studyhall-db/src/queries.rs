//! Read queries for the library database.
//!
//! Provides entity lookups by id, full listings, and catalog statistics.
//! Book listings are assembled from three flat queries (books joined with
//! authors, all genres, all join rows) merged in memory, so listing N
//! books never issues N genre queries.

use rusqlite::{params, Connection};

use studyhall_library::{Author, Book, Comment, Genre};

use crate::operations::StoreError;

// ── Author Queries ──────────────────────────────────────────────────────────

/// List all authors.
pub fn list_authors(conn: &Connection) -> Result<Vec<Author>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, full_name FROM authors ORDER BY id")?;
    let rows = stmt.query_map([], row_to_author)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Find an author by id.
pub fn find_author(conn: &Connection, id: i64) -> Result<Option<Author>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, full_name FROM authors WHERE id = ?1")?;
    let result = stmt.query_row(params![id], row_to_author);
    match result {
        Ok(a) => Ok(Some(a)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// ── Genre Queries ───────────────────────────────────────────────────────────

/// List all genres.
pub fn list_genres(conn: &Connection) -> Result<Vec<Genre>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, name FROM genres ORDER BY id")?;
    let rows = stmt.query_map([], row_to_genre)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Find a genre by id.
pub fn find_genre(conn: &Connection, id: i64) -> Result<Option<Genre>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, name FROM genres WHERE id = ?1")?;
    let result = stmt.query_row(params![id], row_to_genre);
    match result {
        Ok(g) => Ok(Some(g)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Find all genres whose ids appear in `ids`. Unknown ids are skipped.
pub fn find_genres_by_ids(conn: &Connection, ids: &[i64]) -> Result<Vec<Genre>, StoreError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql = format!("SELECT id, name FROM genres WHERE id IN ({placeholders}) ORDER BY id");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(ids.iter()), row_to_genre)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Book Queries ────────────────────────────────────────────────────────────

/// List all books with their authors and genres.
pub fn list_books(conn: &Connection) -> Result<Vec<Book>, StoreError> {
    let genres = list_genres(conn)?;
    let mut books = books_without_genres(conn)?;
    let relations = all_genre_relations(conn)?;

    for book in &mut books {
        book.genres = relations
            .iter()
            .filter(|(book_id, _)| *book_id == book.id)
            .filter_map(|(_, genre_id)| genres.iter().find(|g| g.id == *genre_id).cloned())
            .collect();
    }
    Ok(books)
}

/// Find a book by id, with its author and genres attached.
pub fn find_book(conn: &Connection, id: i64) -> Result<Option<Book>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT books.id, books.title, books.author_id, authors.full_name
         FROM books
         LEFT JOIN authors ON books.author_id = authors.id
         WHERE books.id = ?1",
    )?;
    let result = stmt.query_row(params![id], row_to_book);
    let mut book = match result {
        Ok(b) => b,
        Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut stmt = conn.prepare("SELECT genre_id FROM books_genres WHERE book_id = ?1")?;
    let genre_ids = stmt
        .query_map(params![id], |row| row.get::<_, i64>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    book.genres = find_genres_by_ids(conn, &genre_ids)?;

    Ok(Some(book))
}

/// All books joined with their authors, genres left empty.
fn books_without_genres(conn: &Connection) -> Result<Vec<Book>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT books.id, books.title, books.author_id, authors.full_name
         FROM books
         LEFT JOIN authors ON books.author_id = authors.id
         ORDER BY books.id",
    )?;
    let rows = stmt.query_map([], row_to_book)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// All (book_id, genre_id) join rows.
fn all_genre_relations(conn: &Connection) -> Result<Vec<(i64, i64)>, StoreError> {
    let mut stmt = conn.prepare("SELECT book_id, genre_id FROM books_genres")?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Comment Queries ─────────────────────────────────────────────────────────

/// List all comments attached to a book.
pub fn comments_for_book(conn: &Connection, book_id: i64) -> Result<Vec<Comment>, StoreError> {
    let mut stmt =
        conn.prepare("SELECT id, text, book_id FROM comments WHERE book_id = ?1 ORDER BY id")?;
    let rows = stmt.query_map(params![book_id], row_to_comment)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Find a comment by id.
pub fn find_comment(conn: &Connection, id: i64) -> Result<Option<Comment>, StoreError> {
    let mut stmt = conn.prepare("SELECT id, text, book_id FROM comments WHERE id = ?1")?;
    let result = stmt.query_row(params![id], row_to_comment);
    match result {
        Ok(c) => Ok(Some(c)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Get overall library statistics.
pub fn library_stats(conn: &Connection) -> Result<LibraryStats, StoreError> {
    let authors: i64 = conn.query_row("SELECT COUNT(*) FROM authors", [], |r| r.get(0))?;
    let genres: i64 = conn.query_row("SELECT COUNT(*) FROM genres", [], |r| r.get(0))?;
    let books: i64 = conn.query_row("SELECT COUNT(*) FROM books", [], |r| r.get(0))?;
    let genre_links: i64 = conn.query_row("SELECT COUNT(*) FROM books_genres", [], |r| r.get(0))?;
    let comments: i64 = conn.query_row("SELECT COUNT(*) FROM comments", [], |r| r.get(0))?;

    Ok(LibraryStats {
        authors,
        genres,
        books,
        genre_links,
        comments,
    })
}

/// Summary statistics for the library.
#[derive(Debug)]
pub struct LibraryStats {
    pub authors: i64,
    pub genres: i64,
    pub books: i64,
    pub genre_links: i64,
    pub comments: i64,
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_author(row: &rusqlite::Row<'_>) -> rusqlite::Result<Author> {
    Ok(Author {
        id: row.get(0)?,
        full_name: row.get(1)?,
    })
}

fn row_to_genre(row: &rusqlite::Row<'_>) -> rusqlite::Result<Genre> {
    Ok(Genre {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

fn row_to_book(row: &rusqlite::Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: Author {
            id: row.get(2)?,
            full_name: row.get(3)?,
        },
        genres: Vec::new(),
    })
}

fn row_to_comment(row: &rusqlite::Row<'_>) -> rusqlite::Result<Comment> {
    Ok(Comment {
        id: row.get(0)?,
        text: row.get(1)?,
        book_id: row.get(2)?,
    })
}
