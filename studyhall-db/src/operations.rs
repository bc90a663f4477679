//! CRUD operations for all catalog entity types.
//!
//! Saving an entity with id 0 inserts a new row and returns the entity
//! with its generated id; a non-zero id updates in place and fails with
//! [`StoreError::NotFound`] when the row is absent. Deletes are silent
//! no-ops for absent ids, and foreign keys cascade so removing an author,
//! genre, or book takes its dependent rows with it.

use rusqlite::{params, Connection};
use thiserror::Error;

use studyhall_library::{Author, Book, Comment, Genre};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },
    #[error("{entity} requires an existing {relation} (id {id} not found)")]
    MissingRelation {
        entity: &'static str,
        relation: &'static str,
        id: i64,
    },
}

// ── Author Operations ───────────────────────────────────────────────────────

/// Insert (id 0) or update an author. Returns the persisted author.
pub fn save_author(conn: &Connection, author: &Author) -> Result<Author, StoreError> {
    if author.id == 0 {
        conn.execute(
            "INSERT INTO authors (full_name) VALUES (?1)",
            params![author.full_name],
        )?;
        return Ok(Author {
            id: conn.last_insert_rowid(),
            full_name: author.full_name.clone(),
        });
    }

    let changed = conn.execute(
        "UPDATE authors SET full_name = ?2 WHERE id = ?1",
        params![author.id, author.full_name],
    )?;
    if changed == 0 {
        return Err(StoreError::NotFound {
            entity: "author",
            id: author.id,
        });
    }
    Ok(author.clone())
}

/// Delete an author by id. Missing ids are a no-op; dependent books,
/// their genre links, and their comments cascade away.
pub fn delete_author(conn: &Connection, id: i64) -> Result<(), StoreError> {
    conn.execute("DELETE FROM authors WHERE id = ?1", params![id])?;
    Ok(())
}

// ── Genre Operations ────────────────────────────────────────────────────────

/// Insert (id 0) or update a genre. Returns the persisted genre.
pub fn save_genre(conn: &Connection, genre: &Genre) -> Result<Genre, StoreError> {
    if genre.id == 0 {
        conn.execute("INSERT INTO genres (name) VALUES (?1)", params![genre.name])?;
        return Ok(Genre {
            id: conn.last_insert_rowid(),
            name: genre.name.clone(),
        });
    }

    let changed = conn.execute(
        "UPDATE genres SET name = ?2 WHERE id = ?1",
        params![genre.id, genre.name],
    )?;
    if changed == 0 {
        return Err(StoreError::NotFound {
            entity: "genre",
            id: genre.id,
        });
    }
    Ok(genre.clone())
}

/// Delete a genre by id. Missing ids are a no-op; join rows cascade away.
pub fn delete_genre(conn: &Connection, id: i64) -> Result<(), StoreError> {
    conn.execute("DELETE FROM genres WHERE id = ?1", params![id])?;
    Ok(())
}

// ── Book Operations ─────────────────────────────────────────────────────────

/// Insert (id 0) or update a book, replacing its genre links.
///
/// The book's author must already exist; otherwise the save fails with
/// [`StoreError::MissingRelation`].
pub fn save_book(conn: &Connection, book: &Book) -> Result<Book, StoreError> {
    if !row_exists(conn, "authors", book.author.id)? {
        return Err(StoreError::MissingRelation {
            entity: "book",
            relation: "author",
            id: book.author.id,
        });
    }

    let id = if book.id == 0 {
        conn.execute(
            "INSERT INTO books (title, author_id) VALUES (?1, ?2)",
            params![book.title, book.author.id],
        )?;
        conn.last_insert_rowid()
    } else {
        let changed = conn.execute(
            "UPDATE books SET title = ?2, author_id = ?3 WHERE id = ?1",
            params![book.id, book.title, book.author.id],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound {
                entity: "book",
                id: book.id,
            });
        }
        book.id
    };

    replace_genre_links(conn, id, &book.genres)?;

    Ok(Book {
        id,
        title: book.title.clone(),
        author: book.author.clone(),
        genres: book.genres.clone(),
    })
}

/// Delete a book by id. Missing ids are a no-op; genre links and comments
/// cascade away.
pub fn delete_book(conn: &Connection, id: i64) -> Result<(), StoreError> {
    conn.execute("DELETE FROM books WHERE id = ?1", params![id])?;
    Ok(())
}

/// Clear and re-insert a book's genre join rows.
fn replace_genre_links(conn: &Connection, book_id: i64, genres: &[Genre]) -> Result<(), StoreError> {
    conn.execute(
        "DELETE FROM books_genres WHERE book_id = ?1",
        params![book_id],
    )?;
    for genre in genres {
        conn.execute(
            "INSERT INTO books_genres (book_id, genre_id) VALUES (?1, ?2)",
            params![book_id, genre.id],
        )?;
    }
    Ok(())
}

// ── Comment Operations ──────────────────────────────────────────────────────

/// Insert (id 0) or update a comment.
///
/// The comment's book must already exist; otherwise the save fails with
/// [`StoreError::MissingRelation`].
pub fn save_comment(conn: &Connection, comment: &Comment) -> Result<Comment, StoreError> {
    if !row_exists(conn, "books", comment.book_id)? {
        return Err(StoreError::MissingRelation {
            entity: "comment",
            relation: "book",
            id: comment.book_id,
        });
    }

    if comment.id == 0 {
        conn.execute(
            "INSERT INTO comments (text, book_id) VALUES (?1, ?2)",
            params![comment.text, comment.book_id],
        )?;
        return Ok(Comment {
            id: conn.last_insert_rowid(),
            text: comment.text.clone(),
            book_id: comment.book_id,
        });
    }

    let changed = conn.execute(
        "UPDATE comments SET text = ?2, book_id = ?3 WHERE id = ?1",
        params![comment.id, comment.text, comment.book_id],
    )?;
    if changed == 0 {
        return Err(StoreError::NotFound {
            entity: "comment",
            id: comment.id,
        });
    }
    Ok(comment.clone())
}

/// Delete a comment by id. Missing ids are a no-op.
pub fn delete_comment(conn: &Connection, id: i64) -> Result<(), StoreError> {
    conn.execute("DELETE FROM comments WHERE id = ?1", params![id])?;
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────────────

/// Check whether a row with the given id exists in `table`.
fn row_exists(conn: &Connection, table: &str, id: i64) -> Result<bool, rusqlite::Error> {
    let sql = format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE id = ?1)");
    conn.query_row(&sql, params![id], |row| row.get(0))
}

// ── Demo Seed ───────────────────────────────────────────────────────────────

/// Statistics from seeding the database.
#[derive(Debug, Default)]
pub struct SeedStats {
    pub authors: usize,
    pub genres: usize,
    pub books: usize,
    pub comments: usize,
}

/// Load a small demo data set: three authors, six genres, three books
/// with two genres each, and a couple of comments per book.
///
/// Intended for a fresh database; rows are plain inserts.
pub fn seed_demo(conn: &Connection) -> Result<SeedStats, StoreError> {
    let mut stats = SeedStats::default();

    let authors = ["Author_1", "Author_2", "Author_3"]
        .iter()
        .map(|name| save_author(conn, &Author::new(*name)))
        .collect::<Result<Vec<_>, _>>()?;
    stats.authors = authors.len();

    let genres = [
        "Genre_1", "Genre_2", "Genre_3", "Genre_4", "Genre_5", "Genre_6",
    ]
    .iter()
    .map(|name| save_genre(conn, &Genre::new(*name)))
    .collect::<Result<Vec<_>, _>>()?;
    stats.genres = genres.len();

    // Book N gets author N and genres 2N-1, 2N.
    let mut books = Vec::new();
    for (i, author) in authors.iter().enumerate() {
        let book = Book::new(
            format!("BookTitle_{}", i + 1),
            author.clone(),
            vec![genres[2 * i].clone(), genres[2 * i + 1].clone()],
        );
        books.push(save_book(conn, &book)?);
    }
    stats.books = books.len();

    for book in &books {
        for n in 1..=2 {
            save_comment(
                conn,
                &Comment::new(format!("Comment_{}_for_{}", n, book.title), book.id),
            )?;
            stats.comments += 1;
        }
    }

    Ok(stats)
}
