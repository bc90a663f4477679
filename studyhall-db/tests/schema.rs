use studyhall_db::schema::{self, CURRENT_VERSION};
use studyhall_db::{open_database, open_memory};

#[test]
fn open_memory_creates_schema() {
    let conn = open_memory().unwrap();

    let count: i32 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table'
             AND name IN ('authors', 'genres', 'books', 'books_genres', 'comments')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 5);
}

#[test]
fn create_schema_is_idempotent() {
    let conn = open_memory().unwrap();
    schema::create_schema(&conn).unwrap();

    let version: i32 = conn
        .query_row("SELECT MAX(version) FROM schema_version", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(version, CURRENT_VERSION);
}

#[test]
fn open_database_creates_file_and_reopens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.db");

    {
        let conn = open_database(&path).unwrap();
        conn.execute("INSERT INTO authors (full_name) VALUES ('A')", [])
            .unwrap();
    }

    let conn = open_database(&path).unwrap();
    let count: i32 = conn
        .query_row("SELECT COUNT(*) FROM authors", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn foreign_keys_are_enforced() {
    let conn = open_memory().unwrap();
    let result = conn.execute(
        "INSERT INTO books (title, author_id) VALUES ('Orphan', 999)",
        [],
    );
    assert!(result.is_err());
}
