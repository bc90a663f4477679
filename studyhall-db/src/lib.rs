//! SQLite persistence layer for the library catalog.
//!
//! Provides schema creation, CRUD operations, and query APIs
//! backed by SQLite (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{
    delete_author, delete_book, delete_comment, delete_genre, save_author, save_book,
    save_comment, save_genre, seed_demo, SeedStats, StoreError,
};
pub use queries::{
    comments_for_book, find_author, find_book, find_comment, find_genre, find_genres_by_ids,
    library_stats, list_authors, list_books, list_genres, LibraryStats,
};
pub use schema::{open_database, open_memory};

// Callers hold connections without naming rusqlite themselves.
pub use rusqlite::Connection;
