//! Domain types for the library catalog.
//!
//! Authors, genres, books (with their many-to-many genre links), and
//! comments, plus the one-line console renderings used by the CLI.

pub mod types;

pub use types::{Author, Book, Comment, Genre};
