//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "studyhall")]
#[command(about = "Console quiz sessions and a library catalog", long_about = None)]
pub(crate) struct Cli {
    /// Path to the library database (defaults to the user data dir)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run a quiz session for one student
    Quiz {
        /// Use this config file instead of the default location
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Manage authors
    Authors {
        #[command(subcommand)]
        action: AuthorAction,
    },

    /// Manage genres
    Genres {
        #[command(subcommand)]
        action: GenreAction,
    },

    /// Manage books
    Books {
        #[command(subcommand)]
        action: BookAction,
    },

    /// Manage comments
    Comments {
        #[command(subcommand)]
        action: CommentAction,
    },

    /// Database maintenance
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum AuthorAction {
    /// List all authors
    List,

    /// Find an author by id
    Find { id: i64 },

    /// Insert a new author
    Insert { full_name: String },

    /// Update an existing author
    Update { id: i64, full_name: String },

    /// Delete an author by id (dependent books and comments go with it)
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub(crate) enum GenreAction {
    /// List all genres
    List,

    /// Find a genre by id
    Find { id: i64 },

    /// Insert a new genre
    Insert { name: String },

    /// Update an existing genre
    Update { id: i64, name: String },

    /// Delete a genre by id
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub(crate) enum BookAction {
    /// List all books with their authors and genres
    List,

    /// Find a book by id
    Find { id: i64 },

    /// Insert a new book
    Insert {
        title: String,
        author_id: i64,

        /// Genre ids to attach (e.g., 1,2)
        #[arg(long, value_delimiter = ',')]
        genres: Vec<i64>,
    },

    /// Update an existing book, replacing its genres
    Update {
        id: i64,
        title: String,
        author_id: i64,

        /// Genre ids to attach (e.g., 1,2)
        #[arg(long, value_delimiter = ',')]
        genres: Vec<i64>,
    },

    /// Delete a book by id (its comments go with it)
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub(crate) enum CommentAction {
    /// List all comments for a book
    ForBook { book_id: i64 },

    /// Find a comment by id
    Find { id: i64 },

    /// Insert a new comment on a book
    Insert { text: String, book_id: i64 },

    /// Update an existing comment
    Update { id: i64, text: String, book_id: i64 },

    /// Delete a comment by id
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub(crate) enum DbAction {
    /// Show table counts
    Stats,

    /// Load the demo data set into an empty database
    Seed,

    /// Print the database file path
    Path,
}
