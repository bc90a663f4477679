pub(crate) mod authors;
pub(crate) mod books;
pub(crate) mod comments;
pub(crate) mod db;
pub(crate) mod genres;
pub(crate) mod quiz;

use std::path::PathBuf;

use studyhall_db::Connection;

use crate::CliError;

/// Default library database location under the user data dir.
pub(crate) fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("studyhall")
        .join("library.db")
}

/// Open (creating if needed) the library database.
pub(crate) fn open(db_path: Option<PathBuf>) -> Result<Connection, CliError> {
    let path = db_path.unwrap_or_else(default_db_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    log::debug!("Opening library database at {}", path.display());
    Ok(studyhall_db::open_database(&path)?)
}
