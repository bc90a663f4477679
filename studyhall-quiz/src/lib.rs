//! Console quiz engine: question bank loading, quiz execution, and
//! result scoring.
//!
//! Questions come from a semicolon-delimited CSV file; the quiz runs as a
//! sequential console dialog through the [`io::Io`] abstraction, so the
//! whole session is testable against in-memory streams.

pub mod bank;
pub mod config;
pub mod io;
pub mod runner;
pub mod types;

pub use bank::{load_questions, BankError};
pub use config::{ConfigError, QuizConfig};
pub use io::{Io, StreamIo};
pub use runner::{ask_student, execute_quiz, run_session, show_result};
pub use types::{Answer, Question, QuizResult, Student};
