//! Question bank loading from a delimited text file.
//!
//! The bank format is semicolon-separated with one header row:
//!
//! ```text
//! question;is_correct;answer
//! Is there life on Mars?;false;Certainly
//! Is there life on Mars?;true;Science doesn't know yet
//! ```
//!
//! Each data row holds one answer; rows sharing a question text accumulate
//! answers under a single question. Question order follows the first
//! occurrence of each question text, answer order follows the file.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::{Answer, Question};

/// Field separator for the question bank file.
const SEPARATOR: u8 = b';';

#[derive(Debug, Error)]
pub enum BankError {
    #[error("questions file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read questions file: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed questions file at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Load all questions from the bank file at `path`.
pub fn load_questions(path: &Path) -> Result<Vec<Question>, BankError> {
    if !path.exists() {
        return Err(BankError::NotFound(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(SEPARATOR)
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut questions: Vec<Question> = Vec::new();

    for (index, record) in reader.records().enumerate() {
        // Header is line 1, first data record line 2.
        let line = index + 2;
        let record = record?;

        if record.len() != 3 {
            return Err(BankError::Malformed {
                line,
                reason: format!("expected 3 fields, found {}", record.len()),
            });
        }

        let text = record[0].trim();
        let flag = record[1].trim();
        let answer_text = record[2].trim();

        if text.is_empty() {
            return Err(BankError::Malformed {
                line,
                reason: "empty question text".to_string(),
            });
        }

        let is_correct = match flag.to_ascii_lowercase().as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(BankError::Malformed {
                    line,
                    reason: format!("invalid correct-answer flag '{other}'"),
                });
            }
        };

        let answer = Answer::new(answer_text, is_correct);
        match questions.iter_mut().find(|q| q.text == text) {
            Some(question) => question.answers.push(answer),
            None => questions.push(Question::new(text, vec![answer])),
        }
    }

    Ok(questions)
}
