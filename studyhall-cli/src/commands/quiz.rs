use std::path::PathBuf;

use studyhall_quiz::{load_questions, run_session, QuizConfig, StreamIo};

use crate::CliError;

/// Run one interactive quiz session on stdin/stdout.
pub(crate) fn run_quiz(config_path: Option<PathBuf>) -> Result<(), CliError> {
    let config = QuizConfig::load(config_path.as_deref())?;
    let bank_path = config.questions_file()?;
    log::debug!(
        "Quiz bank: {} (locale '{}', pass threshold {})",
        bank_path.display(),
        config.locale,
        config.right_answers_to_pass,
    );

    let questions = load_questions(&bank_path)?;
    if questions.is_empty() {
        log::warn!("Question bank {} is empty", bank_path.display());
        return Ok(());
    }

    let mut io = StreamIo::stdio();
    run_session(&mut io, &questions, config.right_answers_to_pass)?;
    Ok(())
}
