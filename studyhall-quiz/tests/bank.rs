use std::io::Write;
use std::path::PathBuf;

use studyhall_quiz::{load_questions, BankError};

fn write_bank(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    (dir, path)
}

const VALID_BANK: &str = "\
question;is_correct;answer
Is there life on Mars?;false;Certainly
Is there life on Mars?;true;Science doesn't know yet
How should resources be released?;true;try-with-resources
How should resources be released?;false;close() in finally
How should resources be released?;false;never
Which keyword creates an object?;true;new
";

#[test]
fn loads_questions_grouped_by_text() {
    let (_dir, path) = write_bank(VALID_BANK);
    let questions = load_questions(&path).unwrap();

    assert_eq!(questions.len(), 3);
    assert_eq!(questions[0].text, "Is there life on Mars?");
    assert_eq!(questions[0].answers.len(), 2);
    assert_eq!(questions[1].answers.len(), 3);
    assert_eq!(questions[2].answers.len(), 1);

    // Each question carries exactly one correct answer in this bank.
    for question in &questions {
        assert_eq!(
            question.answers.iter().filter(|a| a.is_correct).count(),
            1,
            "question '{}' should have one correct answer",
            question.text,
        );
    }
}

#[test]
fn answer_order_follows_the_file() {
    let (_dir, path) = write_bank(VALID_BANK);
    let questions = load_questions(&path).unwrap();

    let texts: Vec<_> = questions[1].answers.iter().map(|a| a.text.as_str()).collect();
    assert_eq!(texts, vec!["try-with-resources", "close() in finally", "never"]);
}

#[test]
fn missing_file_is_reported_as_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_file.csv");
    let result = load_questions(&path);
    assert!(matches!(result, Err(BankError::NotFound(p)) if p == path));
}

#[test]
fn bad_flag_is_a_parse_failure_with_line_number() {
    let (_dir, path) = write_bank(
        "question;is_correct;answer\nQ1?;yes;An answer\n",
    );
    match load_questions(&path) {
        Err(BankError::Malformed { line, reason }) => {
            assert_eq!(line, 2);
            assert!(reason.contains("yes"));
        }
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[test]
fn wrong_column_count_is_a_parse_failure() {
    let (_dir, path) = write_bank(
        "question;is_correct;answer\nQ1?;true;A;extra\n",
    );
    assert!(matches!(
        load_questions(&path),
        Err(BankError::Malformed { line: 2, .. })
    ));
}

#[test]
fn empty_bank_yields_no_questions() {
    let (_dir, path) = write_bank("question;is_correct;answer\n");
    assert!(load_questions(&path).unwrap().is_empty());
}
