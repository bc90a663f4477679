use std::io::Cursor;

use studyhall_quiz::{
    ask_student, execute_quiz, run_session, show_result, Answer, Question, QuizResult, StreamIo,
    Student,
};

fn two_questions() -> Vec<Question> {
    vec![
        Question::new(
            "Random question 1?",
            vec![
                Answer::new("Random answer 11", true),
                Answer::new("Random answer 12", false),
            ],
        ),
        Question::new(
            "Random question 2?",
            vec![
                Answer::new("Random answer 21", false),
                Answer::new("Random answer 22", false),
                Answer::new("Random answer 23", true),
            ],
        ),
    ]
}

fn scripted(input: &str) -> StreamIo<Cursor<String>, Vec<u8>> {
    StreamIo::new(Cursor::new(input.to_string()), Vec::new())
}

fn captured(io: &StreamIo<Cursor<String>, Vec<u8>>) -> String {
    String::from_utf8(io.output().clone()).unwrap()
}

#[test]
fn ask_student_reads_first_and_last_name() {
    let mut io = scripted("John\nDoe\n");
    let student = ask_student(&mut io).unwrap();
    assert_eq!(student, Student::new("John", "Doe"));
}

#[test]
fn every_printed_question_is_answered_exactly_once() {
    let questions = two_questions();
    let mut io = scripted("1\n1\n");
    let result = execute_quiz(&mut io, &questions, Student::new("John", "Doe")).unwrap();

    assert_eq!(result.answered_count(), questions.len());

    let output = captured(&io);
    for (i, question) in questions.iter().enumerate() {
        assert!(output.contains(&format!("Question {}: {}", i + 1, question.text)));
        for (j, answer) in question.answers.iter().enumerate() {
            assert!(output.contains(&format!("{}) {}", j + 1, answer.text)));
        }
    }
}

#[test]
fn choosing_last_answers_scores_exactly_one() {
    // Two questions with 2 and 3 answers; the last answer is correct only
    // for the second question.
    let questions = two_questions();
    let mut io = scripted("2\n3\n");
    let result = execute_quiz(&mut io, &questions, Student::new("John", "Doe")).unwrap();

    assert_eq!(result.answered_count(), 2);
    assert_eq!(result.right_answers_count(), 1);
}

#[test]
fn invalid_answer_numbers_are_reprompted() {
    let questions = two_questions();
    // "0" and "7" are out of range for question 1, "x" is not a number.
    let mut io = scripted("0\n7\nx\n1\n3\n");
    let result = execute_quiz(&mut io, &questions, Student::new("John", "Doe")).unwrap();

    assert_eq!(result.answered_count(), 2);
    assert_eq!(result.right_answers_count(), 2);

    let output = captured(&io);
    assert_eq!(output.matches("Incorrect input number!").count(), 3);
}

#[test]
fn show_result_prints_summary_and_pass_verdict() {
    let mut result = QuizResult::new(Student::new("John", "Doe"));
    for _ in 0..3 {
        result.apply_answer(Question::new("q", vec![]), true);
    }

    let mut io = scripted("");
    show_result(&mut io, &result, 3).unwrap();

    let output = captured(&io);
    assert!(output.contains("Test results: "));
    assert!(output.contains("Student: John Doe"));
    assert!(output.contains("Answered questions count: 3"));
    assert!(output.contains("Right answers count: 3"));
    assert!(output.contains("Congratulations! You passed test!"));
}

#[test]
fn show_result_prints_fail_verdict_below_threshold() {
    let mut result = QuizResult::new(Student::new("John", "Doe"));
    result.apply_answer(Question::new("q1", vec![]), true);
    result.apply_answer(Question::new("q2", vec![]), false);

    let mut io = scripted("");
    show_result(&mut io, &result, 2).unwrap();

    assert!(captured(&io).contains("Sorry. You fail test."));
}

#[test]
fn run_session_wires_the_whole_dialog() {
    let questions = two_questions();
    let mut io = scripted("John\nDoe\n1\n3\n");
    let result = run_session(&mut io, &questions, 2).unwrap();

    assert_eq!(result.student().full_name(), "John Doe");
    assert_eq!(result.right_answers_count(), 2);

    let output = captured(&io);
    assert!(output.contains("Please answer the questions below"));
    assert!(output.contains("Congratulations! You passed test!"));
}

#[test]
fn session_fails_cleanly_when_input_ends_early() {
    let questions = two_questions();
    let mut io = scripted("John\nDoe\n1\n");
    assert!(run_session(&mut io, &questions, 2).is_err());
}
