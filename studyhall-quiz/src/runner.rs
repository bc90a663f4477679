//! Quiz session flow: student prompt, question loop, result display.

use std::io;

use crate::io::{read_int_for_range, Io};
use crate::types::{Question, QuizResult, Student};

const ANSWER_PROMPT: &str = "Please enter the number of correct answer";
const ANSWER_ERROR: &str = "Incorrect input number!";

/// Prompt for the student's first and last name.
pub fn ask_student(io: &mut impl Io) -> io::Result<Student> {
    let first_name = io.read_line("Please input your first name: ")?;
    let last_name = io.read_line("Please input your last name: ")?;
    Ok(Student::new(first_name, last_name))
}

/// Run the question loop for one student and return the scored result.
///
/// Every printed question gets exactly one applied answer, so the result
/// records as many answers as questions were shown.
pub fn execute_quiz(
    io: &mut impl Io,
    questions: &[Question],
    student: Student,
) -> io::Result<QuizResult> {
    io.print_line("")?;
    io.print_line("Please answer the questions below")?;
    io.print_line("")?;

    let mut result = QuizResult::new(student);

    for (index, question) in questions.iter().enumerate() {
        print_question_with_answers(io, question, index + 1)?;

        let max = question.answers.len() as u32;
        let chosen = read_int_for_range(io, 1, max, ANSWER_PROMPT, ANSWER_ERROR)?;
        io.print_line("")?;

        let is_correct = question.answers[(chosen - 1) as usize].is_correct;
        result.apply_answer(question.clone(), is_correct);
    }

    Ok(result)
}

/// Print the final results and the pass/fail verdict.
pub fn show_result(io: &mut impl Io, result: &QuizResult, pass_threshold: u32) -> io::Result<()> {
    io.print_line("Test results: ")?;
    io.print_line(&format!("Student: {}", result.student().full_name()))?;
    io.print_line(&format!(
        "Answered questions count: {}",
        result.answered_count(),
    ))?;
    io.print_line(&format!(
        "Right answers count: {}",
        result.right_answers_count(),
    ))?;

    if result.right_answers_count() as u32 >= pass_threshold {
        io.print_line("Congratulations! You passed test!")?;
    } else {
        io.print_line("Sorry. You fail test.")?;
    }
    Ok(())
}

/// Full session: student prompt, question loop, result display.
pub fn run_session(
    io: &mut impl Io,
    questions: &[Question],
    pass_threshold: u32,
) -> io::Result<QuizResult> {
    let student = ask_student(io)?;
    let result = execute_quiz(io, questions, student)?;
    show_result(io, &result, pass_threshold)?;
    Ok(result)
}

fn print_question_with_answers(
    io: &mut impl Io,
    question: &Question,
    order: usize,
) -> io::Result<()> {
    io.print_line(&format!("Question {}: {}", order, question.text))?;
    for (index, answer) in question.answers.iter().enumerate() {
        io.print_line(&format!("{}) {}", index + 1, answer.text))?;
    }
    Ok(())
}
