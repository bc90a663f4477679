//! Quiz domain types: questions, answers, students, and results.

/// One selectable answer to a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub is_correct: bool,
}

impl Answer {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }
}

/// A question with its ordered list of answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn new(text: impl Into<String>, answers: Vec<Answer>) -> Self {
        Self {
            text: text.into(),
            answers,
        }
    }
}

/// The student taking a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
}

impl Student {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Accumulated outcome of one quiz session.
///
/// Each applied answer records the question together with whether the
/// chosen answer was correct, so the right-answer count is always derived
/// from exactly what was applied.
#[derive(Debug, Clone)]
pub struct QuizResult {
    student: Student,
    answered: Vec<(Question, bool)>,
}

impl QuizResult {
    pub fn new(student: Student) -> Self {
        Self {
            student,
            answered: Vec::new(),
        }
    }

    /// Record the outcome for one question.
    pub fn apply_answer(&mut self, question: Question, is_correct: bool) {
        self.answered.push((question, is_correct));
    }

    pub fn student(&self) -> &Student {
        &self.student
    }

    /// Questions in application order.
    pub fn answered_questions(&self) -> Vec<&Question> {
        self.answered.iter().map(|(q, _)| q).collect()
    }

    pub fn answered_count(&self) -> usize {
        self.answered.len()
    }

    pub fn right_answers_count(&self) -> usize {
        self.answered.iter().filter(|(_, correct)| *correct).count()
    }
}
