use crate::question::{Question, QuestionId};
use std::fmt::{self, Display};

/// Content that is usable but probably not what the author meant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    DuplicateOptions { question: QuestionId, options: Vec<String> },
    EmptyExplanation { question: QuestionId },
    NoExamConfig { bank: String },
    ExamLargerThanBank { bank: String, requested: usize, available: usize },
    MissingDifficulty { bank: String, count: usize },
    UnknownCategory { question: QuestionId, category: String },
}

impl Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::DuplicateOptions { question, options } => {
                write!(f, "question `{question}` repeats options {options:?}")
            }
            Warning::EmptyExplanation { question } => {
                write!(f, "question `{question}` has no explanation")
            }
            Warning::NoExamConfig { bank } => write!(f, "bank `{bank}` has no exam configuration"),
            Warning::ExamLargerThanBank {
                bank,
                requested,
                available,
            } => write!(
                f,
                "bank `{bank}` exam draws {requested} questions but only {available} exist"
            ),
            Warning::MissingDifficulty { bank, count } => write!(
                f,
                "bank `{bank}` sets a difficulty distribution but {count} questions have no difficulty"
            ),
            Warning::UnknownCategory { question, category } => {
                write!(f, "question `{question}` uses category `{category}` not listed in the exam")
            }
        }
    }
}

pub(crate) fn question_warnings(question: &Question) -> Vec<Warning> {
    let mut warnings = Vec::new();
    let duplicates = question.duplicate_options();
    if !duplicates.is_empty() {
        warnings.push(Warning::DuplicateOptions {
            question: question.id().clone(),
            options: duplicates.into_iter().map(str::to_owned).collect(),
        });
    }
    if question.explanation().trim().is_empty() {
        warnings.push(Warning::EmptyExplanation {
            question: question.id().clone(),
        });
    }
    warnings
}
