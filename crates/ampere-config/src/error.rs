use ampere_utils::loader::error::LoadingError;
use thiserror::Error;

/// Authoring defects in question data. Any of these makes a page or bank unusable.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("question text is empty")]
    EmptyQuestion,
    #[error("a question needs at least 2 options, got {count}")]
    NotEnoughOptions { count: usize },
    #[error("correct option index {index} is out of range for {len} options")]
    CorrectIndexOutOfRange { index: usize, len: usize },
    #[error("quiz has no questions")]
    EmptyQuiz,
    #[error("question id `{0}` is used more than once")]
    DuplicateQuestionId(String),
    #[error("question bank has no questions")]
    EmptyBank,
    #[error("page has neither inline checks nor a quiz")]
    EmptyPage,
    #[error("pass threshold {0}% is above 100%")]
    PassThresholdOutOfRange(u8),
    #[error("an exam must draw at least one question")]
    NoExamQuestions,
    #[error("difficulty distribution weights must be non-negative and sum to more than zero")]
    InvalidDistribution,
    #[error("question `{id}`: {source}")]
    InQuestion {
        id: String,
        source: Box<ValidationError>,
    },
    #[error("inline check `{id}`: {source}")]
    InCheck {
        id: String,
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    pub(crate) fn in_question(id: impl ToString) -> impl FnOnce(ValidationError) -> ValidationError {
        move |source| ValidationError::InQuestion {
            id: id.to_string(),
            source: Box::new(source),
        }
    }

    pub(crate) fn in_check(id: impl ToString) -> impl FnOnce(ValidationError) -> ValidationError {
        move |source| ValidationError::InCheck {
            id: id.to_string(),
            source: Box::new(source),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Loading(#[from] LoadingError),

    #[error("invalid content in {key}: {source}")]
    Invalid { key: String, source: ValidationError },

    #[error("{key} is neither a `page` nor a `bank` document")]
    UnknownDocument { key: String },

    #[error("duplicate {kind} id `{id}` in {key}")]
    DuplicateId { kind: &'static str, id: String, key: String },
}
