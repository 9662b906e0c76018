use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("option {index} does not exist, the question has {len} options")]
    OptionOutOfRange { index: usize, len: usize },

    #[error("question {index} does not exist, the quiz has {len} questions")]
    QuestionOutOfRange { index: usize, len: usize },

    #[error("a quiz needs at least one question")]
    NoQuestions,
}
