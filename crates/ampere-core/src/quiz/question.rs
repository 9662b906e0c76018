use crate::quiz::error::QuizError;
use ampere_config::question::Question;
use serde::Serialize;

/// Interaction state of one question. The only transition is `Unanswered` to `Answered`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "selected")]
pub enum AnswerState {
    #[default]
    Unanswered,
    Answered(usize),
}

impl AnswerState {
    #[must_use]
    pub fn selected(self) -> Option<usize> {
        match self {
            AnswerState::Unanswered => None,
            AnswerState::Answered(selected) => Some(selected),
        }
    }

    #[must_use]
    pub fn is_answered(self) -> bool {
        matches!(self, AnswerState::Answered(_))
    }

    #[must_use]
    pub fn evaluate(self, question: &Question) -> Option<Evaluation> {
        self.selected().map(|selected| Evaluation::of(question, selected))
    }

    /// Records `option` if nothing was recorded yet. Later selections leave the first one in place.
    pub fn select(&mut self, question: &Question, option: usize) -> Result<Selection, QuizError> {
        let len = question.options().len();
        if option >= len {
            return Err(QuizError::OptionOutOfRange { index: option, len });
        }
        match *self {
            AnswerState::Answered(first) => Ok(Selection::Locked(Evaluation::of(question, first))),
            AnswerState::Unanswered => {
                *self = AnswerState::Answered(option);
                Ok(Selection::Recorded(Evaluation::of(question, option)))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub selected: usize,
    pub correct: usize,
    pub is_correct: bool,
}

impl Evaluation {
    #[must_use]
    pub fn of(question: &Question, selected: usize) -> Self {
        Self {
            selected,
            correct: question.correct(),
            is_correct: question.is_correct(selected),
        }
    }
}

/// Result of clicking an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The click was the first answer and has been recorded.
    Recorded(Evaluation),
    /// The question was already answered; the evaluation is the one of the first answer.
    Locked(Evaluation),
}

impl Selection {
    #[must_use]
    pub fn evaluation(&self) -> Evaluation {
        match self {
            Selection::Recorded(evaluation) | Selection::Locked(evaluation) => *evaluation,
        }
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        matches!(self, Selection::Locked(_))
    }
}
