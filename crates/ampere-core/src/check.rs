use crate::quiz::error::QuizError;
use crate::quiz::question::{AnswerState, Evaluation, Selection};
use crate::view::QuestionView;
use ampere_config::page::InlineCheckConfig;

/// A single question embedded in a page. Feedback is immediate and the first answer is final.
#[derive(Debug, Clone)]
pub struct InlineCheck<'a> {
    config: &'a InlineCheckConfig,
    state: AnswerState,
}

impl<'a> InlineCheck<'a> {
    #[must_use]
    pub fn new(config: &'a InlineCheckConfig) -> Self {
        Self {
            config,
            state: AnswerState::Unanswered,
        }
    }

    #[must_use]
    pub fn id(&self) -> &'a str {
        &self.config.id
    }

    #[must_use]
    pub fn state(&self) -> AnswerState {
        self.state
    }

    pub fn select(&mut self, option: usize) -> Result<Selection, QuizError> {
        let selection = self.state.select(&self.config.question, option)?;
        if let Selection::Recorded(evaluation) = selection {
            tracing::debug!(check = self.id(), correct = evaluation.is_correct, "check answered");
        }
        Ok(selection)
    }

    #[must_use]
    pub fn evaluation(&self) -> Option<Evaluation> {
        self.state.evaluate(&self.config.question)
    }

    #[must_use]
    pub fn view(&self) -> QuestionView<'a> {
        QuestionView::new(&self.config.question, self.state, 1, 1)
    }
}
