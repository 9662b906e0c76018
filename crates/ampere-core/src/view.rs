//! Render-ready snapshots of a question's state. Front ends only decide how each mark looks.

use crate::quiz::question::AnswerState;
use crate::quiz::score::Score;
use ampere_config::question::{Question, QuestionId};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionMark {
    Plain,
    SelectedCorrect,
    SelectedIncorrect,
    /// The right answer, shown after a wrong selection.
    CorrectAnswer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView<'a> {
    pub index: usize,
    pub text: &'a str,
    pub mark: OptionMark,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView<'a> {
    pub id: &'a QuestionId,
    /// 1 based position, as in "Question 3 of 8".
    pub number: usize,
    pub total: usize,
    pub question: &'a str,
    pub options: Vec<OptionView<'a>>,
    pub explanation: Option<&'a str>,
    pub outcome: Option<Outcome>,
}

impl<'a> QuestionView<'a> {
    #[must_use]
    pub fn new(question: &'a Question, state: AnswerState, number: usize, total: usize) -> Self {
        let selected = state.selected();
        let outcome = selected.map(|s| {
            if question.is_correct(s) {
                Outcome::Correct
            } else {
                Outcome::Incorrect
            }
        });
        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let mark = match selected {
                    None => OptionMark::Plain,
                    Some(s) if s == index && question.is_correct(index) => OptionMark::SelectedCorrect,
                    Some(s) if s == index => OptionMark::SelectedIncorrect,
                    Some(_) if question.is_correct(index) => OptionMark::CorrectAnswer,
                    Some(_) => OptionMark::Plain,
                };
                OptionView { index, text, mark }
            })
            .collect();
        Self {
            id: question.id(),
            number,
            total,
            question: question.text(),
            options,
            explanation: selected.map(|_| question.explanation()),
            outcome,
        }
    }

    #[must_use]
    pub fn header(&self) -> String {
        format!("Question {} of {}", self.number, self.total)
    }

    #[must_use]
    pub fn marked(&self, mark: OptionMark) -> Vec<usize> {
        self.options
            .iter()
            .filter(|o| o.mark == mark)
            .map(|o| o.index)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizView<'a> {
    pub title: &'a str,
    pub questions: Vec<QuestionView<'a>>,
    /// Only present once every question is answered.
    pub score: Option<Score>,
}
