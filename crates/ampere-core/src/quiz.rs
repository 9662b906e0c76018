use crate::quiz::error::QuizError;
use crate::quiz::question::{AnswerState, Selection};
use crate::quiz::score::Score;
use crate::view::{QuestionView, QuizView};
use ampere_config::page::QuizConfig;
use ampere_config::question::Question;

pub mod error;
pub mod question;
pub mod score;

/// Where a quiz stands after a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Pending { answered: usize, total: usize },
    /// This selection answered the last open question.
    Completed(Score),
    /// The quiz had been completed before this selection.
    AlreadyCompleted(Score),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer {
    pub selection: Selection,
    pub progress: Progress,
}

/// Interaction state of one quiz. Every question keeps its own lock-in state, the score exists
/// only once all of them are answered.
#[derive(Debug, Clone)]
pub struct QuizSession<'a> {
    title: &'a str,
    questions: Vec<&'a Question>,
    states: Vec<AnswerState>,
}

impl<'a> QuizSession<'a> {
    #[must_use]
    pub fn new(config: &'a QuizConfig) -> Self {
        let questions: Vec<&Question> = config.questions().collect();
        Self {
            title: config.title(),
            states: vec![AnswerState::Unanswered; questions.len()],
            questions,
        }
    }

    pub fn from_questions(title: &'a str, questions: Vec<&'a Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        Ok(Self {
            title,
            states: vec![AnswerState::Unanswered; questions.len()],
            questions,
        })
    }

    #[must_use]
    pub fn title(&self) -> &'a str {
        self.title
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&'a Question> {
        self.questions.get(index).copied()
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<AnswerState> {
        self.states.get(index).copied()
    }

    #[must_use]
    pub fn answered(&self) -> usize {
        self.states.iter().filter(|s| s.is_answered()).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.states.iter().all(|s| s.is_answered())
    }

    /// First question without an answer, for one-question-at-a-time presentation.
    #[must_use]
    pub fn next_unanswered(&self) -> Option<usize> {
        self.states.iter().position(|s| !s.is_answered())
    }

    pub fn select(&mut self, question: usize, option: usize) -> Result<Answer, QuizError> {
        let len = self.questions.len();
        let was_complete = self.is_complete();
        let (Some(q), Some(state)) = (self.questions.get(question), self.states.get_mut(question)) else {
            return Err(QuizError::QuestionOutOfRange { index: question, len });
        };
        let selection = state.select(q, option)?;
        let progress = match self.score() {
            Some(score) if was_complete => Progress::AlreadyCompleted(score),
            Some(score) => {
                tracing::debug!(quiz = self.title, %score, "quiz completed");
                Progress::Completed(score)
            }
            None => Progress::Pending {
                answered: self.answered(),
                total: len,
            },
        };
        Ok(Answer { selection, progress })
    }

    /// `None` until every question is answered.
    #[must_use]
    pub fn score(&self) -> Option<Score> {
        let mut correct = 0;
        for (question, state) in self.questions.iter().zip(&self.states) {
            if state.evaluate(question)?.is_correct {
                correct += 1;
            }
        }
        Some(Score {
            correct,
            total: self.questions.len(),
        })
    }

    /// Clears every answer at once.
    pub fn reset(&mut self) {
        self.states = vec![AnswerState::Unanswered; self.questions.len()];
    }

    #[must_use]
    pub fn view(&self, index: usize) -> Option<QuestionView<'a>> {
        let question = self.questions.get(index)?;
        Some(QuestionView::new(question, self.states[index], index + 1, self.len()))
    }

    #[must_use]
    pub fn views(&self) -> QuizView<'a> {
        QuizView {
            title: self.title,
            questions: (0..self.len()).filter_map(|i| self.view(i)).collect(),
            score: self.score(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::OptionMark;

    fn quiz(correct: &[usize]) -> QuizConfig {
        let questions = correct
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                Question::new(
                    i as u64 + 1,
                    format!("Question {}", i + 1),
                    vec!["A".into(), "B".into(), "C".into(), "D".into()],
                    c,
                    format!("Explanation {}", i + 1),
                )
                .unwrap()
            })
            .collect();
        QuizConfig::new("Section quiz", questions).unwrap()
    }

    fn wrong(correct: usize) -> usize {
        (correct + 1) % 4
    }

    #[test]
    fn test_fresh_session() {
        let config = quiz(&[0, 1, 2]);
        let session = QuizSession::new(&config);
        assert_eq!(session.len(), 3);
        assert_eq!(session.answered(), 0);
        assert_eq!(session.score(), None);
        assert_eq!(session.next_unanswered(), Some(0));
        let view = session.views();
        assert_eq!(view.score, None);
        assert!(view.questions.iter().all(|q| q.explanation.is_none()));
    }

    #[test]
    fn test_two_of_three() {
        let config = quiz(&[0, 1, 2]);
        let mut session = QuizSession::new(&config);
        let first = session.select(0, 0).unwrap();
        assert_eq!(first.progress, Progress::Pending { answered: 1, total: 3 });
        session.select(1, 3).unwrap();
        assert_eq!(session.score(), None);
        let last = session.select(2, 2).unwrap();
        let Progress::Completed(score) = last.progress else {
            panic!("expected the last answer to complete the quiz");
        };
        assert_eq!(score, Score { correct: 2, total: 3 });
        assert_eq!(score.to_string(), "2/3 (66.7%)");

        // re-clicks after completion don't move the score
        let again = session.select(1, 1).unwrap();
        assert!(again.selection.is_locked());
        assert_eq!(again.progress, Progress::AlreadyCompleted(score));
        assert_eq!(session.score(), Some(score));
    }

    #[test]
    fn test_score_for_every_combination() {
        let correct = [0, 3, 1, 2, 0];
        let config = quiz(&correct);
        for mask in 0..(1_u32 << correct.len()) {
            let mut session = QuizSession::new(&config);
            for (i, &c) in correct.iter().enumerate() {
                let option = if mask & (1 << i) != 0 { c } else { wrong(c) };
                session.select(i, option).unwrap();
            }
            let score = session.score().unwrap();
            assert_eq!(score.correct, mask.count_ones() as usize);
            assert_eq!(score.total, 5);
        }
    }

    #[test]
    fn test_all_correct_and_all_wrong() {
        let correct = [0, 1, 2, 3, 0, 1, 2, 3];
        let config = quiz(&correct);
        let mut right = QuizSession::new(&config);
        let mut wrong_session = QuizSession::new(&config);
        for (i, &c) in correct.iter().enumerate() {
            right.select(i, c).unwrap();
            wrong_session.select(i, wrong(c)).unwrap();
        }
        assert_eq!(right.score().unwrap().to_string(), "8/8 (100.0%)");
        assert_eq!(wrong_session.score().unwrap().to_string(), "0/8 (0.0%)");
    }

    #[test]
    fn test_lock_in_per_question() {
        let config = quiz(&[2, 2]);
        let mut session = QuizSession::new(&config);
        session.select(0, 1).unwrap();
        let answer = session.select(0, 2).unwrap();
        assert!(answer.selection.is_locked());
        assert!(!answer.selection.evaluation().is_correct);
        assert_eq!(answer.progress, Progress::Pending { answered: 1, total: 2 });
        assert_eq!(session.state(0), Some(AnswerState::Answered(1)));
        assert_eq!(session.next_unanswered(), Some(1));
    }

    #[test]
    fn test_errors() {
        let config = quiz(&[0]);
        let mut session = QuizSession::new(&config);
        assert_eq!(
            session.select(1, 0),
            Err(QuizError::QuestionOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(session.select(0, 9), Err(QuizError::OptionOutOfRange { index: 9, len: 4 }));
        assert_eq!(session.answered(), 0);
        assert_eq!(
            QuizSession::from_questions("empty", vec![]).unwrap_err(),
            QuizError::NoQuestions
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let config = quiz(&[0, 1]);
        let mut session = QuizSession::new(&config);
        session.select(0, 0).unwrap();
        session.select(1, 1).unwrap();
        assert!(session.is_complete());
        session.reset();
        assert_eq!(session.answered(), 0);
        assert_eq!(session.score(), None);
        let answer = session.select(0, 3).unwrap();
        assert!(!answer.selection.is_locked());
    }

    #[test]
    fn test_view_marks_correct_option_after_wrong_answer() {
        let config = quiz(&[2]);
        let mut session = QuizSession::new(&config);
        session.select(0, 0).unwrap();
        let view = session.view(0).unwrap();
        assert_eq!(view.header(), "Question 1 of 1");
        assert_eq!(view.marked(OptionMark::CorrectAnswer), [2]);
        assert_eq!(view.explanation, Some("Explanation 1"));
        assert!(session.view(1).is_none());
    }
}
