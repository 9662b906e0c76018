use crate::quiz::error::QuizError;
use crate::quiz::score::Score;
use crate::quiz::{Answer, QuizSession};
use ampere_config::bank::{DifficultyDistribution, ExamConfig, QuestionBank};
use ampere_config::question::{Difficulty, Question};
use indexmap::IndexMap;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::collections::VecDeque;
use std::time::Duration;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    #[default]
    Uniform,
    /// Follow the difficulty distribution and spread each difficulty over the categories.
    Balanced,
}

/// Random selection of `min(n, len)` distinct questions.
pub fn draw_uniform<'a, R: Rng + ?Sized>(
    questions: &[&'a Question],
    n: usize,
    rng: &mut R,
) -> Vec<&'a Question> {
    let mut pool = questions.to_vec();
    pool.shuffle(rng);
    pool.truncate(n);
    pool
}

/// Draws `min(n, len)` distinct questions so that each difficulty gets its share of the
/// distribution. Inside a difficulty the listed categories take turns. Shortfalls are filled from
/// whatever is left, questions in the listed categories first.
pub fn draw_balanced<'a, R: Rng + ?Sized>(
    questions: &[&'a Question],
    n: usize,
    categories: &[String],
    distribution: &DifficultyDistribution,
    rng: &mut R,
) -> Vec<&'a Question> {
    let n = n.min(questions.len());
    let Some(quotas) = quotas(distribution, n) else {
        tracing::warn!(?distribution, "unusable difficulty distribution, drawing uniformly");
        return draw_uniform(questions, n, rng);
    };

    let mut pool = questions.to_vec();
    pool.shuffle(rng);
    let in_scope = |question: &Question| {
        categories.is_empty()
            || question
                .meta()
                .category
                .as_ref()
                .is_some_and(|category| categories.contains(category))
    };

    let mut picked = vec![false; pool.len()];
    let mut drawn = Vec::with_capacity(n);
    for (difficulty, quota) in quotas {
        let mut buckets: IndexMap<Option<&str>, VecDeque<usize>> = IndexMap::new();
        for (index, question) in pool.iter().enumerate() {
            if question.difficulty() == Some(difficulty) && in_scope(*question) {
                buckets
                    .entry(question.meta().category.as_deref())
                    .or_default()
                    .push_back(index);
            }
        }
        let taken = round_robin(buckets.into_values().collect(), quota);
        if taken.len() < quota {
            tracing::debug!(%difficulty, quota, available = taken.len(), "difficulty short of questions");
        }
        for index in taken {
            picked[index] = true;
            drawn.push(pool[index]);
        }
    }

    let (preferred, rest): (Vec<usize>, Vec<usize>) =
        (0..pool.len()).filter(|&i| !picked[i]).partition(|&i| in_scope(pool[i]));
    let missing = n - drawn.len();
    drawn.extend(preferred.into_iter().chain(rest).take(missing).map(|i| pool[i]));

    drawn.shuffle(rng);
    drawn
}

fn round_robin(mut buckets: Vec<VecDeque<usize>>, quota: usize) -> Vec<usize> {
    let mut taken = Vec::with_capacity(quota);
    while taken.len() < quota && buckets.iter().any(|bucket| !bucket.is_empty()) {
        for bucket in &mut buckets {
            if taken.len() == quota {
                break;
            }
            if let Some(index) = bucket.pop_front() {
                taken.push(index);
            }
        }
    }
    taken
}

/// Largest remainder split of `n` over the difficulties. `None` if the weights can't be used.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn quotas(distribution: &DifficultyDistribution, n: usize) -> Option<Vec<(Difficulty, usize)>> {
    if distribution.validate().is_err() {
        return None;
    }
    let total = distribution.total();
    let exact: Vec<(Difficulty, f64)> = Difficulty::iter()
        .map(|d| (d, distribution.weight(d) / total * n as f64))
        .collect();
    let mut quotas: Vec<(Difficulty, usize)> = exact.iter().map(|&(d, e)| (d, e.floor() as usize)).collect();

    let assigned: usize = quotas.iter().map(|(_, q)| q).sum();
    let mut order: Vec<usize> = (0..exact.len()).collect();
    order.sort_by(|&a, &b| {
        let fa = exact[a].1.fract();
        let fb = exact[b].1.fract();
        fb.total_cmp(&fa)
    });
    for &index in order.iter().take(n.saturating_sub(assigned)) {
        quotas[index].1 += 1;
    }
    Some(quotas)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExamResult {
    pub score: Score,
    pub passed: bool,
    pub elapsed: Duration,
    pub within_time_limit: bool,
}

/// A quiz drawn from a question bank, graded against the bank's pass threshold.
#[derive(Debug, Clone)]
pub struct ExamSession<'a> {
    config: ExamConfig,
    quiz: QuizSession<'a>,
}

impl<'a> ExamSession<'a> {
    /// Draws an exam from `bank`. `count` overrides the configured number of questions.
    pub fn draw<R: Rng + ?Sized>(
        bank: &'a QuestionBank,
        count: Option<usize>,
        strategy: Strategy,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        let config = bank.exam.clone().unwrap_or_default();
        let n = count.unwrap_or(config.total_questions);
        let questions: Vec<&Question> = bank.questions().collect();
        let drawn = match strategy {
            Strategy::Uniform => draw_uniform(&questions, n, rng),
            Strategy::Balanced => {
                let distribution = config.distribution.unwrap_or(DifficultyDistribution {
                    basic: 1.0,
                    intermediate: 1.0,
                    advanced: 1.0,
                });
                draw_balanced(&questions, n, &config.categories, &distribution, rng)
            }
        };
        tracing::info!(bank = %bank.id, requested = n, drawn = drawn.len(), ?strategy, "drew exam");
        Ok(Self {
            config,
            quiz: QuizSession::from_questions(&bank.title, drawn)?,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ExamConfig {
        &self.config
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizSession<'a> {
        &self.quiz
    }

    pub fn quiz_mut(&mut self) -> &mut QuizSession<'a> {
        &mut self.quiz
    }

    pub fn select(&mut self, question: usize, option: usize) -> Result<Answer, QuizError> {
        self.quiz.select(question, option)
    }

    pub fn reset(&mut self) {
        self.quiz.reset();
    }

    /// Grades the exam. `elapsed` is measured by the caller. `None` while questions are open.
    #[must_use]
    pub fn finish(&self, elapsed: Duration) -> Option<ExamResult> {
        let score = self.quiz.score()?;
        Some(ExamResult {
            score,
            passed: score.passed(self.config.pass_threshold),
            elapsed,
            within_time_limit: self.config.time_limit.is_none_or(|limit| elapsed <= limit),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ampere_config::question::{QuestionId, QuestionMeta};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn question(id: u64, difficulty: Difficulty, category: &str) -> Question {
        Question::new(
            id,
            format!("Question {id}"),
            vec!["A".into(), "B".into(), "C".into()],
            0,
            "A is right.",
        )
        .unwrap()
        .with_meta(QuestionMeta {
            difficulty: Some(difficulty),
            category: Some(category.to_owned()),
            ..QuestionMeta::default()
        })
    }

    fn bank() -> QuestionBank {
        let questions = [
            question(1, Difficulty::Basic, "Fundamentals"),
            question(2, Difficulty::Basic, "Fundamentals"),
            question(3, Difficulty::Intermediate, "Sensors"),
            question(4, Difficulty::Advanced, "Sensors"),
            question(5, Difficulty::Basic, "Sensors"),
        ];
        QuestionBank {
            id: "instrumentation".into(),
            title: "Instrumentation".into(),
            questions: questions.into_iter().map(|q| (q.id().clone(), q)).collect(),
            exam: Some(ExamConfig {
                total_questions: 4,
                time_limit: Some(Duration::from_secs(60)),
                pass_threshold: 60,
                categories: vec!["Fundamentals".into(), "Sensors".into()],
                distribution: Some(DifficultyDistribution {
                    basic: 0.5,
                    intermediate: 0.25,
                    advanced: 0.25,
                }),
            }),
        }
    }

    fn ids(questions: &[&Question]) -> HashSet<QuestionId> {
        questions.iter().map(|q| q.id().clone()).collect()
    }

    #[test]
    fn test_quotas() {
        let distribution = DifficultyDistribution {
            basic: 1.0,
            intermediate: 1.0,
            advanced: 1.0,
        };
        let quotas = quotas(&distribution, 10).unwrap();
        assert_eq!(
            quotas,
            [
                (Difficulty::Basic, 4),
                (Difficulty::Intermediate, 3),
                (Difficulty::Advanced, 3)
            ]
        );
        let invalid = DifficultyDistribution {
            basic: 0.0,
            intermediate: 0.0,
            advanced: 0.0,
        };
        assert!(super::quotas(&invalid, 10).is_none());
    }

    #[test]
    fn test_uniform_draw() {
        let bank = bank();
        let questions: Vec<&Question> = bank.questions().collect();
        let mut rng = StdRng::seed_from_u64(7);
        let drawn = draw_uniform(&questions, 3, &mut rng);
        assert_eq!(drawn.len(), 3);
        assert_eq!(ids(&drawn).len(), 3);
        assert_eq!(draw_uniform(&questions, 50, &mut rng).len(), 5);
    }

    #[test]
    fn test_same_seed_same_exam() {
        let bank = bank();
        let questions: Vec<&Question> = bank.questions().collect();
        let first = draw_uniform(&questions, 3, &mut StdRng::seed_from_u64(42));
        let second = draw_uniform(&questions, 3, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_balanced_draw_follows_distribution() {
        let bank = bank();
        let exam = bank.exam.as_ref().unwrap();
        let questions: Vec<&Question> = bank.questions().collect();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let drawn = draw_balanced(
                &questions,
                4,
                &exam.categories,
                exam.distribution.as_ref().unwrap(),
                &mut rng,
            );
            let drawn = ids(&drawn);
            assert_eq!(drawn.len(), 4);
            assert!(drawn.contains(&QuestionId::Number(3)));
            assert!(drawn.contains(&QuestionId::Number(4)));
            // the two basic questions come from different categories
            assert!(drawn.contains(&QuestionId::Number(5)));
            assert!(drawn.contains(&QuestionId::Number(1)) ^ drawn.contains(&QuestionId::Number(2)));
        }
    }

    #[test]
    fn test_balanced_draw_fills_shortfall() {
        let bank = bank();
        let questions: Vec<&Question> = bank.questions().collect();
        let advanced_only = DifficultyDistribution {
            basic: 0.0,
            intermediate: 0.0,
            advanced: 1.0,
        };
        let mut rng = StdRng::seed_from_u64(1);
        let drawn = draw_balanced(&questions, 3, &[], &advanced_only, &mut rng);
        assert_eq!(drawn.len(), 3);
        assert!(ids(&drawn).contains(&QuestionId::Number(4)));

        let everything = draw_balanced(&questions, 9, &[], &advanced_only, &mut rng);
        assert_eq!(ids(&everything).len(), 5);
    }

    #[test]
    fn test_balanced_draw_prefers_listed_categories() {
        let bank = bank();
        let questions: Vec<&Question> = bank.questions().collect();
        let basic_only = DifficultyDistribution {
            basic: 1.0,
            intermediate: 0.0,
            advanced: 0.0,
        };
        let mut rng = StdRng::seed_from_u64(3);
        let drawn = draw_balanced(&questions, 2, &["Fundamentals".to_owned()], &basic_only, &mut rng);
        assert_eq!(
            ids(&drawn),
            HashSet::from([QuestionId::Number(1), QuestionId::Number(2)])
        );
    }

    #[test_log::test]
    fn test_exam_session() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(11);
        let mut exam = ExamSession::draw(&bank, None, Strategy::Balanced, &mut rng).unwrap();
        assert_eq!(exam.quiz().len(), 4);
        assert_eq!(exam.finish(Duration::from_secs(10)), None);

        // option 0 is right everywhere, miss the last one: 3 of 4 passes at 60%
        for index in 0..3 {
            exam.select(index, 0).unwrap();
        }
        exam.select(3, 1).unwrap();
        let result = exam.finish(Duration::from_secs(90)).unwrap();
        assert_eq!(result.score, Score { correct: 3, total: 4 });
        assert!(result.passed);
        assert!(!result.within_time_limit);
        assert!(exam.finish(Duration::from_secs(60)).unwrap().within_time_limit);
    }

    #[test]
    fn test_exam_count_override() {
        let mut bank = bank();
        bank.exam = None;
        let mut rng = StdRng::seed_from_u64(5);
        let exam = ExamSession::draw(&bank, Some(2), Strategy::Uniform, &mut rng).unwrap();
        assert_eq!(exam.quiz().len(), 2);
        assert_eq!(exam.config().pass_threshold, 60);
        assert!(matches!(
            ExamSession::draw(&bank, Some(0), Strategy::Uniform, &mut rng),
            Err(QuizError::NoQuestions)
        ));
    }
}
