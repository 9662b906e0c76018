use crate::bank::v01::{BankV01, ExamV01};
use crate::error::ValidationError;
use crate::question::{Difficulty, Question, QuestionId};
use crate::warning::{Warning, question_warnings};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub mod v01;

pub const DEFAULT_TOTAL_QUESTIONS: usize = 30;
pub const DEFAULT_PASS_THRESHOLD: u8 = 60;

#[derive(Deserialize, Debug, JsonSchema)]
#[serde(tag = "version")]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub enum VersionConfig {
    #[serde(rename = "0.1")]
    V01 { bank: BankV01 },
}

/// Relative share of each difficulty in a drawn exam. Weights don't have to sum to one.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct DifficultyDistribution {
    #[serde(default)]
    pub basic: f64,
    #[serde(default)]
    pub intermediate: f64,
    #[serde(default)]
    pub advanced: f64,
}

impl DifficultyDistribution {
    #[must_use]
    pub fn weight(&self, difficulty: Difficulty) -> f64 {
        match difficulty {
            Difficulty::Basic => self.basic,
            Difficulty::Intermediate => self.intermediate,
            Difficulty::Advanced => self.advanced,
        }
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.basic + self.intermediate + self.advanced
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let weights = [self.basic, self.intermediate, self.advanced];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) || self.total() <= 0.0 {
            return Err(ValidationError::InvalidDistribution);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExamConfig {
    pub total_questions: usize,
    pub time_limit: Option<Duration>,
    /// Percentage of correct answers needed to pass, 0 to 100.
    pub pass_threshold: u8,
    pub categories: Vec<String>,
    pub distribution: Option<DifficultyDistribution>,
}

impl Default for ExamConfig {
    fn default() -> Self {
        Self {
            total_questions: DEFAULT_TOTAL_QUESTIONS,
            time_limit: None,
            pass_threshold: DEFAULT_PASS_THRESHOLD,
            categories: Vec::new(),
            distribution: None,
        }
    }
}

impl TryFrom<ExamV01> for ExamConfig {
    type Error = ValidationError;

    fn try_from(v01: ExamV01) -> Result<Self, Self::Error> {
        if v01.total_questions == 0 {
            return Err(ValidationError::NoExamQuestions);
        }
        if v01.pass_threshold > 100 {
            return Err(ValidationError::PassThresholdOutOfRange(v01.pass_threshold));
        }
        if let Some(distribution) = &v01.distribution {
            distribution.validate()?;
        }
        Ok(Self {
            total_questions: v01.total_questions,
            time_limit: v01.time_limit.map(Duration::from_secs),
            pass_threshold: v01.pass_threshold,
            categories: v01.categories,
            distribution: v01.distribution,
        })
    }
}

/// Pool of questions that mock exams are drawn from.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBank {
    pub id: String,
    pub title: String,
    pub questions: IndexMap<QuestionId, Question>,
    pub exam: Option<ExamConfig>,
}

impl TryFrom<BankV01> for QuestionBank {
    type Error = ValidationError;

    fn try_from(v01: BankV01) -> Result<Self, Self::Error> {
        if v01.questions.is_empty() {
            return Err(ValidationError::EmptyBank);
        }
        let questions = v01
            .questions
            .into_values()
            .map(|q| Question::try_from(q).map(|q| (q.id().clone(), q)))
            .collect::<Result<IndexMap<_, _>, _>>()?;
        let exam = v01.exam.map(ExamConfig::try_from).transpose()?;
        Ok(Self {
            id: v01.id,
            title: v01.title,
            questions,
            exam,
        })
    }
}

impl QuestionBank {
    pub fn questions(&self) -> impl ExactSizeIterator<Item = &Question> {
        self.questions.values()
    }

    #[must_use]
    pub fn by_section(&self, section: &str) -> Vec<&Question> {
        self.questions()
            .filter(|q| q.meta().section.as_deref() == Some(section))
            .collect()
    }

    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&Question> {
        self.questions()
            .filter(|q| q.meta().category.as_deref() == Some(category))
            .collect()
    }

    #[must_use]
    pub fn warnings(&self) -> Vec<Warning> {
        let mut warnings: Vec<Warning> = self.questions().flat_map(question_warnings).collect();
        let Some(exam) = &self.exam else {
            warnings.push(Warning::NoExamConfig { bank: self.id.clone() });
            return warnings;
        };
        if exam.total_questions > self.questions.len() {
            warnings.push(Warning::ExamLargerThanBank {
                bank: self.id.clone(),
                requested: exam.total_questions,
                available: self.questions.len(),
            });
        }
        if exam.distribution.is_some() {
            let count = self.questions().filter(|q| q.difficulty().is_none()).count();
            if count > 0 {
                warnings.push(Warning::MissingDifficulty {
                    bank: self.id.clone(),
                    count,
                });
            }
        }
        if !exam.categories.is_empty() {
            for question in self.questions() {
                if let Some(category) = &question.meta().category
                    && !exam.categories.contains(category)
                {
                    warnings.push(Warning::UnknownCategory {
                        question: question.id().clone(),
                        category: category.clone(),
                    });
                }
            }
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;

    use super::*;

    fn load_bank() -> QuestionBank {
        let bank_file = read_to_string("test_configs/instrumentation.bank.yaml").unwrap();
        let VersionConfig::V01 { bank } = serde_yml::from_str::<VersionConfig>(&bank_file).unwrap();
        QuestionBank::try_from(bank).unwrap()
    }

    #[test]
    fn test_bank_loading() {
        let bank = load_bank();
        assert_eq!(bank.questions.len(), 5);
        let exam = bank.exam.as_ref().unwrap();
        assert_eq!(exam.total_questions, 4);
        assert_eq!(exam.time_limit, Some(Duration::from_secs(2700)));
        assert_eq!(exam.pass_threshold, 60);
        assert!(bank.warnings().is_empty());
    }

    #[test]
    fn test_filters() {
        let bank = load_bank();
        assert_eq!(bank.by_section("Module 2").len(), 3);
        assert_eq!(bank.by_category("Fundamentals").len(), 2);
        assert!(bank.by_category("Fault Finding").is_empty());
    }

    #[test]
    fn test_exam_defaults() {
        let exam: ExamV01 = serde_yml::from_str("{}").unwrap();
        let exam = ExamConfig::try_from(exam).unwrap();
        assert_eq!(exam.total_questions, 30);
        assert_eq!(exam.pass_threshold, 60);
        assert_eq!(exam.time_limit, None);
        assert_eq!(exam, ExamConfig::default());
    }

    #[test]
    fn test_exam_validation() {
        let exam: ExamV01 = serde_yml::from_str("pass-threshold: 101").unwrap();
        assert_eq!(
            ExamConfig::try_from(exam),
            Err(ValidationError::PassThresholdOutOfRange(101))
        );
        let exam: ExamV01 = serde_yml::from_str("total-questions: 0").unwrap();
        assert_eq!(ExamConfig::try_from(exam), Err(ValidationError::NoExamQuestions));
        let exam: ExamV01 = serde_yml::from_str("distribution: { basic: 0, advanced: -1 }").unwrap();
        assert_eq!(ExamConfig::try_from(exam), Err(ValidationError::InvalidDistribution));
    }

    #[test]
    fn test_warnings() {
        let mut bank = load_bank();
        if let Some(exam) = bank.exam.as_mut() {
            exam.total_questions = 10;
            exam.categories = vec!["Fundamentals".to_owned()];
        }
        let warnings = bank.warnings();
        assert!(warnings.contains(&Warning::ExamLargerThanBank {
            bank: "instrumentation".to_owned(),
            requested: 10,
            available: 5,
        }));
        let unknown = warnings
            .iter()
            .filter(|w| matches!(w, Warning::UnknownCategory { .. }))
            .count();
        assert_eq!(unknown, 3);

        bank.exam = None;
        assert_eq!(
            bank.warnings(),
            [Warning::NoExamConfig {
                bank: "instrumentation".to_owned()
            }]
        );
    }
}
