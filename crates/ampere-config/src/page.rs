use crate::error::ValidationError;
use crate::page::v01::{PageV01, QuizV01};
use crate::question::v01::CheckV01;
use crate::question::{Question, QuestionId};
use crate::warning::{Warning, question_warnings};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::Deserialize;
use std::collections::HashSet;

pub mod v01;

#[derive(Deserialize, Debug, JsonSchema)]
#[serde(tag = "version")]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub enum VersionConfig {
    #[serde(rename = "0.1")]
    V01 { page: PageV01 },
}

/// A single question embedded in the page prose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineCheckConfig {
    pub id: String,
    pub question: Question,
}

impl TryFrom<CheckV01> for InlineCheckConfig {
    type Error = ValidationError;

    fn try_from(v01: CheckV01) -> Result<Self, Self::Error> {
        let question = Question::new(
            v01.id.as_str(),
            v01.question,
            v01.options,
            v01.correct_index,
            v01.explanation,
        )
        .map_err(ValidationError::in_check(&v01.id))?;
        Ok(Self { id: v01.id, question })
    }
}

/// An ordered, non-empty set of questions graded together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    title: String,
    questions: IndexMap<QuestionId, Question>,
}

impl QuizConfig {
    /// Question ids must be unique by their written form, so `1` and `"1"` collide.
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Result<Self, ValidationError> {
        if questions.is_empty() {
            return Err(ValidationError::EmptyQuiz);
        }
        let mut map = IndexMap::with_capacity(questions.len());
        let mut seen = HashSet::with_capacity(questions.len());
        for question in questions {
            let id = question.id().to_string();
            if !seen.insert(id.clone()) {
                return Err(ValidationError::DuplicateQuestionId(id));
            }
            map.insert(question.id().clone(), question);
        }
        Ok(Self {
            title: title.into(),
            questions: map,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn questions(&self) -> impl ExactSizeIterator<Item = &Question> {
        self.questions.values()
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get_index(index).map(|(_, q)| q)
    }

    #[must_use]
    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl TryFrom<QuizV01> for QuizConfig {
    type Error = ValidationError;

    fn try_from(v01: QuizV01) -> Result<Self, Self::Error> {
        let questions = v01
            .questions
            .into_values()
            .map(Question::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        QuizConfig::new(v01.title, questions)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: String,
    pub title: String,
    pub checks: IndexMap<String, InlineCheckConfig>,
    pub quiz: Option<QuizConfig>,
}

impl TryFrom<PageV01> for Page {
    type Error = ValidationError;

    fn try_from(v01: PageV01) -> Result<Self, Self::Error> {
        if v01.checks.is_empty() && v01.quiz.is_none() {
            return Err(ValidationError::EmptyPage);
        }
        let checks = v01
            .checks
            .into_values()
            .map(|check| InlineCheckConfig::try_from(check).map(|c| (c.id.clone(), c)))
            .collect::<Result<IndexMap<_, _>, _>>()?;
        let quiz = v01.quiz.map(QuizConfig::try_from).transpose()?;
        Ok(Self {
            id: v01.id,
            title: v01.title,
            checks,
            quiz,
        })
    }
}

impl Page {
    #[must_use]
    pub fn check(&self, id: &str) -> Option<&InlineCheckConfig> {
        self.checks.get(id)
    }

    #[must_use]
    pub fn warnings(&self) -> Vec<Warning> {
        let checks = self.checks.values().map(|c| &c.question);
        let quiz = self.quiz.iter().flat_map(QuizConfig::questions);
        checks.chain(quiz).flat_map(question_warnings).collect()
    }
}
