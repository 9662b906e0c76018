use crate::error::ValidationError;
use ampere_utils::id_map::ItemId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

pub mod v01;

/// Question ids are written either as numbers (question banks) or as slugs (inline checks).
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(untagged)]
pub enum QuestionId {
    Number(u64),
    Text(String),
}

impl Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionId::Number(n) => write!(f, "{n}"),
            QuestionId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for QuestionId {
    fn from(value: u64) -> Self {
        QuestionId::Number(value)
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        QuestionId::Text(value.to_owned())
    }
}

#[derive(
    Serialize,
    Deserialize,
    JsonSchema,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

/// Optional classification used when drawing mock exams from a bank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionMeta {
    pub section: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub topic: Option<String>,
    pub category: Option<String>,
}

/// A validated multiple-choice question. The option order is fixed at construction and is the
/// order used for display and for the correct index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: Vec<String>,
    correct: usize,
    explanation: String,
    meta: QuestionMeta,
}

impl Question {
    pub fn new(
        id: impl Into<QuestionId>,
        text: impl Into<String>,
        options: Vec<String>,
        correct: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyQuestion);
        }
        if options.len() < 2 {
            return Err(ValidationError::NotEnoughOptions { count: options.len() });
        }
        if correct >= options.len() {
            return Err(ValidationError::CorrectIndexOutOfRange {
                index: correct,
                len: options.len(),
            });
        }
        Ok(Self {
            id: id.into(),
            text,
            options,
            correct,
            explanation: explanation.into(),
            meta: QuestionMeta::default(),
        })
    }

    #[must_use]
    pub fn with_meta(mut self, meta: QuestionMeta) -> Self {
        self.meta = meta;
        self
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn meta(&self) -> &QuestionMeta {
        &self.meta
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.meta.difficulty
    }

    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct
    }

    /// Options that appear more than once. Learners can't tell those apart.
    #[must_use]
    pub fn duplicate_options(&self) -> Vec<&str> {
        let mut duplicates = Vec::new();
        for (i, option) in self.options.iter().enumerate() {
            if self.options[..i].contains(option) && !duplicates.contains(&option.as_str()) {
                duplicates.push(option.as_str());
            }
        }
        duplicates
    }
}

impl ItemId for Question {
    type IdType = QuestionId;

    fn id(&self) -> Self::IdType {
        self.id.clone()
    }
}
