use crate::error::ValidationError;
use crate::question::{Difficulty, Question, QuestionId, QuestionMeta};
use ampere_utils::id_map::ItemId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct QuestionV01 {
    /// # Unique identifier of the question
    /// Unique within the quiz or question bank it belongs to.
    pub id: QuestionId,
    /// # The question text
    pub question: String,
    /// # Answer options
    /// Shown in this order. At least two.
    pub options: Vec<String>,
    /// # Zero based index of the correct option
    #[serde(alias = "correct-index")]
    pub correct_answer: usize,
    /// # Explanation shown after answering
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ItemId for QuestionV01 {
    type IdType = QuestionId;

    fn id(&self) -> Self::IdType {
        self.id.clone()
    }
}

impl TryFrom<QuestionV01> for Question {
    type Error = ValidationError;

    fn try_from(v01: QuestionV01) -> Result<Self, Self::Error> {
        let id = v01.id.clone();
        Question::new(v01.id, v01.question, v01.options, v01.correct_answer, v01.explanation)
            .map(|question| {
                question.with_meta(QuestionMeta {
                    section: v01.section,
                    difficulty: v01.difficulty,
                    topic: v01.topic,
                    category: v01.category,
                })
            })
            .map_err(ValidationError::in_question(id))
    }
}

/// Inline knowledge check as written inside a page.
#[derive(Serialize, Deserialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct CheckV01 {
    /// # Unique identifier of the check within its page
    pub id: String,
    /// # The question text
    pub question: String,
    /// # Answer options
    pub options: Vec<String>,
    /// # Zero based index of the correct option
    #[serde(alias = "correct-answer")]
    pub correct_index: usize,
    /// # Explanation shown after answering
    pub explanation: String,
}

impl ItemId for CheckV01 {
    type IdType = String;

    fn id(&self) -> Self::IdType {
        self.id.clone()
    }
}
