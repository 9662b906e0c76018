use crate::bank::{DEFAULT_PASS_THRESHOLD, DEFAULT_TOTAL_QUESTIONS, DifficultyDistribution};
use crate::question::QuestionId;
use crate::question::v01::QuestionV01;
use ampere_utils::id_map::id_map;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::Deserialize;

fn default_total_questions() -> usize {
    DEFAULT_TOTAL_QUESTIONS
}

fn default_pass_threshold() -> u8 {
    DEFAULT_PASS_THRESHOLD
}

#[derive(Deserialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct BankV01 {
    /// # Unique identifier of the question bank
    pub id: String,
    /// # Title of the bank, shown as the exam title
    pub title: String,
    #[serde(default)]
    /// # Mock exam settings
    pub exam: Option<ExamV01>,
    #[serde(with = "id_map")]
    #[schemars(with = "Vec::<QuestionV01>")]
    /// # Questions in the bank
    pub questions: IndexMap<QuestionId, QuestionV01>,
}

#[derive(Deserialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ExamV01 {
    #[serde(default = "default_total_questions")]
    /// # Number of questions drawn per exam
    pub total_questions: usize,
    #[serde(default)]
    /// # Time limit in seconds
    pub time_limit: Option<u64>,
    #[serde(default = "default_pass_threshold")]
    /// # Percentage needed to pass
    pub pass_threshold: u8,
    #[serde(default)]
    /// # Categories to spread the exam across
    pub categories: Vec<String>,
    #[serde(default)]
    /// # Share of basic, intermediate and advanced questions
    pub distribution: Option<DifficultyDistribution>,
}
