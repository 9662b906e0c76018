use crate::question::QuestionId;
use crate::question::v01::{CheckV01, QuestionV01};
use ampere_utils::id_map::id_map;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PageV01 {
    /// # Unique identifier of the page
    pub id: String,
    /// # Title of the page
    pub title: String,
    #[serde(default)]
    #[serde(with = "id_map")]
    #[schemars(with = "Vec::<CheckV01>")]
    /// # Inline knowledge checks
    /// Single questions shown between the paragraphs of the page.
    pub checks: IndexMap<String, CheckV01>,
    #[serde(default)]
    /// # End of section quiz
    pub quiz: Option<QuizV01>,
}

#[derive(Deserialize, Debug, Clone, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct QuizV01 {
    /// # Title of the quiz
    pub title: String,
    #[serde(with = "id_map")]
    #[schemars(with = "Vec::<QuestionV01>")]
    /// # Questions in presentation order
    pub questions: IndexMap<QuestionId, QuestionV01>,
}
