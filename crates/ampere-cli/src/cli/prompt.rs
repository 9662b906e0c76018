use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, PromptViMode};
use std::borrow::Cow;

/// Prompt showing where the learner is, e.g. `3/8〉`.
#[derive(Clone, Default)]
pub struct AnswerPrompt {
    position: String,
}

pub static DEFAULT_PROMPT_INDICATOR: &str = "〉";
pub static DEFAULT_VI_INSERT_PROMPT_INDICATOR: &str = ": ";
pub static DEFAULT_MULTILINE_INDICATOR: &str = "::: ";

impl AnswerPrompt {
    pub fn new(position: impl Into<String>) -> Self {
        Self {
            position: position.into(),
        }
    }
}

impl Prompt for AnswerPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.position)
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::from("")
    }

    fn render_prompt_indicator(&self, prompt_mode: PromptEditMode) -> Cow<'_, str> {
        match prompt_mode {
            PromptEditMode::Default | PromptEditMode::Emacs | PromptEditMode::Vi(PromptViMode::Normal) => {
                DEFAULT_PROMPT_INDICATOR.into()
            }
            PromptEditMode::Vi(PromptViMode::Insert) => DEFAULT_VI_INSERT_PROMPT_INDICATOR.into(),
            PromptEditMode::Custom(str) => format!("({str})").into(),
        }
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(DEFAULT_MULTILINE_INDICATOR)
    }

    fn render_prompt_history_search_indicator(&self, history_search: PromptHistorySearch) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!("({prefix}search) \"{}\": ", history_search.term))
    }
}
