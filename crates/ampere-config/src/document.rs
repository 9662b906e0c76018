use crate::bank::{self, QuestionBank};
use crate::error::ConfigError;
use crate::page::{self, Page};
use crate::warning::Warning;
use ampere_utils::loader::error::LoadingError;
use ampere_utils::loader::file::File;
use serde_yml::Value;

/// A parsed and validated content file.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Page(Page),
    Bank(QuestionBank),
}

impl Document {
    /// Parses a versioned page or bank document. The kind is taken from the top level key.
    pub fn parse(key: &str, content: &[u8]) -> Result<Self, ConfigError> {
        let value: Value = serde_yml::from_slice(content).map_err(|e| LoadingError::parse(key, e))?;
        let invalid = |source| ConfigError::Invalid {
            key: key.to_owned(),
            source,
        };
        if value.get("page").is_some() {
            let page::VersionConfig::V01 { page } =
                serde_yml::from_value(value).map_err(|e| LoadingError::parse(key, e))?;
            Ok(Document::Page(Page::try_from(page).map_err(invalid)?))
        } else if value.get("bank").is_some() {
            let bank::VersionConfig::V01 { bank } =
                serde_yml::from_value(value).map_err(|e| LoadingError::parse(key, e))?;
            Ok(Document::Bank(QuestionBank::try_from(bank).map_err(invalid)?))
        } else {
            Err(ConfigError::UnknownDocument { key: key.to_owned() })
        }
    }

    pub fn from_file(file: &File) -> Result<Self, ConfigError> {
        Self::parse(file.key(), &file.content)
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Document::Page(page) => &page.id,
            Document::Bank(bank) => &bank.id,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Document::Page(_) => "page",
            Document::Bank(_) => "bank",
        }
    }

    #[must_use]
    pub fn warnings(&self) -> Vec<Warning> {
        match self {
            Document::Page(page) => page.warnings(),
            Document::Bank(bank) => bank.warnings(),
        }
    }
}
