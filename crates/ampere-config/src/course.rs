use crate::bank::QuestionBank;
use crate::document::Document;
use crate::error::ConfigError;
use crate::page::Page;
use crate::warning::Warning;
use ampere_utils::loader::file::{File, FileHash};
use ampere_utils::loader::{FileStream, Filter, LoaderTrait};
use futures::StreamExt;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::Path;

/// Every page and question bank of a content tree, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct CourseConfig {
    pub pages: IndexMap<String, Page>,
    pub banks: IndexMap<String, QuestionBank>,
    seen: HashSet<FileHash>,
}

impl CourseConfig {
    #[must_use]
    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.get(id)
    }

    #[must_use]
    pub fn bank(&self, id: &str) -> Option<&QuestionBank> {
        self.banks.get(id)
    }

    pub fn insert(&mut self, key: &str, document: Document) -> Result<(), ConfigError> {
        let duplicate = |kind, id: &str| ConfigError::DuplicateId {
            kind,
            id: id.to_owned(),
            key: key.to_owned(),
        };
        match document {
            Document::Page(page) => {
                if self.pages.contains_key(&page.id) {
                    return Err(duplicate("page", &page.id));
                }
                self.pages.insert(page.id.clone(), page);
            }
            Document::Bank(bank) => {
                if self.banks.contains_key(&bank.id) {
                    return Err(duplicate("bank", &bank.id));
                }
                self.banks.insert(bank.id.clone(), bank);
            }
        }
        Ok(())
    }

    /// Parses and inserts one file. Returns `false` if a file with the same content was added
    /// before, so overlapping paths don't show up as duplicate ids.
    pub fn add(&mut self, file: &File) -> Result<bool, ConfigError> {
        if !self.seen.insert(file.metadata.hash.clone()) {
            tracing::warn!(key = file.key(), "skipping file with already loaded content");
            return Ok(false);
        }
        let document = Document::from_file(file).inspect_err(|err| {
            tracing::error!(key = file.key(), %err, "invalid content file");
        })?;
        tracing::trace!(key = file.key(), kind = document.kind(), id = document.id(), "loaded");
        self.insert(file.key(), document)?;
        Ok(true)
    }

    pub async fn collect(mut stream: FileStream<'_>) -> Result<Self, ConfigError> {
        let mut course = CourseConfig::default();
        while let Some(file) = stream.next().await {
            course.add(&file?)?;
        }
        Ok(course)
    }

    /// Warnings of every page and bank, next to the id of the document they belong to.
    #[must_use]
    pub fn warnings(&self) -> Vec<(&str, Warning)> {
        let pages = self.pages.values().flat_map(|p| p.warnings().into_iter().map(|w| (p.id.as_str(), w)));
        let banks = self.banks.values().flat_map(|b| b.warnings().into_iter().map(|w| (b.id.as_str(), w)));
        pages.chain(banks).collect()
    }

    pub async fn load<L: LoaderTrait>(loader: &L, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        tracing::debug!(path = ?path.as_ref(), "Loading course content");
        let course = Self::collect(loader.load_dir(path, Filter::Yaml)).await?;
        tracing::debug!(
            pages = course.pages.len(),
            banks = course.banks.len(),
            "loaded course content"
        );
        Ok(course)
    }
}
