use ampere_config::bank::QuestionBank;
use ampere_config::document::Document;
use ampere_config::page::Page;
use ampere_utils::loader::LoaderTrait;
use ampere_utils::loader::file_system::FileSystemLoader;
use anyhow::{Result, anyhow};
use std::path::Path;

pub(crate) async fn document(path: &Path) -> Result<Document> {
    let file = FileSystemLoader::default().load_file(path).await?;
    Ok(Document::from_file(&file)?)
}

pub(crate) async fn page(path: &Path) -> Result<Page> {
    match document(path).await? {
        Document::Page(page) => Ok(page),
        Document::Bank(bank) => Err(anyhow!("{} is the question bank `{}`, not a page", path.display(), bank.id)),
    }
}

pub(crate) async fn bank(path: &Path) -> Result<QuestionBank> {
    match document(path).await? {
        Document::Bank(bank) => Ok(bank),
        Document::Page(page) => Err(anyhow!("{} is the page `{}`, not a question bank", path.display(), page.id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    const PAGE: &str = "../ampere-config/test_configs/coshh-awareness.page.yaml";
    const BANK: &str = "../ampere-config/test_configs/instrumentation.bank.yaml";

    #[test(tokio::test)]
    async fn test_load_by_kind() {
        assert_eq!(page(Path::new(PAGE)).await.unwrap().id, "coshh-awareness-1-1");
        assert_eq!(bank(Path::new(BANK)).await.unwrap().id, "instrumentation");
        assert!(page(Path::new(BANK)).await.is_err());
        assert!(bank(Path::new("missing.yaml")).await.is_err());
    }
}
