use std::borrow::Cow;
use xxhash_rust::xxh3::xxh3_64;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileHash {
    pub hash: String,
    pub algorithm: Cow<'static, str>,
}

impl FileHash {
    #[must_use]
    pub fn of(content: &[u8]) -> Self {
        Self {
            hash: hex::encode(xxh3_64(content).to_le_bytes()),
            algorithm: "xxh3_64".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub key: String,
    pub hash: FileHash,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub metadata: FileMetadata,
    pub content: Vec<u8>,
}

impl File {
    #[must_use]
    pub fn new(key: impl Into<String>, content: Vec<u8>) -> Self {
        let hash = FileHash::of(&content);
        File {
            metadata: FileMetadata { key: key.into(), hash },
            content,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.metadata.key
    }
}
