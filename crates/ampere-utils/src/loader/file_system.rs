use crate::loader::error::LoadingError;
use crate::loader::file::File;
use crate::loader::{FileStream, Filter, LoaderTrait};
use async_stream::try_stream;
use async_walkdir::{DirEntry, Filtering, WalkDir};
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Clone, Debug, Default)]
pub struct FileSystemLoader {
    base_path: PathBuf,
}

impl FileSystemLoader {
    #[must_use]
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn sub_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return self.base_path.clone();
        }
        self.base_path.join(path)
    }

    /// Streams a mix of files and directories. Directories are walked with `filter`, files named
    /// explicitly are always loaded.
    pub fn load_paths<'a>(&'a self, paths: &'a [PathBuf], filter: Filter) -> FileStream<'a> {
        let stream = try_stream! {
            for path in paths {
                let full_path = self.sub_path(path);
                if fs::metadata(&full_path).await?.is_dir() {
                    let mut files = self.load_dir(path, filter);
                    while let Some(file) = files.next().await {
                        yield file?;
                    }
                } else {
                    yield self.load_file(path).await?;
                }
            }
        };
        Box::pin(stream)
    }
}

impl LoaderTrait for FileSystemLoader {
    fn load_dir<'a, P: AsRef<Path>>(&'a self, path: P, filter: Filter) -> FileStream<'a> {
        let path = self.sub_path(path);
        tracing::trace!(?path, "Loading dir");
        let mut walker = WalkDir::new(path).filter(move |entry| walk_filter(entry, filter));
        let stream = try_stream! {
            while let Some(entry) = walker.next().await {
                let entry = entry?;
                if entry.file_type().await?.is_file() {
                    let path = entry.path();
                    tracing::trace!(?path, "Loading file");
                    let data = fs::read(&path).await?;
                    yield File::new(path.to_string_lossy(), data);
                }
            }
        };
        Box::pin(stream)
    }

    async fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<File, LoadingError> {
        let path = self.sub_path(path);
        tracing::trace!(?path, "Loading file");
        if !fs::try_exists(&path).await? {
            return Err(LoadingError::InvalidPath(path));
        }
        let data = fs::read(&path).await?;
        Ok(File::new(path.to_string_lossy(), data))
    }
}

async fn walk_filter(entry: DirEntry, filter: Filter) -> Filtering {
    let Ok(ft) = entry.file_type().await else {
        tracing::warn!(path = ?entry.path(), "Could not get file type, skipping");
        return Filtering::Ignore;
    };
    if ft.is_dir() || filter.apply(entry.path()) {
        Filtering::Continue
    } else {
        Filtering::Ignore
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::TryStreamExt;
    use std::fs as std_fs;
    use test_log::test;

    fn content_tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std_fs::create_dir_all(dir.path().join("pages/coshh")).unwrap();
        std_fs::write(dir.path().join("pages/coshh/section-1.yaml"), "a: 1").unwrap();
        std_fs::write(dir.path().join("pages/coshh/notes.md"), "# notes").unwrap();
        std_fs::write(dir.path().join("pages/intro.yml"), "b: 2").unwrap();
        dir
    }

    #[test(tokio::test)]
    async fn test_load_dir_filters_yaml() {
        let dir = content_tree();
        let loader = FileSystemLoader::new(dir.path());
        let mut keys: Vec<String> = loader
            .load_dir("pages", Filter::Yaml)
            .map_ok(|file| file.metadata.key)
            .try_collect()
            .await
            .unwrap();
        keys.sort();
        assert_eq!(keys.len(), 2);
        assert!(keys[0].ends_with("section-1.yaml"));
        assert!(keys[1].ends_with("intro.yml"));
    }

    #[test(tokio::test)]
    async fn test_load_missing_file() {
        let dir = content_tree();
        let loader = FileSystemLoader::new(dir.path());
        let result = loader.load_file("pages/missing.yaml").await;
        assert!(matches!(result, Err(LoadingError::InvalidPath(_))));
        let file = loader.load_file("pages/intro.yml").await.unwrap();
        assert_eq!(file.content, b"b: 2");
    }

    #[test(tokio::test)]
    async fn test_load_paths_mixes_files_and_dirs() {
        let dir = content_tree();
        let loader = FileSystemLoader::new(dir.path());
        let paths = vec![PathBuf::from("pages/coshh"), PathBuf::from("pages/coshh/notes.md")];
        let files: Vec<File> = loader.load_paths(&paths, Filter::Yaml).try_collect().await.unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].key().ends_with("section-1.yaml"));
        assert_eq!(files[1].content, b"# notes");
    }
}
