use crate::loader::error::LoadingError;
use crate::loader::file::File;
use futures::Stream;
use std::path::Path;
use std::pin::Pin;

pub mod error;
pub mod file;
pub mod file_system;

pub type FileStream<'a> = Pin<Box<dyn Stream<Item = Result<File, LoadingError>> + Send + 'a>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    Yaml,
    #[default]
    Any,
}

impl Filter {
    pub fn apply<P: AsRef<Path>>(&self, path: P) -> bool {
        let allowed_extensions: &[&str] = match self {
            Filter::Yaml => &["yaml", "yml"],
            Filter::Any => return true,
        };
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| allowed_extensions.contains(&ext))
    }
}

/// Source of course content files.
pub trait LoaderTrait {
    /// Recursively streams every file below `path` that passes `filter`.
    fn load_dir<'a, P: AsRef<Path>>(&'a self, path: P, filter: Filter) -> FileStream<'a>;

    fn load_file<P: AsRef<Path>>(&self, path: P) -> impl Future<Output = Result<File, LoadingError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_filter() {
        assert!(Filter::Yaml.apply("pages/coshh/section-1.yaml"));
        assert!(Filter::Yaml.apply("banks/instrumentation.yml"));
        assert!(!Filter::Yaml.apply("banks/instrumentation.json"));
        assert!(!Filter::Yaml.apply("README"));
        assert!(Filter::Any.apply("README"));
    }
}
