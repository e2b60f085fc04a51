use crate::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Maps the optional source name from a request to a file on disk.
pub trait SourceResolver: Send + Sync {
    fn resolve(&self, name: Option<&str>) -> Result<PathBuf>;
}

/// Resolves plain file names under a fixed data directory.
pub struct DataDirResolver {
    data_dir: PathBuf,
    default_file: String,
}

impl DataDirResolver {
    pub fn new(data_dir: impl Into<PathBuf>, default_file: impl Into<String>) -> Self {
        DataDirResolver {
            data_dir: data_dir.into(),
            default_file: default_file.into(),
        }
    }
}

impl SourceResolver for DataDirResolver {
    fn resolve(&self, name: Option<&str>) -> Result<PathBuf> {
        let name = match name.filter(|it| !it.is_empty()) {
            Some(name) => name,
            None => self.default_file.as_str(),
        };
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(file_name)), None) => Ok(self.data_dir.join(file_name)),
            _ => Err(Error::InvalidInput(format!(
                "Source name must be a plain file name: {name}"
            ))),
        }
    }
}
