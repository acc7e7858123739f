mod csv;

pub use self::csv::write_csv;

use crate::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};

/// Where an export goes: a medium (directory) and a file name on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTarget {
    pub medium: PathBuf,
    pub file_name: String,
}

impl ExportTarget {
    pub fn new(medium: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            medium: medium.into(),
            file_name: file_name.into(),
        }
    }

    /// Split an explicit output path into medium and file name.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| AppError::WriteFailed {
                path: path.display().to_string(),
                reason: "not a file path".to_string(),
            })?;

        let medium = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Ok(Self { medium, file_name })
    }

    pub fn path(&self) -> PathBuf {
        self.medium.join(&self.file_name)
    }

    /// The medium must already be there; nothing gets created for it.
    pub fn ensure_medium(&self) -> AppResult<()> {
        if self.medium.is_dir() {
            Ok(())
        } else {
            Err(AppError::MediumUnavailable {
                medium: self.medium.display().to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_file_is_split() {
        let t = ExportTarget::from_file(Path::new("/tmp/out/sleep.csv")).unwrap();
        assert_eq!(t.medium, PathBuf::from("/tmp/out"));
        assert_eq!(t.file_name, "sleep.csv");
        assert_eq!(t.path(), PathBuf::from("/tmp/out/sleep.csv"));
    }

    #[test]
    fn bare_file_name_uses_current_dir() {
        let t = ExportTarget::from_file(Path::new("sleep.csv")).unwrap();
        assert_eq!(t.medium, PathBuf::from("."));
    }

    #[test]
    fn missing_medium_is_reported() {
        let t = ExportTarget::new("/definitely/not/mounted/sdcard", "sleeplogger.csv");
        assert!(matches!(
            t.ensure_medium(),
            Err(AppError::MediumUnavailable { .. })
        ));
    }
}
