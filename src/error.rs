use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for image regeneration.
#[derive(Debug)]
pub enum RegenError {
    ManifestRead { path: PathBuf, source: io::Error },
    ManifestParse { path: PathBuf, reason: String },
    MissingImageEntry { path: PathBuf, index: usize, count: usize },
    MissingFilename { path: PathBuf, index: usize },
    SourceImageMissing(PathBuf),
    ToolNotFound { program: PathBuf, source: io::Error },
    ToolFailed { program: PathBuf, exit_code: Option<i32>, stderr: String },
    OutputMissing(PathBuf),
    ImageFailed { path: PathBuf, reason: String },
}

impl fmt::Display for RegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegenError::ManifestRead { path, source } => {
                write!(f, "failed to read manifest '{}': {}", path.display(), source)
            }
            RegenError::ManifestParse { path, reason } => {
                write!(f, "malformed manifest '{}': {}", path.display(), reason)
            }
            RegenError::MissingImageEntry { path, index, count } => {
                write!(
                    f,
                    "manifest '{}' has no image entry at index {} ({} entries)",
                    path.display(),
                    index,
                    count
                )
            }
            RegenError::MissingFilename { path, index } => {
                write!(
                    f,
                    "image entry {} in manifest '{}' has no filename",
                    index,
                    path.display()
                )
            }
            RegenError::SourceImageMissing(path) => {
                write!(f, "source image not found: {}", path.display())
            }
            RegenError::ToolNotFound { program, source } => {
                write!(f, "failed to run '{}': {}", program.display(), source)
            }
            RegenError::ToolFailed {
                program,
                exit_code,
                stderr,
            } => {
                match exit_code {
                    Some(code) => write!(f, "'{}' exited with code {}", program.display(), code)?,
                    None => write!(f, "'{}' was terminated by a signal", program.display())?,
                }
                let stderr = stderr.trim();
                if !stderr.is_empty() {
                    write!(f, ": {}", stderr)?;
                }
                Ok(())
            }
            RegenError::OutputMissing(path) => {
                write!(f, "resize reported success but did not write {}", path.display())
            }
            RegenError::ImageFailed { path, reason } => {
                write!(f, "image processing failed for '{}': {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for RegenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegenError::ManifestRead { source, .. } => Some(source),
            RegenError::ToolNotFound { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_failed_includes_trimmed_stderr() {
        let err = RegenError::ToolFailed {
            program: PathBuf::from("sips"),
            exit_code: Some(13),
            stderr: "Error: unable to open\n".to_string(),
        };

        assert_eq!(err.to_string(), "'sips' exited with code 13: Error: unable to open");
    }

    #[test]
    fn tool_failed_without_stderr() {
        let err = RegenError::ToolFailed {
            program: PathBuf::from("sips"),
            exit_code: None,
            stderr: String::new(),
        };

        assert_eq!(err.to_string(), "'sips' was terminated by a signal");
    }

    #[test]
    fn manifest_read_exposes_io_source() {
        let err = RegenError::ManifestRead {
            path: PathBuf::from("Contents.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };

        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("Contents.json"));
    }
}
