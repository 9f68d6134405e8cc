use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use super::Resampler;
use crate::error::RegenError;

pub const DEFAULT_PROGRAM: &str = "sips";

/// Resamples through the macOS `sips` command line tool.
#[derive(Debug, Clone)]
pub struct SipsResampler {
    program: PathBuf,
}

impl SipsResampler {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        SipsResampler {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for SipsResampler {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl Resampler for SipsResampler {
    fn resample(&self, source: &Path, destination: &Path, width: u32, height: u32) -> Result<(), RegenError> {
        debug!(
            program = %self.program.display(),
            source = %source.display(),
            destination = %destination.display(),
            width,
            height,
            "running resize tool"
        );

        // sips takes height before width
        let output = Command::new(&self.program)
            .arg("--resampleHeightWidth")
            .arg(height.to_string())
            .arg(width.to_string())
            .arg(source)
            .arg("--out")
            .arg(destination)
            .output()
            .map_err(|e| RegenError::ToolNotFound {
                program: self.program.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(RegenError::ToolFailed {
                program: self.program.clone(),
                exit_code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        if !destination.is_file() {
            return Err(RegenError::OutputMissing(destination.to_path_buf()));
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "sips"
    }
}
