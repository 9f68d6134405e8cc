use std::path::Path;

use image::imageops::FilterType;
use tracing::debug;

use super::Resampler;
use crate::error::RegenError;

/// Resamples in-process with the `image` crate. The output format follows
/// the destination extension.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinResampler {
    filter: FilterType,
}

impl BuiltinResampler {
    pub fn new(filter: FilterType) -> Self {
        BuiltinResampler { filter }
    }
}

impl Default for BuiltinResampler {
    fn default() -> Self {
        Self::new(FilterType::Lanczos3)
    }
}

impl Resampler for BuiltinResampler {
    fn resample(&self, source: &Path, destination: &Path, width: u32, height: u32) -> Result<(), RegenError> {
        let img = image::open(source).map_err(|e| RegenError::ImageFailed {
            path: source.to_path_buf(),
            reason: format!("failed to load image: {}", e),
        })?;

        debug!(
            source = %source.display(),
            from_width = img.width(),
            from_height = img.height(),
            width,
            height,
            "resampling"
        );

        let resized = img.resize_exact(width, height, self.filter);
        resized.save(destination).map_err(|e| RegenError::ImageFailed {
            path: destination.to_path_buf(),
            reason: format!("failed to save image: {}", e),
        })
    }

    fn name(&self) -> &str {
        "builtin"
    }
}
