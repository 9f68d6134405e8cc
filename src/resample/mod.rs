//! Backends that write a resized copy of an image.

mod builtin;
mod sips;

pub use builtin::BuiltinResampler;
pub use sips::SipsResampler;

use std::path::Path;

use crate::error::RegenError;

/// Writes `source` resized to exactly `width` x `height` at `destination`,
/// replacing any existing file.
pub trait Resampler {
    fn resample(&self, source: &Path, destination: &Path, width: u32, height: u32) -> Result<(), RegenError>;

    /// Short name used in log output.
    fn name(&self) -> &str;
}
