use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::RegenError;
use crate::resample::Resampler;
use crate::tasks::GenerationTask;
use crate::utils::manifest::Contents;

/// Progress event emitted while regenerating a list of tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Starting a task
    Processing { dir: PathBuf, index: usize, total: usize },
    /// Task finished and its image was written
    Processed { destination: PathBuf, index: usize, total: usize },
    /// All tasks finished
    Done { images_written: usize },
}

/// A fully resolved resample for one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedResample {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Resolve the source and destination of `task` under `root`.
///
/// Reads the task's `Contents.json` and checks that the existing image is on
/// disk. Nothing is written.
pub fn resolve(root: &Path, task: &GenerationTask) -> Result<PlannedResample, RegenError> {
    let contents_dir = root.join(&task.relative_dir);
    let manifest_path = Contents::path_in(&contents_dir);
    let contents = Contents::load(&manifest_path)?;

    let (existing_index, new_index) = task.indices();
    let existing = contents.filename_at(existing_index, &manifest_path)?;
    let new = contents.filename_at(new_index, &manifest_path)?;

    let source = contents_dir.join(existing);
    if !source.is_file() {
        return Err(RegenError::SourceImageMissing(source));
    }

    Ok(PlannedResample {
        source,
        destination: contents_dir.join(new),
        width: task.width,
        height: task.height,
    })
}

/// Regenerate the missing image of a single task. Returns the written path.
pub fn generate_image(
    root: &Path,
    task: &GenerationTask,
    resampler: &dyn Resampler,
) -> Result<PathBuf, RegenError> {
    let planned = resolve(root, task)?;

    debug!(
        backend = resampler.name(),
        source = %planned.source.display(),
        destination = %planned.destination.display(),
        "generating image"
    );

    resampler.resample(&planned.source, &planned.destination, planned.width, planned.height)?;

    info!(
        destination = %planned.destination.display(),
        width = planned.width,
        height = planned.height,
        "image written"
    );
    Ok(planned.destination)
}

/// Resolve every task without resampling. Stops at the first error.
pub fn plan(root: &Path, tasks: &[GenerationTask]) -> Result<Vec<PlannedResample>, RegenError> {
    tasks.iter().map(|task| resolve(root, task)).collect()
}

/// Regenerate all `tasks` in order, stopping at the first error.
pub fn run<F>(
    root: &Path,
    tasks: &[GenerationTask],
    resampler: &dyn Resampler,
    mut on_progress: F,
) -> Result<Vec<PathBuf>, RegenError>
where
    F: FnMut(ProgressEvent),
{
    let total = tasks.len();
    let mut written = Vec::with_capacity(total);

    for (i, task) in tasks.iter().enumerate() {
        on_progress(ProgressEvent::Processing {
            dir: task.relative_dir.clone(),
            index: i,
            total,
        });

        let destination = generate_image(root, task, resampler)?;

        on_progress(ProgressEvent::Processed {
            destination: destination.clone(),
            index: i,
            total,
        });
        written.push(destination);
    }

    on_progress(ProgressEvent::Done {
        images_written: written.len(),
    });

    Ok(written)
}
