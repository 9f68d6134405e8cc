//! Generation tasks for a tvOS asset catalog.

use std::path::PathBuf;

const BRAND_ASSETS_DIR: &str = "Brand Assets.brandassets";
const APP_ICON_SMALL_DIR: &str = "App Icon - Small.imagestack";

/// One missing image to regenerate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTask {
    /// Directory holding `Contents.json`, relative to the catalog root
    pub relative_dir: PathBuf,
    /// When true `images[0]` is the existing 1x image and `images[1]` is
    /// generated. When false the roles are swapped.
    pub is_base_image_1x: bool,
    pub width: u32,
    pub height: u32,
}

impl GenerationTask {
    pub fn new(relative_dir: impl Into<PathBuf>, is_base_image_1x: bool, width: u32, height: u32) -> Self {
        GenerationTask {
            relative_dir: relative_dir.into(),
            is_base_image_1x,
            width,
            height,
        }
    }

    /// Indices of the (existing, new) entries in the manifest image list.
    pub fn indices(&self) -> (usize, usize) {
        if self.is_base_image_1x { (0, 1) } else { (1, 0) }
    }
}

fn app_icon_layer(layer: u32) -> PathBuf {
    PathBuf::from(BRAND_ASSETS_DIR)
        .join(APP_ICON_SMALL_DIR)
        .join(format!("Layer {}.imagestacklayer", layer))
        .join("Content.imageset")
}

/// The fixed list of images regenerated in a tvOS asset catalog.
pub fn tvos_tasks() -> Vec<GenerationTask> {
    vec![
        GenerationTask::new("LaunchImage.launchimage", true, 3840, 2160),
        GenerationTask::new(
            PathBuf::from(BRAND_ASSETS_DIR).join("Top Shelf Image.imageset"),
            true,
            3840,
            1440,
        ),
        GenerationTask::new(app_icon_layer(1), false, 400, 240),
        GenerationTask::new(app_icon_layer(2), false, 400, 240),
        GenerationTask::new(app_icon_layer(3), false, 400, 240),
        GenerationTask::new(app_icon_layer(4), false, 400, 240),
    ]
}
