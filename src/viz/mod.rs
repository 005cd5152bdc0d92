//! PNG rendering of evaluation artifacts
//!
//! - `heatmap`: normalized confusion matrix, optionally with axis labels
//! - `grid`: sampled images bordered green (match) or red (miss), captioned
//! - `text`: bundled caption font

mod colormap;
mod grid;
mod heatmap;
mod text;

pub use colormap::Colormap;
pub use grid::{render_sample_grid, GridLayout, MATCH_COLOR, MISS_COLOR};
pub use heatmap::{render_confusion_heatmap, render_labeled_heatmap};
pub use text::{CaptionFont, CAPTION_PX};

use crate::error::{Error, Result};
use image::RgbImage;
use std::path::Path;

/// Write an image as PNG
pub fn save_png(img: &RgbImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| Error::Render(format!("Failed to write {}: {e}", path.display())))
}
