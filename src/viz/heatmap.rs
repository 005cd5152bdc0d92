//! Normalized confusion matrix heatmap

use super::colormap::Colormap;
use super::text::CaptionFont;
use crate::data::ClassNameTable;
use crate::eval::NormalizedConfusionMatrix;
use image::{imageops, Rgb, RgbImage};

/// Gap between cells, in pixels
const GRID_LINE: u32 = 1;

/// Padding around axis labels
const LABEL_PAD: u32 = 4;

const LABEL_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Render one `cell_px` square per matrix cell, rows top to bottom
///
/// Row `i` is the true class, column `j` the predicted class, matching the
/// printed table.
pub fn render_confusion_heatmap(
    matrix: &NormalizedConfusionMatrix,
    colormap: &Colormap,
    cell_px: u32,
) -> RgbImage {
    let n = matrix.n_classes() as u32;
    let stride = cell_px + GRID_LINE;
    let side = (n * stride + GRID_LINE).max(1);

    RgbImage::from_fn(side, side, |x, y| {
        let (col, row) = (x / stride, y / stride);
        let on_line = x % stride < GRID_LINE || y % stride < GRID_LINE;
        if on_line || col >= n || row >= n {
            Rgb([255, 255, 255])
        } else {
            colormap.color(matrix.get(row as usize, col as usize))
        }
    })
}

/// Heatmap with axis labels: `"{i} {name}"` per row, class index per column
///
/// Columns carry indices rather than names, as in the printed confusion table.
pub fn render_labeled_heatmap(
    matrix: &NormalizedConfusionMatrix,
    colormap: &Colormap,
    cell_px: u32,
    names: &ClassNameTable,
    font: &CaptionFont,
) -> RgbImage {
    let base = render_confusion_heatmap(matrix, colormap, cell_px);
    let n = matrix.n_classes();
    let stride = cell_px + GRID_LINE;

    let row_labels: Vec<String> = (0..n)
        .map(|i| format!("{i} {}", names.name(i).unwrap_or("?")))
        .collect();
    let left = row_labels.iter().map(|l| font.text_width(l)).max().unwrap_or(0) + 2 * LABEL_PAD;
    let top = font.line_height() + LABEL_PAD;

    let mut img = RgbImage::from_pixel(
        left + base.width(),
        top + base.height(),
        Rgb([255, 255, 255]),
    );
    imageops::overlay(&mut img, &base, i64::from(left), i64::from(top));

    let text_offset = cell_px.saturating_sub(font.line_height()) / 2;
    for (i, label) in row_labels.iter().enumerate() {
        let y = top + GRID_LINE + i as u32 * stride + text_offset;
        font.draw(&mut img, LABEL_PAD, y, LABEL_COLOR, label);
    }
    for j in 0..n {
        let label = j.to_string();
        let offset = cell_px.saturating_sub(font.text_width(&label)) / 2;
        let x = left + GRID_LINE + j as u32 * stride + offset;
        font.draw(&mut img, x, LABEL_PAD / 2, LABEL_COLOR, &label);
    }

    img
}
