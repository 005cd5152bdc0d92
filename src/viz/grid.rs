//! Sample grid: each sampled image bordered by match status

use super::text::CaptionFont;
use crate::eval::VisualSample;
use image::{Rgb, RgbImage};

/// Border color for a correct prediction
pub const MATCH_COLOR: Rgb<u8> = Rgb([0, 160, 0]);
/// Border color for a wrong prediction
pub const MISS_COLOR: Rgb<u8> = Rgb([200, 0, 0]);

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Space between a caption and its tile
const CAPTION_GAP: u32 = 2;

/// Layout parameters for the sample grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    /// Tiles per row
    pub columns: u32,
    /// Integer upscaling factor for each source pixel
    pub scale: u32,
    /// Border width around each tile
    pub border: u32,
    /// Gap between tiles
    pub gap: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: 5,
            scale: 3,
            border: 3,
            gap: 4,
        }
    }
}

/// Render samples row-major into a grid
///
/// Intensities use an inverted gray ramp (0 is white, 1 is black). With a
/// font, each tile gets its caption (ground truth, then prediction) above it
/// in the border color. An empty sample list yields a 1x1 background image.
pub fn render_sample_grid(
    samples: &[VisualSample],
    layout: &GridLayout,
    font: Option<&CaptionFont>,
) -> RgbImage {
    let Some(first) = samples.first() else {
        return RgbImage::from_pixel(1, 1, BACKGROUND);
    };

    let (height, width) = first.image.dim();
    let columns = layout.columns.max(1);
    let scale = layout.scale.max(1);
    let tile_w = width as u32 * scale + 2 * layout.border;
    let tile_h = height as u32 * scale + 2 * layout.border;

    let captions: Vec<String> = samples.iter().map(VisualSample::caption).collect();
    let (caption_w, caption_h) = font.map_or((0, 0), |f| {
        let widest = captions.iter().map(|c| f.text_width(c)).max().unwrap_or(0);
        (widest, f.line_height() * 2 + CAPTION_GAP)
    });
    let cell_w = tile_w.max(caption_w);
    let cell_h = caption_h + tile_h;

    let n = samples.len() as u32;
    let rows = n.div_ceil(columns);
    let grid_cols = n.min(columns);

    let img_w = grid_cols * cell_w + (grid_cols + 1) * layout.gap;
    let img_h = rows * cell_h + (rows + 1) * layout.gap;
    let mut img = RgbImage::from_pixel(img_w, img_h, BACKGROUND);

    for (i, (sample, caption)) in samples.iter().zip(&captions).enumerate() {
        let i = i as u32;
        let cell_x = layout.gap + (i % columns) * (cell_w + layout.gap);
        let cell_y = layout.gap + (i / columns) * (cell_h + layout.gap);
        let border = if sample.is_match { MATCH_COLOR } else { MISS_COLOR };

        if let Some(font) = font {
            font.draw(&mut img, cell_x, cell_y, border, caption);
        }

        let origin_x = cell_x + (cell_w - tile_w) / 2;
        let origin_y = cell_y + caption_h;
        for ty in 0..tile_h {
            for tx in 0..tile_w {
                let inner_x = tx.checked_sub(layout.border).map(|v| v / scale);
                let inner_y = ty.checked_sub(layout.border).map(|v| v / scale);
                let pixel = match (inner_x, inner_y) {
                    (Some(px), Some(py)) if (px as usize) < width && (py as usize) < height => {
                        gray(sample.image[[py as usize, px as usize]])
                    }
                    _ => border,
                };
                img.put_pixel(origin_x + tx, origin_y + ty, pixel);
            }
        }
    }

    img
}

fn gray(value: f32) -> Rgb<u8> {
    let v = (255.0 - value.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgb([v, v, v])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viz::text::CAPTION_PX;
    use ndarray::Array2;

    fn sample(is_match: bool, value: f32) -> VisualSample {
        VisualSample {
            index: 0,
            image: Array2::from_elem((2, 2), value),
            predicted: 0,
            actual: usize::from(!is_match),
            predicted_name: "a".into(),
            true_name: if is_match { "a" } else { "b" }.into(),
            is_match,
        }
    }

    #[test]
    fn test_grid_dimensions() {
        let layout = GridLayout {
            columns: 2,
            scale: 1,
            border: 1,
            gap: 1,
        };
        let samples = vec![sample(true, 0.0), sample(false, 1.0), sample(true, 0.5)];
        let img = render_sample_grid(&samples, &layout, None);

        // tile 4x4, 2 columns, 2 rows, gaps of 1
        assert_eq!(img.dimensions(), (2 * 4 + 3, 2 * 4 + 3));
    }

    #[test]
    fn test_border_colors_and_pixels() {
        let layout = GridLayout {
            columns: 2,
            scale: 1,
            border: 1,
            gap: 1,
        };
        let samples = vec![sample(true, 0.0), sample(false, 1.0)];
        let img = render_sample_grid(&samples, &layout, None);

        // First tile starts at (1, 1): border then white (0.0) pixels
        assert_eq!(*img.get_pixel(1, 1), MATCH_COLOR);
        assert_eq!(*img.get_pixel(2, 2), Rgb([255, 255, 255]));
        // Second tile starts at (6, 1): border then black (1.0) pixels
        assert_eq!(*img.get_pixel(6, 1), MISS_COLOR);
        assert_eq!(*img.get_pixel(7, 2), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_empty_samples() {
        let img = render_sample_grid(&[], &GridLayout::default(), None);
        assert_eq!(img.dimensions(), (1, 1));
    }

    #[test]
    fn test_captions_drawn_above_tiles() {
        let font = CaptionFont::dejavu_sans(CAPTION_PX).unwrap();
        let layout = GridLayout::default();
        let samples = vec![sample(true, 0.0), sample(false, 0.0)];

        let plain = render_sample_grid(&samples, &layout, None);
        let captioned = render_sample_grid(&samples, &layout, Some(&font));
        assert_eq!(
            captioned.height(),
            plain.height() + font.line_height() * 2 + CAPTION_GAP
        );
        assert!(captioned.width() >= plain.width());

        // Caption text lands in the band above the first row of tiles
        let band_h = font.line_height() * 2;
        let marked = (layout.gap..layout.gap + band_h)
            .flat_map(|y| (0..captioned.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| *captioned.get_pixel(x, y) != BACKGROUND)
            .count();
        assert!(marked > 0);
    }
}
