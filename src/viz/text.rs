//! Caption text for rendered images

use crate::error::{Error, Result};
use ab_glyph::{FontRef, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};

/// DejaVu Sans, bundled so rendering needs no system fonts
const DEJAVU_SANS: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// Default caption height in pixels
pub const CAPTION_PX: f32 = 11.0;

/// A font at a fixed pixel size, with multi-line layout
#[derive(Clone, Debug)]
pub struct CaptionFont {
    font: FontRef<'static>,
    scale: PxScale,
}

impl CaptionFont {
    /// Parse TrueType/OpenType bytes
    pub fn from_bytes(bytes: &'static [u8], px: f32) -> Result<Self> {
        let font = FontRef::try_from_slice(bytes)
            .map_err(|e| Error::Render(format!("Invalid caption font: {e}")))?;
        Ok(Self {
            font,
            scale: PxScale::from(px),
        })
    }

    /// The bundled DejaVu Sans at `px` pixels
    pub fn dejavu_sans(px: f32) -> Result<Self> {
        Self::from_bytes(DEJAVU_SANS, px)
    }

    /// Vertical advance between lines
    pub fn line_height(&self) -> u32 {
        (self.scale.y * 1.25).ceil() as u32
    }

    /// Width of the widest line
    pub fn text_width(&self, text: &str) -> u32 {
        text.lines()
            .map(|line| text_size(self.scale, &self.font, line).0)
            .max()
            .unwrap_or(0)
    }

    /// Height of `text` laid out one line per `\n`
    pub fn text_height(&self, text: &str) -> u32 {
        text.lines().count() as u32 * self.line_height()
    }

    /// Draw `text` with its top-left corner at `(x, y)`
    pub fn draw(&self, img: &mut RgbImage, x: u32, y: u32, color: Rgb<u8>, text: &str) {
        for (i, line) in text.lines().enumerate() {
            let line_y = y + i as u32 * self.line_height();
            draw_text_mut(img, color, x as i32, line_y as i32, self.scale, &self.font, line);
        }
    }
}
