//! Label fonts
//!
//! A label is drawn either with a scalable TrueType font loaded from disk or,
//! when none of the configured files can be loaded, with the built-in bitmap
//! font.

use std::fs;
use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings};
use image::{Rgb, RgbImage};
use thiserror::Error;
use tracing::debug;

use super::bitmap_font::BitmapFont;
use super::layout::TextBox;

/// Errors that can occur while loading a scalable font
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("failed to read font {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse font {path}: {reason}")]
    Parse { path: PathBuf, reason: &'static str },

    #[error("font size must be at least 1px, got {0}")]
    ZeroSize(f32),

    #[error("no font candidates configured")]
    NoCandidates,
}

/// A TrueType/OpenType font rasterized at a fixed pixel size
pub struct ScalableFont {
    font: Font,
    px: f32,
}

impl std::fmt::Debug for ScalableFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalableFont").field("px", &self.px).finish_non_exhaustive()
    }
}

impl ScalableFont {
    /// Load the first face of a font file at the given pixel size
    pub fn load(path: &Path, px: f32) -> Result<Self, FontLoadError> {
        if px < 1.0 {
            return Err(FontLoadError::ZeroSize(px));
        }

        let data = fs::read(path).map_err(|source| FontLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = FontSettings {
            scale: px,
            ..FontSettings::default()
        };
        let font = Font::from_bytes(data, settings).map_err(|reason| FontLoadError::Parse {
            path: path.to_path_buf(),
            reason,
        })?;

        Ok(Self { font, px })
    }

    pub fn px(&self) -> f32 {
        self.px
    }

    fn baseline(&self) -> i32 {
        self.font
            .horizontal_line_metrics(self.px)
            .map(|m| m.ascent.round() as i32)
            .unwrap_or_else(|| self.px.round() as i32)
    }

    pub fn measure(&self, text: &str) -> TextBox {
        let baseline = self.baseline();
        let mut pen = 0.0f32;
        let mut bbox = TextBox::default();

        for c in text.chars() {
            let m = self.font.metrics(c, self.px);
            let left = pen.round() as i32 + m.xmin;
            let top = baseline - (m.ymin + m.height as i32);
            bbox = bbox.union(TextBox::new(left, top, left + m.width as i32, top + m.height as i32));
            pen += m.advance_width;
        }

        bbox
    }

    pub fn draw(&self, image: &mut RgbImage, origin: (i32, i32), text: &str, color: Rgb<u8>) {
        let (ox, oy) = origin;
        let baseline = oy + self.baseline();
        let mut pen = 0.0f32;

        for c in text.chars() {
            let (m, coverage) = self.font.rasterize(c, self.px);
            let left = ox + pen.round() as i32 + m.xmin;
            let top = baseline - (m.ymin + m.height as i32);

            for (i, &alpha) in coverage.iter().enumerate() {
                let x = left + (i % m.width) as i32;
                let y = top + (i / m.width) as i32;
                blend_pixel(image, x, y, color, alpha);
            }
            pen += m.advance_width;
        }
    }
}

/// The font a label is drawn with
#[derive(Debug)]
pub enum LabelFont {
    Scalable(ScalableFont),
    Bitmap(BitmapFont),
}

impl LabelFont {
    pub fn is_scalable(&self) -> bool {
        matches!(self, LabelFont::Scalable(_))
    }

    /// Ink bounding box of `text` drawn at origin (0, 0)
    pub fn measure(&self, text: &str) -> TextBox {
        match self {
            LabelFont::Scalable(font) => font.measure(text),
            LabelFont::Bitmap(font) => font.measure(text),
        }
    }

    pub fn draw(&self, image: &mut RgbImage, origin: (i32, i32), text: &str, color: Rgb<u8>) {
        match self {
            LabelFont::Scalable(font) => font.draw(image, origin, text, color),
            LabelFont::Bitmap(font) => font.draw(image, origin, text, color),
        }
    }
}

/// Try each candidate in order, returning the first font that loads
pub fn load_first(candidates: &[PathBuf], px: f32) -> Result<ScalableFont, FontLoadError> {
    let mut last_error = FontLoadError::NoCandidates;

    for path in candidates {
        match ScalableFont::load(path, px) {
            Ok(font) => {
                debug!(path = %path.display(), px, "Loaded scalable font");
                return Ok(font);
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Font candidate unavailable");
                last_error = e;
            }
        }
    }

    Err(last_error)
}

/// Load a scalable font, falling back to the built-in bitmap font
pub fn load_label_font(candidates: &[PathBuf], px: f32) -> LabelFont {
    match load_first(candidates, px) {
        Ok(font) => LabelFont::Scalable(font),
        Err(e) => {
            debug!(error = %e, "Using built-in bitmap font");
            LabelFont::Bitmap(BitmapFont)
        }
    }
}

/// Blend `color` over the pixel at (x, y) with the given coverage
///
/// Coordinates outside the image are ignored.
pub(crate) fn blend_pixel(image: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, coverage: u8) {
    if coverage == 0 || x < 0 || y < 0 || x >= image.width() as i32 || y >= image.height() as i32 {
        return;
    }

    let pixel = image.get_pixel_mut(x as u32, y as u32);
    let alpha = coverage as u16;
    for (dst, &src) in pixel.0.iter_mut().zip(color.0.iter()) {
        let blended = (src as u16 * alpha + *dst as u16 * (255 - alpha) + 127) / 255;
        *dst = blended as u8;
    }
}
