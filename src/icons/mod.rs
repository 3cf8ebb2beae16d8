//! Placeholder icon rendering
//!
//! Each icon is a solid square with a single centered label, written as PNG.

pub mod bitmap_font;
pub mod config;
pub mod font;
pub mod layout;

use std::path::{Path, PathBuf};

use image::{ImageError, ImageFormat, RgbImage};
use thiserror::Error;
use tracing::info;

pub use config::{GeneratorConfig, IconSpec, ICON_SET};
pub use font::{load_label_font, FontLoadError, LabelFont};
pub use layout::{centered_origin, TextBox};

/// Errors that can occur while creating an icon
#[derive(Debug, Error)]
pub enum IconError {
    #[error("icon size must be positive, got {0}")]
    InvalidSize(u32),

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

/// Render an icon of the given side length in memory
pub fn render_icon(config: &GeneratorConfig, size: u32) -> Result<RgbImage, IconError> {
    if size == 0 {
        return Err(IconError::InvalidSize(size));
    }

    let mut image = RgbImage::from_pixel(size, size, config.background);
    let font = load_label_font(&config.font_candidates, config.font_px(size));
    let bbox = font.measure(&config.label);
    let origin = centered_origin(size, bbox);
    font.draw(&mut image, origin, &config.label, config.label_color);

    Ok(image)
}

/// Render an icon and save it as PNG at `path`, replacing any existing file
pub fn create_icon(config: &GeneratorConfig, size: u32, path: &Path) -> Result<(), IconError> {
    let image = render_icon(config, size)?;
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| IconError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    info!(size, path = %path.display(), "Wrote icon");
    println!("✓ Generated: {}", path.display());
    Ok(())
}

/// Create every icon in [`ICON_SET`] inside `out_dir`, stopping at the first failure
pub fn generate_all(config: &GeneratorConfig, out_dir: &Path) -> Result<Vec<PathBuf>, IconError> {
    let mut written = Vec::with_capacity(ICON_SET.len());
    for spec in ICON_SET {
        let path = out_dir.join(spec.filename);
        create_icon(config, spec.size, &path)?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    /// Bounding box of every pixel that differs from the background
    fn ink_bounds(image: &RgbImage, background: Rgb<u8>) -> Option<(u32, u32, u32, u32)> {
        let mut bounds: Option<(u32, u32, u32, u32)> = None;
        for (x, y, p) in image.enumerate_pixels() {
            if *p == background {
                continue;
            }
            bounds = Some(match bounds {
                None => (x, y, x + 1, y + 1),
                Some((l, t, r, b)) => (l.min(x), t.min(y), r.max(x + 1), b.max(y + 1)),
            });
        }
        bounds
    }

    fn assert_centered(image: &RgbImage, background: Rgb<u8>) {
        let size = image.width() as f32;
        let (l, t, r, b) = ink_bounds(image, background).expect("label was not drawn");
        let cx = (l + r) as f32 / 2.0;
        let cy = (t + b) as f32 / 2.0;
        assert!((cx - size / 2.0).abs() <= 1.0, "horizontal center {cx} in {size}px icon");
        assert!((cy - size / 2.0).abs() <= 1.0, "vertical center {cy} in {size}px icon");
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let err = render_icon(&GeneratorConfig::bitmap_only(), 0).unwrap_err();
        assert!(matches!(err, IconError::InvalidSize(0)));
    }

    #[test]
    fn test_bitmap_icon_colors() {
        let config = GeneratorConfig::bitmap_only();
        let image = render_icon(&config, 16).unwrap();

        assert_eq!(image.dimensions(), (16, 16));
        for (x, y) in [(0, 0), (15, 0), (0, 15), (15, 15)] {
            assert_eq!(*image.get_pixel(x, y), config.background);
        }
        // Bitmap glyphs are opaque, so every pixel is either background or label
        assert!(image
            .pixels()
            .all(|p| *p == config.background || *p == config.label_color));
        assert!(image.pixels().any(|p| *p == config.label_color));
    }

    #[test]
    fn test_bitmap_label_is_centered() {
        let config = GeneratorConfig::bitmap_only();
        for spec in ICON_SET {
            let image = render_icon(&config, spec.size).unwrap();
            assert_centered(&image, config.background);
        }
    }

    #[test]
    fn test_bitmap_label_ignores_icon_size() {
        let config = GeneratorConfig::bitmap_only();
        let small = render_icon(&config, 16).unwrap();
        let large = render_icon(&config, 128).unwrap();
        let (sl, st, sr, sb) = ink_bounds(&small, config.background).unwrap();
        let (ll, lt, lr, lb) = ink_bounds(&large, config.background).unwrap();
        assert_eq!((sr - sl, sb - st), (lr - ll, lb - lt));
    }

    #[test]
    fn test_scalable_label_is_centered() {
        let config = GeneratorConfig::default();
        for spec in ICON_SET {
            let font = load_label_font(&config.font_candidates, config.font_px(spec.size));
            if !font.is_scalable() {
                return;
            }
            let image = render_icon(&config, spec.size).unwrap();
            assert_centered(&image, config.background);
            // Solid interior pixels reach full white
            assert!(image.pixels().any(|p| *p == config.label_color));
        }
    }

    #[test]
    fn test_large_scalable_label_fills_icon() {
        let config = GeneratorConfig::default();
        let font = load_label_font(&config.font_candidates, config.font_px(128));
        if !font.is_scalable() {
            return;
        }
        let image = render_icon(&config, 128).unwrap();
        let (l, t, r, b) = ink_bounds(&image, config.background).unwrap();
        // A 76px N is far larger than the bitmap glyph
        assert!(r - l > 20 && b - t > 20);
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_create_icon_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon-48.png");
        create_icon(&GeneratorConfig::default(), 48, &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (48, 48));
        assert_eq!(*decoded.get_pixel(0, 0), config::BACKGROUND);
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_generate_all_writes_every_size() {
        let dir = tempfile::tempdir().unwrap();
        let written = generate_all(&GeneratorConfig::default(), dir.path()).unwrap();

        assert_eq!(written.len(), ICON_SET.len());
        for spec in ICON_SET {
            let path = dir.path().join(spec.filename);
            assert!(written.contains(&path));
            assert_eq!(image::image_dimensions(&path).unwrap(), (spec.size, spec.size));
        }
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_generate_all_without_system_font() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig {
            font_candidates: vec![PathBuf::from("/nonexistent/Helvetica.ttc")],
            ..GeneratorConfig::default()
        };
        generate_all(&config, dir.path()).unwrap();

        for spec in ICON_SET {
            let decoded = image::open(dir.path().join(spec.filename)).unwrap().to_rgb8();
            assert_eq!(decoded.dimensions(), (spec.size, spec.size));
            assert!(decoded
                .pixels()
                .all(|p| *p == config.background || *p == config.label_color));
        }
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_rerun_overwrites_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon-16.png");
        std::fs::write(&path, b"stale").unwrap();

        let config = GeneratorConfig::bitmap_only();
        create_icon(&config, 16, &path).unwrap();
        let first = std::fs::read(&path).unwrap();
        create_icon(&config, 16, &path).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(image::image_dimensions(&path).unwrap(), (16, 16));
    }

    #[test]
    fn test_write_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("icon-16.png");
        let err = create_icon(&GeneratorConfig::bitmap_only(), 16, &path).unwrap_err();
        assert!(matches!(err, IconError::Write { .. }));
    }

    #[test]
    fn test_generate_all_stops_at_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert!(generate_all(&GeneratorConfig::bitmap_only(), &missing).is_err());
        assert!(!missing.exists());
    }
}
