//! Generator settings
//!
//! There is no user-facing configuration; these are the compiled-in values
//! passed through the generator so tests can vary them.

use std::path::PathBuf;

use image::Rgb;

/// Background fill, `#3b82f6`
pub const BACKGROUND: Rgb<u8> = Rgb([0x3b, 0x82, 0xf6]);
pub const LABEL_COLOR: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);
pub const LABEL: &str = "N";
/// Scalable label size relative to the icon side
pub const LABEL_SCALE: f32 = 0.6;

/// An icon to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub filename: &'static str,
}

impl IconSpec {
    pub const fn new(size: u32, filename: &'static str) -> Self {
        Self { size, filename }
    }
}

/// The icons written on every run, in order
pub const ICON_SET: [IconSpec; 3] = [
    IconSpec::new(16, "icon-16.png"),
    IconSpec::new(48, "icon-48.png"),
    IconSpec::new(128, "icon-128.png"),
];

/// Scalable fonts tried in order before falling back to the bitmap font
const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    r"C:\Windows\Fonts\arialbd.ttf",
];

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub background: Rgb<u8>,
    pub label_color: Rgb<u8>,
    pub label: String,
    pub label_scale: f32,
    pub font_candidates: Vec<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            background: BACKGROUND,
            label_color: LABEL_COLOR,
            label: LABEL.to_string(),
            label_scale: LABEL_SCALE,
            font_candidates: FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
        }
    }
}

impl GeneratorConfig {
    /// Config that never loads a scalable font
    pub fn bitmap_only() -> Self {
        Self {
            font_candidates: Vec::new(),
            ..Self::default()
        }
    }

    /// Scalable font size for an icon side, truncated to whole pixels
    pub fn font_px(&self, size: u32) -> f32 {
        (size as f32 * self.label_scale).floor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_set_order_and_names() {
        let sizes: Vec<u32> = ICON_SET.iter().map(|s| s.size).collect();
        assert_eq!(sizes, vec![16, 48, 128]);
        for spec in ICON_SET {
            assert_eq!(spec.filename, format!("icon-{}.png", spec.size));
        }
    }

    #[test]
    fn test_font_px_truncates() {
        let config = GeneratorConfig::default();
        assert_eq!(config.font_px(16), 9.0);
        assert_eq!(config.font_px(48), 28.0);
        assert_eq!(config.font_px(128), 76.0);
    }

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.background, Rgb([59, 130, 246]));
        assert_eq!(config.label_color, Rgb([255, 255, 255]));
        assert_eq!(config.label, "N");
        assert!(!config.font_candidates.is_empty());
        assert!(GeneratorConfig::bitmap_only().font_candidates.is_empty());
    }
}
