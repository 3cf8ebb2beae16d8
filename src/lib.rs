//! Placeholder icon generator for the browser extension
//!
//! Writes `icon-16.png`, `icon-48.png` and `icon-128.png`: a white `N` on a
//! solid blue square.

pub mod icons;
pub mod logging;
pub mod preflight;

pub use icons::{create_icon, generate_all, render_icon, GeneratorConfig, IconError, ICON_SET};
