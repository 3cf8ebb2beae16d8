//! Startup dependency check
//!
//! The PNG codec is an optional feature of the `image` crate. A build without
//! it cannot produce any icon, so the program checks once before doing work.

use image::ImageFormat;
use thiserror::Error;

/// Process exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const MISSING_DEPENDENCY: i32 = 1;
    pub const GENERATION_FAILED: i32 = 2;
}

/// Errors detected before any icon is generated
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreflightError {
    #[error("PNG support is not compiled into this build")]
    PngUnsupported,
}

impl PreflightError {
    /// Installation guidance shown to the user, one entry per printed line
    pub fn guidance(&self) -> [&'static str; 2] {
        match self {
            PreflightError::PngUnsupported => [
                "error: PNG support is not compiled into this build",
                "please run: cargo build --features png",
            ],
        }
    }
}

/// Check that PNG encoding is available
pub fn ensure_png_support() -> Result<(), PreflightError> {
    check_png_support(ImageFormat::Png.writing_enabled())
}

fn check_png_support(writing_enabled: bool) -> Result<(), PreflightError> {
    if writing_enabled {
        Ok(())
    } else {
        Err(PreflightError::PngUnsupported)
    }
}
