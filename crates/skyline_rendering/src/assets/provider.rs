//! Asset providers.
//!
//! Rasterizers never reach for global resources. They receive an
//! [`AssetProvider`] and acquire a font or the logo for the duration of one
//! rendering call; the returned value is owned and dropped when the call
//! returns, on success and on error alike.

use std::path::{Path, PathBuf};

use skyline_core::{SkylineError, SkylineResult};
use tracing::{debug, warn};

use super::font::BitmapFont;
use super::logo::LogoRaster;

/// Primary label font compiled into the binary.
const EMBEDDED_PRIMARY_FONT: &str = include_str!("../../assets/fonts/skyline-5x7.font");

/// Fallback label font compiled into the binary.
const EMBEDDED_FALLBACK_FONT: &str = include_str!("../../assets/fonts/skyline-3x5.font");

/// Logo compiled into the binary.
const EMBEDDED_LOGO: &[u8] = include_bytes!("../../assets/logo.png");

/// Which of the two label fonts to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSlot {
    /// Preferred font.
    Primary,
    /// Used when the primary font cannot be loaded.
    Fallback,
}

impl FontSlot {
    /// File name used by [`DirectoryAssets`].
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Primary => "primary.font",
            Self::Fallback => "fallback.font",
        }
    }
}

/// Source of fonts and the logo raster.
pub trait AssetProvider {
    /// Loads one of the label fonts.
    ///
    /// # Errors
    ///
    /// Any I/O or parse failure for that font.
    fn font(&self, slot: FontSlot) -> SkylineResult<BitmapFont>;

    /// Loads the logo raster.
    ///
    /// # Errors
    ///
    /// Any I/O or parse failure for the logo.
    fn logo(&self) -> SkylineResult<LogoRaster>;
}

/// Loads the primary font, falling back to the secondary one.
///
/// # Errors
///
/// [`SkylineError::Asset`] when neither font loads.
pub fn load_label_font(assets: &dyn AssetProvider) -> SkylineResult<BitmapFont> {
    match assets.font(FontSlot::Primary) {
        Ok(font) => Ok(font),
        Err(primary) => {
            warn!("primary font unavailable, using fallback: {primary}");
            assets.font(FontSlot::Fallback).map_err(|fallback| {
                SkylineError::asset(
                    "label font",
                    format!("failed to load any fonts: {primary}; {fallback}"),
                )
            })
        }
    }
}

/// Assets compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAssets;

impl AssetProvider for EmbeddedAssets {
    fn font(&self, slot: FontSlot) -> SkylineResult<BitmapFont> {
        let (name, text) = match slot {
            FontSlot::Primary => ("embedded skyline-5x7", EMBEDDED_PRIMARY_FONT),
            FontSlot::Fallback => ("embedded skyline-3x5", EMBEDDED_FALLBACK_FONT),
        };
        debug!("loading {name}");
        BitmapFont::parse(name, text)
    }

    fn logo(&self) -> SkylineResult<LogoRaster> {
        LogoRaster::decode_png("embedded logo", EMBEDDED_LOGO)
    }
}

/// Assets read from a directory holding `primary.font`, `fallback.font`
/// and `logo.png`.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    /// Logo file name inside the directory.
    pub const LOGO_FILE: &'static str = "logo.png";

    /// Creates a provider rooted at `root`.
    #[must_use]
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn read(&self, file: &str) -> SkylineResult<(PathBuf, Vec<u8>)> {
        let path = self.root.join(file);
        debug!("loading asset {}", path.display());
        let bytes =
            std::fs::read(&path).map_err(|e| SkylineError::io("failed to read asset", &path, e))?;
        Ok((path, bytes))
    }
}

impl AssetProvider for DirectoryAssets {
    fn font(&self, slot: FontSlot) -> SkylineResult<BitmapFont> {
        let (path, bytes) = self.read(slot.file_name())?;
        let name = path.display().to_string();
        let text = String::from_utf8(bytes)
            .map_err(|e| SkylineError::asset(name.as_str(), format!("font is not UTF-8: {e}")))?;
        BitmapFont::parse(&name, &text)
    }

    fn logo(&self) -> SkylineResult<LogoRaster> {
        let (path, bytes) = self.read(Self::LOGO_FILE)?;
        LogoRaster::decode_png(&path.display().to_string(), &bytes)
    }
}
