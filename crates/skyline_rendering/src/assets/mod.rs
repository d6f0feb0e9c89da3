//! # Assets
//!
//! Label fonts and the logo raster, plus the providers that hand them to the
//! rasterizers.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       ASSETS                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  EmbeddedAssets ─┐                                          │
//! │                  ├─→ AssetProvider ─→ BitmapFont / LogoRaster│
//! │  DirectoryAssets ┘        (scoped per rendering call)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod font;
mod logo;
mod provider;

pub use font::{BitmapFont, Glyph, MAX_GLYPH_SIDE};
pub use logo::{LogoRaster, Rgba, MAX_LOGO_SIDE};
pub use provider::{load_label_font, AssetProvider, DirectoryAssets, EmbeddedAssets, FontSlot};
