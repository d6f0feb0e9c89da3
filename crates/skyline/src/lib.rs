//! # Skyline
//!
//! Generates a 3D printable skyline of a user's yearly contributions, with
//! an ASCII preview on the way.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────────────┐   grids   ┌──────────────────┐  mesh  ┌──────────┐
//! │ContributionSource│ ────────→ │ skyline_rendering│ ─────→ │ .stl file│
//! └──────────────────┘           └──────────────────┘        └──────────┘
//!                                         │ ASCII
//!                                         ↓
//!                                      stdout
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod browser;
pub mod pipeline;
pub mod source;

use skyline_core::SkylineConfig;
use skyline_rendering::{AssetProvider, DirectoryAssets, EmbeddedAssets};

pub use browser::{open_profile, profile_url, Browser, CommandBrowser, PrintBrowser};
pub use pipeline::{generate_skyline, SkylineRequest};
pub use source::{ContributionSource, ContributionsResponse, FixtureSource};

/// Asset provider selected by `[assets]` in the configuration.
#[must_use]
pub fn asset_provider(config: &SkylineConfig) -> Box<dyn AssetProvider> {
    match &config.assets.directory {
        Some(directory) => Box::new(DirectoryAssets::new(directory)),
        None => Box::new(EmbeddedAssets),
    }
}
