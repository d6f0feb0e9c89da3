//! # Skyline Core
//!
//! Pure data and classification logic shared by the renderers.
//!
//! ## Design Principles
//!
//! 1. **Deterministic** - Classification depends only on counts
//! 2. **Total** - Every grid cell classifies, no error cases in the classifier
//! 3. **No I/O** - Grids arrive already fetched; only config loading touches disk
//!
//! ## Example
//!
//! ```rust,ignore
//! use skyline_core::{classify, HeightLevel};
//!
//! let c = classify(7, 10, 0, 1);
//! assert_eq!(c.level, HeightLevel::High);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod classify;
pub mod config;
pub mod contribution;
pub mod error;
pub mod years;

pub use classify::{classify, classify_week, normalize, Classification, HeightLevel, StackRole};
pub use config::{
    Anchor, AssetConfig, FaceConfig, LabelConfig, LayoutConfig, LogoConfig, SkylineConfig,
};
pub use contribution::{ContributionDay, ContributionGrid, Week, DAYS_PER_WEEK};
pub use error::{ErrorKind, SkylineError, SkylineResult};
pub use years::{
    current_year, format_year_range, generate_output_filename, parse_year_range,
    parse_year_range_at, validate_year_range, validate_year_range_at, LAUNCH_YEAR,
};
