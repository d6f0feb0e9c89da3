//! # Rasterizers
//!
//! Turn labels and the logo into face voxels.
//!
//! ```text
//!   "octocat" ─→ MonoBitmap ─┐
//!                            ├─→ FaceGeometry::voxel ─→ Mesh
//!   LogoRaster ──────────────┘
//! ```

mod bitmap;
mod logo;
mod text;

pub use bitmap::MonoBitmap;
pub use logo::render_logo;
pub use text::{glyph_scale, render_text, TextLabel};
