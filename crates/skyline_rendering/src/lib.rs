//! # Skyline Rendering Engine
//!
//! Turns a year of contribution counts into:
//! - an ASCII skyline for the terminal
//! - a printable voxel solid, written as binary STL
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    RENDER PIPELINE                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ContributionGrid → classify → ASCII skyline                │
//! │        ↓                                                    │
//! │  SkylineAssembler: plinth + towers + labels + logo → Mesh   │
//! │        ↓                  (AssetProvider)                   │
//! │  years laid out along +X → STL (atomic write)               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules
//!
//! - Every voxel is an independent closed cube; faces are never merged
//! - Fonts and the logo come from an injected [`AssetProvider`]
//! - Identical inputs produce identical triangles in identical order

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod ascii;
pub mod assembly;
pub mod assets;
pub mod raster;
pub mod stl;
pub mod voxel;

pub use ascii::{render_ascii, strip_header, AsciiOptions, HEADER_TEMPLATE};
pub use assembly::SkylineAssembler;
pub use assets::{
    load_label_font, AssetProvider, BitmapFont, DirectoryAssets, EmbeddedAssets, FontSlot,
    LogoRaster,
};
pub use raster::{render_logo, render_text, TextLabel};
pub use stl::{read_stl, read_stl_file, write_stl, write_stl_file, StlModel};
pub use voxel::{create_cube, FaceGeometry, Mesh, MeshBounds, Triangle, TRIANGLES_PER_CUBE};
