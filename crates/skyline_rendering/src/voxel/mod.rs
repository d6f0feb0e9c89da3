//! Voxel geometry: triangles, meshes, the cube emitter and raster faces.
//!
//! All coordinates are millimeters. The plinth's front face is the plane
//! y = 0 and its top is the plane z = 0.

mod cube;
mod face;
mod mesh;

pub use cube::{create_cube, TRIANGLES_PER_CUBE};
pub use face::FaceGeometry;
pub use mesh::{Mesh, MeshBounds, Triangle};
