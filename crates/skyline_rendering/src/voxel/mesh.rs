//! Triangle and append-only mesh types.

/// One facet of the model in millimeter space.
///
/// Winding is counter-clockwise when viewed from outside, so the normal
/// follows the right-hand rule over `vertices`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triangle {
    /// Outward unit normal [nx, ny, nz].
    pub normal: [f32; 3],
    /// Corner positions in emission order.
    pub vertices: [[f32; 3]; 3],
}

impl Triangle {
    /// Creates a triangle with an explicit normal.
    #[inline]
    #[must_use]
    pub const fn new(normal: [f32; 3], vertices: [[f32; 3]; 3]) -> Self {
        Self { normal, vertices }
    }

    /// Normal computed from the winding, `(v1 - v0) x (v2 - v0)` normalized.
    ///
    /// Returns the zero vector for degenerate triangles.
    #[must_use]
    pub fn winding_normal(&self) -> [f32; 3] {
        let [a, b, c] = self.vertices;
        let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
        let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
        let n = [
            u[1] * v[2] - u[2] * v[1],
            u[2] * v[0] - u[0] * v[2],
            u[0] * v[1] - u[1] * v[0],
        ];
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        if len == 0.0 {
            return [0.0; 3];
        }
        [n[0] / len, n[1] / len, n[2] / len]
    }

    /// Returns a copy moved by `offset`.
    #[inline]
    #[must_use]
    pub fn translated(&self, offset: [f32; 3]) -> Self {
        let mut moved = *self;
        for vertex in &mut moved.vertices {
            vertex[0] += offset[0];
            vertex[1] += offset[1];
            vertex[2] += offset[2];
        }
        moved
    }
}

/// Axis-aligned bounds of a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshBounds {
    /// Minimum corner.
    pub min: [f32; 3],
    /// Maximum corner.
    pub max: [f32; 3],
}

impl MeshBounds {
    /// Extent along each axis.
    #[must_use]
    pub fn size(&self) -> [f32; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }
}

/// Ordered triangle list. Triangles are only ever appended; nothing is
/// merged or deduplicated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Creates an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mesh with room for `triangles` facets.
    #[must_use]
    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangles),
        }
    }

    /// Appends one triangle.
    #[inline]
    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Appends a batch of triangles, keeping their order.
    #[inline]
    pub fn extend_from_slice(&mut self, triangles: &[Triangle]) {
        self.triangles.extend_from_slice(triangles);
    }

    /// Appends every triangle of `other`.
    pub fn append(&mut self, other: Mesh) {
        self.triangles.extend(other.triangles);
    }

    /// Appends every triangle of `other` moved by `offset`.
    pub fn append_translated(&mut self, other: &Mesh, offset: [f32; 3]) {
        self.triangles
            .extend(other.triangles.iter().map(|t| t.translated(offset)));
    }

    /// Triangles in emission order.
    #[inline]
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// True when the mesh holds no triangles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Bounding box, `None` for an empty mesh.
    #[must_use]
    pub fn bounds(&self) -> Option<MeshBounds> {
        let mut vertices = self.triangles.iter().flat_map(|t| t.vertices.iter());
        let first = *vertices.next()?;
        let mut bounds = MeshBounds {
            min: first,
            max: first,
        };
        for v in vertices {
            for axis in 0..3 {
                bounds.min[axis] = bounds.min[axis].min(v[axis]);
                bounds.max[axis] = bounds.max[axis].max(v[axis]);
            }
        }
        Some(bounds)
    }

    /// Consumes the mesh, returning its triangles.
    #[must_use]
    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }
}

impl From<Vec<Triangle>> for Mesh {
    fn from(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }
}
