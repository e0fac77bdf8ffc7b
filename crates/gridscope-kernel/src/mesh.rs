//! Polygonal meshes with optional per-face colors.

use gridscope_core::{Color, GridscopeError, Result};
use serde::{Deserialize, Serialize};

use crate::point::RealPoint3;

/// An indexed face-vertex mesh.
///
/// Faces are vertex index lists of length at least three; indices are
/// validated against the vertex array at construction time. Face colors
/// are optional and, when present, cover every face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    vertices: Vec<RealPoint3>,
    faces: Vec<Vec<u32>>,
    face_colors: Option<Vec<Color>>,
}

impl Mesh {
    /// Builds a mesh and validates every face.
    pub fn new(vertices: Vec<RealPoint3>, faces: Vec<Vec<u32>>) -> Result<Self> {
        let n = vertices.len();
        for (i, face) in faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(GridscopeError::InvalidMesh(format!(
                    "face {i} has {} vertices, need at least 3",
                    face.len()
                )));
            }
            if let Some(&idx) = face.iter().find(|&&idx| idx as usize >= n) {
                return Err(GridscopeError::InvalidMesh(format!(
                    "face {i} references vertex {idx}, mesh has {n} vertices"
                )));
            }
        }
        Ok(Self { vertices, faces, face_colors: None })
    }

    /// Attaches one color per face.
    pub fn with_face_colors(mut self, colors: Vec<Color>) -> Result<Self> {
        if colors.len() != self.faces.len() {
            return Err(GridscopeError::SizeMismatch {
                expected: self.faces.len(),
                actual: colors.len(),
            });
        }
        self.face_colors = Some(colors);
        Ok(self)
    }

    /// Number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    #[must_use]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[RealPoint3] {
        &self.vertices
    }

    /// All faces as vertex index lists.
    #[must_use]
    pub fn faces(&self) -> &[Vec<u32>] {
        &self.faces
    }

    /// Vertex indices of face `i`.
    #[must_use]
    pub fn face(&self, i: usize) -> &[u32] {
        &self.faces[i]
    }

    /// Positions of the vertices of face `i`, in face order.
    pub fn face_vertices(&self, i: usize) -> impl Iterator<Item = RealPoint3> + '_ {
        self.faces[i].iter().map(|&idx| self.vertices[idx as usize])
    }

    /// Color of face `i`, when face colors are present.
    #[must_use]
    pub fn face_color(&self, i: usize) -> Option<Color> {
        self.face_colors.as_ref().map(|c| c[i])
    }

    /// Whether the mesh carries per-face colors.
    #[must_use]
    pub fn has_face_colors(&self) -> bool {
        self.face_colors.is_some()
    }

    /// Axis-aligned bounding box of the vertices, if any.
    #[must_use]
    pub fn bounding_box(&self) -> Option<(RealPoint3, RealPoint3)> {
        let first = *self.vertices.first()?;
        let (mut lo, mut hi) = (first, first);
        for v in &self.vertices[1..] {
            lo = lo.min(*v);
            hi = hi.max(*v);
        }
        Some((lo, hi))
    }
}
