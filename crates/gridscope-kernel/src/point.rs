//! Lattice and embedded point aliases.
//!
//! Digital points carry integer coordinates; their embeddings into the
//! plane or into space are plain `glam` float vectors. Keeping these as
//! aliases (rather than newtypes) lets callers use the full `glam`
//! vector API directly.

/// A point of the 2D integer lattice.
pub type Point2 = glam::IVec2;

/// A point of the 3D integer lattice.
pub type Point3 = glam::IVec3;

/// A 2D point embedded in the Euclidean plane.
pub type RealPoint2 = glam::Vec2;

/// A 3D point embedded in Euclidean space.
pub type RealPoint3 = glam::Vec3;
