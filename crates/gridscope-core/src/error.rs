//! Error types for gridscope.

use thiserror::Error;

/// The main error type for gridscope operations.
///
/// Drawing fails fast on malformed or out-of-range input instead of
/// silently appending nothing; valid-but-empty inputs are never errors.
#[derive(Error, Debug)]
pub enum GridscopeError {
    /// A draw call found a mode string it has no style variant for.
    #[error("unknown mode '{mode}' for class '{class_name}'")]
    UnknownMode { class_name: String, mode: String },

    /// A chain-code string contained a character outside '0'..'3'.
    #[error("invalid chain code character '{0}' (expected '0'..'3')")]
    InvalidChainCode(char),

    /// Digital straight segment parameters and points disagree.
    #[error("invalid digital segment: {0}")]
    InvalidSegment(String),

    /// A mesh face references a vertex that does not exist.
    #[error("invalid mesh: {0}")]
    InvalidMesh(String),

    /// A grid curve was built from cells that do not form a curve.
    #[error("invalid grid curve: {0}")]
    InvalidCurve(String),

    /// A cell had the wrong dimension for the requested operation.
    #[error("invalid cell dimension: expected {expected}, got {actual}")]
    InvalidCellDimension { expected: u32, actual: u32 },

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A textured-image index was out of range.
    #[error("texture image index {index} out of range (scene holds {len})")]
    ImageIndexOutOfRange { index: usize, len: usize },

    /// An embedded-domain index was out of range.
    #[error("embedded domain index {index} out of range (scene holds {len})")]
    DomainIndexOutOfRange { index: usize, len: usize },

    /// A clipping plane was given a zero normal vector.
    #[error("clipping plane normal must be non-zero")]
    InvalidClippingPlane,

    /// I/O error (SVG export).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for gridscope operations.
pub type Result<T> = std::result::Result<T, GridscopeError>;
