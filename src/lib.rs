//! Geom3d: 3D geometry value types
//!
//! This crate provides a small set of value types for 3D Euclidean geometry:
//! a point/vector ([`Point3D`]), an infinite line defined by two distinct
//! points ([`Line3D`]), and a cube defined by eight vertices ([`Cube3D`]).
//! Derived operations (rotation, translation, distance, measures) are pure:
//! they return new values and never mutate the receiver.
//!
//! # Floating-point semantics
//!
//! Coordinates are plain `f64` values. NaN and infinite components are
//! accepted everywhere and propagated through arithmetic; supplying a NaN
//! emits a `log::warn!` diagnostic but never fails. Point equality uses a
//! per-axis absolute tolerance of [`EPSILON`].
//!
//! # Thread safety
//!
//! All three types are independent values with no shared state; derived
//! operations are pure and safe to call from any thread. The in-place
//! coordinate and endpoint setters are not synchronized, so an instance
//! shared across threads must be externally synchronized while it is being
//! mutated.

use thiserror::Error;

pub mod cube;
pub mod line;
pub mod point;

// Re-export commonly used types
pub use cube::Cube3D;
pub use line::Line3D;
pub use point::Point3D;

/// Absolute per-axis tolerance used for point equality and parallelism tests.
pub const EPSILON: f64 = 1e-9;

/// Main error type for the geom3d library
#[derive(Debug, Error)]
pub enum GeomError {
    /// A line's defining points coincide, so no direction exists.
    #[error("start and end points must be distinct")]
    DegenerateLine,

    /// A cube was requested with a side length that is not strictly positive.
    #[error("side length must be positive, got {0}")]
    NonPositiveSideLength(f64),

    /// A cube was built from the wrong number of vertices.
    #[error("exactly eight vertices must be provided, got {0}")]
    VertexCount(usize),
}

/// Result type for geom3d operations
pub type Result<T> = std::result::Result<T, GeomError>;
