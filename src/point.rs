//! # 3D Point Module
//!
//! This module provides the fundamental point/vector type that the rest of
//! the crate is built on. A [`Point3D`] is three `f64` coordinates in a
//! standard right-handed Cartesian system and doubles as a free vector for
//! the arithmetic the line and cube types need.
//!
//! ## Mutation model
//!
//! Coordinates can be replaced in place through the setters, but every
//! derived operation (rotation, addition, subtraction, cross product)
//! returns a *new* point and leaves the receiver untouched.
//!
//! ## Degenerate values
//!
//! NaN and infinite coordinates are never rejected. A NaN supplied to a
//! constructor, setter, or rotation angle is flagged with a `log::warn!`
//! diagnostic and then propagated through the computation unchanged.
//!
//! ## Examples
//!
//! ```rust
//! use geom3d::Point3D;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let p = Point3D::new(1.0, 2.0, 3.0);
//!
//! // Rotating a quarter turn about the x-axis maps (1, 2, 3) to (1, -3, 2).
//! let r = p.rotate_x(FRAC_PI_2);
//! assert!((r.y() - -3.0).abs() < 1e-9);
//! assert!((r.z() - 2.0).abs() < 1e-9);
//!
//! // Rotation preserves distance from the origin.
//! assert!((r.magnitude() - p.magnitude()).abs() < 1e-9);
//! ```

use crate::EPSILON;
use log::{debug, info, warn};
use nalgebra::Vector3;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

/// A point (or free vector) in 3D Cartesian space.
///
/// Equality is tolerant: two points compare equal when every coordinate pair
/// is within [`EPSILON`] of each other. That relation is deliberately not
/// transitive, so [`Hash`] is only consistent with `==` for bit-identical
/// coordinates; see the `Hash` impl for details. `Eq` is not implemented.
#[derive(Debug, Clone, Copy, Default)]
pub struct Point3D {
    x: f64,
    y: f64,
    z: f64,
}

impl Point3D {
    /// Creates a point at the given coordinates.
    ///
    /// NaN components are accepted; each one is reported through a warning
    /// diagnostic for visibility in downstream calculations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geom3d::Point3D;
    ///
    /// let p = Point3D::new(1.0, 2.0, 3.0);
    /// assert_eq!(p.x(), 1.0);
    /// assert_eq!(p.y(), 2.0);
    /// assert_eq!(p.z(), 3.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        if x.is_nan() || y.is_nan() || z.is_nan() {
            warn!("NaN coordinate in new point ({}, {}, {})", x, y, z);
        }
        info!("Created Point3D at ({}, {}, {})", x, y, z);
        Point3D { x, y, z }
    }

    /// Creates a point at the origin (0, 0, 0).
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Returns the x-coordinate.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns the z-coordinate.
    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Sets the x-coordinate in place. NaN is accepted with a warning.
    pub fn set_x(&mut self, x: f64) {
        if x.is_nan() {
            warn!("Attempted to set x to NaN");
        }
        self.x = x;
        info!("Updated x to {}", x);
    }

    /// Sets the y-coordinate in place. NaN is accepted with a warning.
    pub fn set_y(&mut self, y: f64) {
        if y.is_nan() {
            warn!("Attempted to set y to NaN");
        }
        self.y = y;
        info!("Updated y to {}", y);
    }

    /// Sets the z-coordinate in place. NaN is accepted with a warning.
    pub fn set_z(&mut self, z: f64) {
        if z.is_nan() {
            warn!("Attempted to set z to NaN");
        }
        self.z = z;
        info!("Updated z to {}", z);
    }

    /// Calculates the Euclidean distance to another point.
    ///
    /// The distance is symmetric and zero for a point compared with itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geom3d::Point3D;
    ///
    /// let a = Point3D::new(1.0, 2.0, 3.0);
    /// let b = Point3D::new(4.0, 5.0, 6.0);
    /// assert!((a.distance_to(&b) - 27.0_f64.sqrt()).abs() < 1e-9);
    /// ```
    pub fn distance_to(&self, other: &Point3D) -> f64 {
        debug!(
            "Calculating distance from ({}, {}, {}) to ({}, {}, {})",
            self.x, self.y, self.z, other.x, other.y, other.z
        );
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Returns a new point rotated about the x-axis through the origin.
    ///
    /// Uses the standard right-handed rotation matrix:
    /// `y' = y·cosθ − z·sinθ`, `z' = y·sinθ + z·cosθ`, x unchanged.
    /// A NaN angle is warned about and propagates NaN into the rotated
    /// coordinates.
    pub fn rotate_x(&self, angle: f64) -> Point3D {
        if angle.is_nan() {
            warn!("NaN angle provided for x-rotation");
        }
        debug!("Rotating around x-axis by {} radians", angle);
        let (sin, cos) = angle.sin_cos();
        Point3D::new(self.x, self.y * cos - self.z * sin, self.y * sin + self.z * cos)
    }

    /// Returns a new point rotated about the y-axis through the origin.
    ///
    /// Uses the standard right-handed rotation matrix:
    /// `x' = x·cosθ + z·sinθ`, `z' = −x·sinθ + z·cosθ`, y unchanged.
    pub fn rotate_y(&self, angle: f64) -> Point3D {
        if angle.is_nan() {
            warn!("NaN angle provided for y-rotation");
        }
        debug!("Rotating around y-axis by {} radians", angle);
        let (sin, cos) = angle.sin_cos();
        Point3D::new(self.x * cos + self.z * sin, self.y, -self.x * sin + self.z * cos)
    }

    /// Returns a new point rotated about the z-axis through the origin.
    ///
    /// Uses the standard right-handed rotation matrix:
    /// `x' = x·cosθ − y·sinθ`, `y' = x·sinθ + y·cosθ`, z unchanged.
    pub fn rotate_z(&self, angle: f64) -> Point3D {
        if angle.is_nan() {
            warn!("NaN angle provided for z-rotation");
        }
        debug!("Rotating around z-axis by {} radians", angle);
        let (sin, cos) = angle.sin_cos();
        Point3D::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos, self.z)
    }

    /// Calculates the magnitude (distance from the origin).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geom3d::Point3D;
    ///
    /// let p = Point3D::new(3.0, 4.0, 0.0);
    /// assert_eq!(p.magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        debug!("Calculating magnitude of ({}, {}, {})", self.x, self.y, self.z);
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Calculates the dot product with another vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geom3d::Point3D;
    ///
    /// let x_axis = Point3D::new(1.0, 0.0, 0.0);
    /// let y_axis = Point3D::new(0.0, 1.0, 0.0);
    /// assert_eq!(x_axis.dot(&y_axis), 0.0); // Perpendicular
    /// ```
    pub fn dot(&self, other: &Point3D) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the cross product with another vector.
    ///
    /// The result is perpendicular to both inputs, with magnitude equal to
    /// the area of the parallelogram they span.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geom3d::Point3D;
    ///
    /// let x_axis = Point3D::new(1.0, 0.0, 0.0);
    /// let y_axis = Point3D::new(0.0, 1.0, 0.0);
    /// let z_axis = x_axis.cross(&y_axis); // Right-hand rule: x × y = z
    /// assert!((z_axis.z() - 1.0).abs() < 1e-15);
    /// ```
    pub fn cross(&self, other: &Point3D) -> Point3D {
        Point3D {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Converts to a nalgebra `Vector3` for linear algebra operations.
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates a point from a nalgebra `Vector3`.
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Point3D {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }

    /// XOR of the coordinate bit patterns, shared by the hash impls of the
    /// line and cube types so their combined hashes stay swap-invariant.
    pub(crate) fn coord_bits(&self) -> u64 {
        self.x.to_bits() ^ self.y.to_bits() ^ self.z.to_bits()
    }
}

impl Add for Point3D {
    type Output = Point3D;

    fn add(self, other: Point3D) -> Point3D {
        Point3D {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Point3D {
    type Output = Point3D;

    fn sub(self, other: Point3D) -> Point3D {
        Point3D {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl PartialEq for Point3D {
    /// Tolerant comparison: every coordinate pair must lie within
    /// [`EPSILON`]. NaN coordinates compare unequal to everything,
    /// including themselves.
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < EPSILON
            && (self.y - other.y).abs() < EPSILON
            && (self.z - other.z).abs() < EPSILON
    }
}

/// Hashes the XOR of the three coordinates' IEEE-754 bit patterns.
///
/// Because equality is tolerance-based and hashing is exact, hash
/// consistency with `==` holds only for bit-identical coordinates. Two
/// points that are merely within tolerance of each other may hash
/// differently. This mirrors the equality contract and is accepted rather
/// than worked around.
impl Hash for Point3D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coord_bits().hash(state);
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point3D[x={}, y={}, z={}]", self.x, self.y, self.z)
    }
}

impl From<[f64; 3]> for Point3D {
    fn from(arr: [f64; 3]) -> Self {
        Point3D::new(arr[0], arr[1], arr[2])
    }
}

impl From<(f64, f64, f64)> for Point3D {
    fn from(tuple: (f64, f64, f64)) -> Self {
        Point3D::new(tuple.0, tuple.1, tuple.2)
    }
}

impl From<Point3D> for [f64; 3] {
    fn from(p: Point3D) -> Self {
        [p.x, p.y, p.z]
    }
}
