//! # 3D Line Module
//!
//! An infinite line in 3D space, represented by two distinct defining
//! points. The points are retained as reference anchors for [`length`] and
//! [`direction`]; the line itself extends without bound in both directions.
//!
//! The distinctness of the two points is an invariant: it is checked at
//! construction and again on every endpoint mutation, because a line with
//! coincident defining points has no direction.
//!
//! [`length`]: Line3D::length
//! [`direction`]: Line3D::direction

use crate::point::Point3D;
use crate::{GeomError, Result, EPSILON};
use log::{debug, error, info, warn};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An infinite line defined by two distinct points.
///
/// Equality is order-insensitive over the defining points: a line from `a`
/// to `b` equals a line from `b` to `a`. The hash XOR-combines the endpoint
/// hashes, so it is invariant under the same swap.
#[derive(Debug, Clone, Copy)]
pub struct Line3D {
    start: Point3D,
    end: Point3D,
}

impl Line3D {
    /// Creates a line through the two given points.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::DegenerateLine`] when the points are equal under
    /// the tolerant point comparison, since coincident points cannot define
    /// a direction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geom3d::{Line3D, Point3D};
    ///
    /// let line = Line3D::new(Point3D::origin(), Point3D::new(1.0, 0.0, 0.0)).unwrap();
    /// assert_eq!(line.length(), 1.0);
    ///
    /// let p = Point3D::new(1.0, 2.0, 3.0);
    /// assert!(Line3D::new(p, p).is_err());
    /// ```
    pub fn new(start: Point3D, end: Point3D) -> Result<Self> {
        if start == end {
            error!("Start and end points are identical, cannot define a line");
            return Err(GeomError::DegenerateLine);
        }
        info!("Created Line3D from {} to {}", start, end);
        Ok(Line3D { start, end })
    }

    /// Returns the starting point.
    #[inline]
    pub fn start(&self) -> Point3D {
        self.start
    }

    /// Returns the ending point.
    #[inline]
    pub fn end(&self) -> Point3D {
        self.end
    }

    /// Replaces the starting point.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::DegenerateLine`] when the new start equals the
    /// current end; the line is left unchanged in that case.
    pub fn set_start(&mut self, start: Point3D) -> Result<()> {
        if start == self.end {
            error!("New start point equals end, cannot define a line");
            return Err(GeomError::DegenerateLine);
        }
        self.start = start;
        info!("Updated start to {}", start);
        Ok(())
    }

    /// Replaces the ending point.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::DegenerateLine`] when the new end equals the
    /// current start; the line is left unchanged in that case.
    pub fn set_end(&mut self, end: Point3D) -> Result<()> {
        if end == self.start {
            error!("New end point equals start, cannot define a line");
            return Err(GeomError::DegenerateLine);
        }
        self.end = end;
        info!("Updated end to {}", end);
        Ok(())
    }

    /// Calculates the distance between the two defining points.
    ///
    /// The line is infinite, so this is the length of the defining segment
    /// rather than a property of the line itself.
    pub fn length(&self) -> f64 {
        debug!("Calculating length between defining points {} and {}", self.start, self.end);
        self.start.distance_to(&self.end)
    }

    /// Returns the direction vector `end − start` (not normalized).
    pub fn direction(&self) -> Point3D {
        debug!("Computing direction vector for line");
        self.end - self.start
    }

    /// Calculates the shortest distance between this infinite line and
    /// another.
    ///
    /// For non-parallel lines the skew-line formula
    /// `|w · (u × v)| / |u × v|` is used, where `u` and `v` are the two
    /// direction vectors and `w` joins the two start points; intersecting
    /// lines fall out of the same formula with distance 0. When `u × v`
    /// vanishes the lines are parallel or collinear and the point-to-line
    /// formula `|w × u| / |u|` applies.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geom3d::{Line3D, Point3D};
    ///
    /// // The x-axis and its copy lifted one unit along z are parallel at
    /// // distance 1.
    /// let a = Line3D::new(Point3D::origin(), Point3D::new(1.0, 0.0, 0.0)).unwrap();
    /// let b = Line3D::new(Point3D::new(0.0, 0.0, 1.0), Point3D::new(1.0, 0.0, 1.0)).unwrap();
    /// assert!((a.shortest_distance_to(&b) - 1.0).abs() < 1e-9);
    /// ```
    pub fn shortest_distance_to(&self, other: &Line3D) -> f64 {
        debug!("Calculating shortest distance to another line");
        let u = self.direction();
        let v = other.direction();
        let w = self.start - other.start;

        let cross_uv = u.cross(&v);
        let cross_uv_mag = cross_uv.magnitude();

        if cross_uv_mag == 0.0 {
            // Parallel or collinear
            let cross_wu = w.cross(&u);
            let u_mag = u.magnitude();
            if u_mag == 0.0 {
                // Unreachable while the distinctness invariant holds.
                warn!("Zero magnitude direction vector encountered");
                return 0.0;
            }
            cross_wu.magnitude() / u_mag
        } else {
            // Skew or intersecting
            w.dot(&cross_uv).abs() / cross_uv_mag
        }
    }

    /// Checks whether this line is parallel to another.
    ///
    /// True when the magnitude of the cross product of the two direction
    /// vectors falls below [`EPSILON`]; collinear lines count as parallel.
    pub fn is_parallel_to(&self, other: &Line3D) -> bool {
        debug!("Checking if lines are parallel");
        let cross = self.direction().cross(&other.direction());
        cross.magnitude() < EPSILON
    }
}

impl PartialEq for Line3D {
    /// Order-insensitive comparison of the defining point pair.
    fn eq(&self, other: &Self) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }
}

/// XORs the endpoint hashes so the hash is invariant under endpoint swap,
/// matching the order-insensitive equality.
impl Hash for Line3D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.start.coord_bits() ^ self.end.coord_bits()).hash(state);
    }
}

impl fmt::Display for Line3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line3D[start={}, end={}]", self.start, self.end)
    }
}
