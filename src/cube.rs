//! # 3D Cube Module
//!
//! A cube defined by eight vertices in a fixed topological order: indices
//! 0–3 form one face in cyclic order, 4–7 the opposite face in matching
//! cyclic order, and vertex `i` connects to vertex `i + 4`. A constant
//! 12-entry index table enumerates the edges.
//!
//! The type never verifies that the eight points actually form a geometric
//! cube; any eight points are accepted, and [`side_length`] is pragmatically
//! the distance between vertices 0 and 1. The derived measures trust that
//! single measurement.
//!
//! [`side_length`]: Cube3D::side_length

use crate::line::Line3D;
use crate::point::Point3D;
use crate::{GeomError, Result};
use log::{debug, error, info, warn};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Vertex index pairs for the 12 edges: four per face, four connecting.
const EDGE_INDICES: [[usize; 2]; 12] = [
    [0, 1], [1, 2], [2, 3], [3, 0], // bottom face
    [4, 5], [5, 6], [6, 7], [7, 4], // top face
    [0, 4], [1, 5], [2, 6], [3, 7], // vertical edges
];

/// A cube in 3D space defined by eight vertices.
///
/// Equality compares vertices index by index, so two cubes holding the same
/// eight points in a different order are *not* equal. The hash XOR-combines
/// all eight vertex hashes.
#[derive(Debug, Clone, Copy)]
pub struct Cube3D {
    vertices: [Point3D; 8],
}

impl Cube3D {
    /// Creates an axis-aligned cube centered at the given point.
    ///
    /// Vertices are placed at ±half-side offsets from the center in the
    /// fixed topological ordering.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::NonPositiveSideLength`] when `side_length` is
    /// zero or negative. A NaN side length is not an error: it is warned
    /// about and propagates into every vertex coordinate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geom3d::{Cube3D, Point3D};
    ///
    /// let cube = Cube3D::from_center(Point3D::origin(), 2.0).unwrap();
    /// assert_eq!(cube.volume(), 8.0);
    /// assert_eq!(cube.surface_area(), 24.0);
    /// ```
    pub fn from_center(center: Point3D, side_length: f64) -> Result<Self> {
        if side_length <= 0.0 {
            error!("Non-positive side length provided: {}", side_length);
            return Err(GeomError::NonPositiveSideLength(side_length));
        }
        if side_length.is_nan() {
            warn!("NaN side length provided for cube construction");
        }
        let h = side_length / 2.0;
        let (cx, cy, cz) = (center.x(), center.y(), center.z());
        let vertices = [
            Point3D::new(cx - h, cy - h, cz - h),
            Point3D::new(cx + h, cy - h, cz - h),
            Point3D::new(cx + h, cy + h, cz - h),
            Point3D::new(cx - h, cy + h, cz - h),
            Point3D::new(cx - h, cy - h, cz + h),
            Point3D::new(cx + h, cy - h, cz + h),
            Point3D::new(cx + h, cy + h, cz + h),
            Point3D::new(cx - h, cy + h, cz + h),
        ];
        info!("Created Cube3D centered at {} with side length {}", center, side_length);
        Ok(Cube3D { vertices })
    }

    /// Creates a cube from eight pre-positioned vertices.
    ///
    /// The vertices are copied into the cube, so later changes to the
    /// caller's slice cannot affect it. Whether the points form a true cube
    /// is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::VertexCount`] unless exactly eight vertices are
    /// supplied.
    pub fn from_vertices(vertices: &[Point3D]) -> Result<Self> {
        let Ok(vertices) = <[Point3D; 8]>::try_from(vertices) else {
            error!("Invalid vertex count for Cube3D construction: {}", vertices.len());
            return Err(GeomError::VertexCount(vertices.len()));
        };
        info!("Created Cube3D from provided vertices");
        Ok(Cube3D { vertices })
    }

    /// Returns a copy of the eight vertices in topological order.
    pub fn vertices(&self) -> [Point3D; 8] {
        self.vertices
    }

    /// Calculates the center as the arithmetic mean of the vertices.
    pub fn center(&self) -> Point3D {
        debug!("Calculating center of cube");
        let sum = self
            .vertices
            .iter()
            .fold(Point3D::origin(), |acc, v| acc + *v);
        Point3D::new(sum.x() / 8.0, sum.y() / 8.0, sum.z() / 8.0)
    }

    /// Calculates the side length as the distance between vertices 0 and 1.
    ///
    /// For a true cube every edge has this length; for an arbitrary vertex
    /// set the single measurement is trusted anyway, and the derived
    /// measures below build on it.
    pub fn side_length(&self) -> f64 {
        debug!("Calculating side length of cube");
        let length = self.vertices[0].distance_to(&self.vertices[1]);
        if length.is_nan() {
            warn!("NaN side length calculated");
        }
        length
    }

    /// Calculates the total edge length: 12 edges × side length.
    pub fn total_edge_length(&self) -> f64 {
        debug!("Calculating total edge length of cube");
        12.0 * self.side_length()
    }

    /// Calculates the volume: side length cubed.
    pub fn volume(&self) -> f64 {
        debug!("Calculating volume of cube");
        self.side_length().powi(3)
    }

    /// Calculates the surface area: 6 faces × side length squared.
    pub fn surface_area(&self) -> f64 {
        debug!("Calculating surface area of cube");
        6.0 * self.side_length().powi(2)
    }

    /// Produces the 12 edges as [`Line3D`] values in edge-table order.
    ///
    /// # Errors
    ///
    /// Returns [`GeomError::DegenerateLine`] when a degenerate vertex set
    /// places two edge-adjacent vertices at the same position.
    pub fn edges(&self) -> Result<Vec<Line3D>> {
        debug!("Generating edges for cube");
        EDGE_INDICES
            .iter()
            .map(|&[a, b]| Line3D::new(self.vertices[a], self.vertices[b]))
            .collect()
    }

    /// Returns a new cube rotated about the x-axis through its own center.
    ///
    /// Each vertex is shifted center-relative, rotated, and shifted back.
    pub fn rotate_x(&self, angle: f64) -> Cube3D {
        if angle.is_nan() {
            warn!("NaN angle provided for cube x-rotation");
        }
        debug!("Rotating cube around x-axis by {} radians", angle);
        self.map_about_center(|v| v.rotate_x(angle))
    }

    /// Returns a new cube rotated about the y-axis through its own center.
    pub fn rotate_y(&self, angle: f64) -> Cube3D {
        if angle.is_nan() {
            warn!("NaN angle provided for cube y-rotation");
        }
        debug!("Rotating cube around y-axis by {} radians", angle);
        self.map_about_center(|v| v.rotate_y(angle))
    }

    /// Returns a new cube rotated about the z-axis through its own center.
    pub fn rotate_z(&self, angle: f64) -> Cube3D {
        if angle.is_nan() {
            warn!("NaN angle provided for cube z-rotation");
        }
        debug!("Rotating cube around z-axis by {} radians", angle);
        self.map_about_center(|v| v.rotate_z(angle))
    }

    /// Returns a new cube with the given vector added to every vertex.
    pub fn translate(&self, vector: &Point3D) -> Cube3D {
        debug!("Translating cube by vector {}", vector);
        Cube3D {
            vertices: self.vertices.map(|v| v + *vector),
        }
    }

    /// Applies an origin-centered transform to each vertex relative to the
    /// cube center.
    fn map_about_center(&self, f: impl Fn(Point3D) -> Point3D) -> Cube3D {
        let center = self.center();
        Cube3D {
            vertices: self.vertices.map(|v| center + f(v - center)),
        }
    }
}

impl PartialEq for Cube3D {
    /// Positional comparison: vertex `i` must equal vertex `i` of the other
    /// cube. The same eight points in another order compare unequal.
    fn eq(&self, other: &Self) -> bool {
        self.vertices
            .iter()
            .zip(other.vertices.iter())
            .all(|(a, b)| a == b)
    }
}

/// XORs all eight vertex hashes.
impl Hash for Cube3D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vertices
            .iter()
            .fold(0u64, |acc, v| acc ^ v.coord_bits())
            .hash(state);
    }
}

impl fmt::Display for Cube3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cube3D[center={}, sideLength={}]",
            self.center(),
            self.side_length()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;
    use std::collections::hash_map::DefaultHasher;
    use std::f64::consts::FRAC_PI_2;

    fn unit_cube() -> Cube3D {
        Cube3D::from_center(Point3D::origin(), 2.0).unwrap()
    }

    fn hash_of(c: &Cube3D) -> u64 {
        let mut hasher = DefaultHasher::new();
        c.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_from_center_vertex_layout() {
        let cube = unit_cube();
        let v = cube.vertices();
        assert_eq!(v[0], Point3D::new(-1.0, -1.0, -1.0));
        assert_eq!(v[1], Point3D::new(1.0, -1.0, -1.0));
        assert_eq!(v[2], Point3D::new(1.0, 1.0, -1.0));
        assert_eq!(v[3], Point3D::new(-1.0, 1.0, -1.0));
        assert_eq!(v[6], Point3D::new(1.0, 1.0, 1.0));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    fn test_from_center_rejects_non_positive_side(#[case] side: f64) {
        let result = Cube3D::from_center(Point3D::origin(), side);
        assert!(matches!(result, Err(GeomError::NonPositiveSideLength(_))));
    }

    #[test]
    fn test_from_center_accepts_nan_side() {
        // NaN is degenerate but never an error; it spreads into every
        // vertex coordinate and through the derived measures.
        let cube = Cube3D::from_center(Point3D::origin(), f64::NAN).unwrap();
        for v in cube.vertices() {
            assert!(v.x().is_nan());
            assert!(v.y().is_nan());
            assert!(v.z().is_nan());
        }
        assert!(cube.side_length().is_nan());
        assert!(cube.volume().is_nan());
    }

    #[test]
    fn test_from_vertices_rejects_wrong_count() {
        let pts = vec![Point3D::origin(); 7];
        assert!(matches!(
            Cube3D::from_vertices(&pts),
            Err(GeomError::VertexCount(7))
        ));
        let pts = vec![Point3D::origin(); 9];
        assert!(matches!(
            Cube3D::from_vertices(&pts),
            Err(GeomError::VertexCount(9))
        ));
    }

    #[test]
    fn test_from_vertices_copies_input() {
        let mut pts: Vec<Point3D> = unit_cube().vertices().to_vec();
        let cube = Cube3D::from_vertices(&pts).unwrap();
        pts[0].set_x(99.0);
        assert_eq!(cube.vertices()[0], Point3D::new(-1.0, -1.0, -1.0));
    }

    #[test]
    fn test_vertices_returns_independent_copy() {
        let cube = unit_cube();
        let mut copy = cube.vertices();
        copy[0].set_x(99.0);
        assert_eq!(cube.vertices()[0], Point3D::new(-1.0, -1.0, -1.0));
    }

    #[test]
    fn test_center() {
        let cube = Cube3D::from_center(Point3D::new(1.0, -2.0, 3.5), 4.0).unwrap();
        assert_eq!(cube.center(), Point3D::new(1.0, -2.0, 3.5));
    }

    #[test]
    fn test_measures_for_side_two() {
        let cube = unit_cube();
        assert_abs_diff_eq!(cube.side_length(), 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cube.total_edge_length(), 24.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cube.volume(), 8.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cube.surface_area(), 24.0, epsilon = 1e-9);
    }

    #[test]
    fn test_side_length_trusts_first_edge() {
        // Not a cube at all; side_length still measures vertices 0 and 1.
        let mut pts = unit_cube().vertices();
        pts[1] = Point3D::new(2.0, -1.0, -1.0);
        let skewed = Cube3D::from_vertices(&pts).unwrap();
        assert_abs_diff_eq!(skewed.side_length(), 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(skewed.volume(), 27.0, epsilon = 1e-9);
    }

    #[test]
    fn test_edges() {
        let edges = unit_cube().edges().unwrap();
        assert_eq!(edges.len(), 12);
        for edge in &edges {
            assert_abs_diff_eq!(edge.length(), 2.0, epsilon = 1e-9);
        }
        // Table order: first edge joins vertices 0 and 1.
        assert_eq!(edges[0].start(), Point3D::new(-1.0, -1.0, -1.0));
        assert_eq!(edges[0].end(), Point3D::new(1.0, -1.0, -1.0));
    }

    #[test]
    fn test_edges_degenerate_vertex_set() {
        let pts = [Point3D::origin(); 8];
        let degenerate = Cube3D::from_vertices(&pts).unwrap();
        assert!(matches!(
            degenerate.edges(),
            Err(GeomError::DegenerateLine)
        ));
    }

    #[rstest]
    #[case(FRAC_PI_2)]
    #[case(0.3)]
    #[case(-1.7)]
    fn test_rotation_preserves_center_and_measures(#[case] angle: f64) {
        let cube = Cube3D::from_center(Point3D::new(2.0, 3.0, 4.0), 2.0).unwrap();
        for rotated in [
            cube.rotate_x(angle),
            cube.rotate_y(angle),
            cube.rotate_z(angle),
        ] {
            assert_eq!(rotated.center(), cube.center());
            assert_abs_diff_eq!(rotated.side_length(), 2.0, epsilon = 1e-9);
            assert_abs_diff_eq!(rotated.volume(), 8.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_rotate_z_quarter_turn_moves_vertices() {
        let cube = unit_cube();
        let rotated = cube.rotate_z(FRAC_PI_2);
        // (−1, −1, −1) about the origin-centered z-axis becomes (1, −1, −1).
        assert_eq!(rotated.vertices()[0], Point3D::new(1.0, -1.0, -1.0));
        assert_ne!(rotated, cube);
        // A full turn in quarter steps comes back around.
        let full = rotated
            .rotate_z(FRAC_PI_2)
            .rotate_z(FRAC_PI_2)
            .rotate_z(FRAC_PI_2);
        assert_eq!(full, cube);
    }

    #[test]
    fn test_rotation_does_not_mutate_receiver() {
        let cube = unit_cube();
        let _ = cube.rotate_x(1.0);
        assert_eq!(cube.vertices()[0], Point3D::new(-1.0, -1.0, -1.0));
    }

    #[test]
    fn test_translate() {
        let cube = unit_cube();
        let moved = cube.translate(&Point3D::new(1.0, 2.0, 3.0));
        assert_eq!(moved.center(), Point3D::new(1.0, 2.0, 3.0));
        assert_abs_diff_eq!(moved.side_length(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_translate_round_trip() {
        let cube = unit_cube();
        let v = Point3D::new(0.5, -1.25, 3.0);
        let back = cube.translate(&v).translate(&Point3D::new(-v.x(), -v.y(), -v.z()));
        assert_eq!(back, cube);
    }

    #[test]
    fn test_equality_same_order() {
        let a = unit_cube();
        let b = Cube3D::from_vertices(&a.vertices()).unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_equality_not_permutation_invariant() {
        let a = unit_cube();
        let mut pts = a.vertices();
        pts.swap(0, 1);
        let b = Cube3D::from_vertices(&pts).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_format() {
        let cube = unit_cube();
        assert_eq!(
            cube.to_string(),
            "Cube3D[center=Point3D[x=0, y=0, z=0], sideLength=2]"
        );
    }
}
