//! Fundamental geometric types for section modelling.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::plane::ReferencePlane;

/// Position in three dimensional space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Distance along the global X axis.
    pub x: f64,
    /// Distance along the global Y axis.
    pub y: f64,
    /// Distance along the global Z axis.
    pub z: f64,
}

impl Point {
    /// Create a [`Point`] with explicit coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Convert the point into an algebraic vector.
    #[must_use]
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Coordinate along ambient axis `axis` (0 = X, 1 = Y, 2 = Z). Callers pass axes
    /// from [`ReferencePlane`], which are always in range.
    #[must_use]
    pub(crate) fn coord(self, axis: usize) -> f64 {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("axis index {axis} out of range"),
        }
    }

    /// Offset `origin` by `across` along the plane's weak (horizontal) axis and by
    /// `up` along its strong (vertical) axis.
    ///
    /// # Examples
    /// ```
    /// use sectionx::{point, Point, ReferencePlane};
    ///
    /// let p = Point::in_plane(ReferencePlane::Yz, point(0.0, 1.0, 2.0), 3.0, 4.0);
    /// assert_eq!(p, point(0.0, 4.0, 6.0));
    /// ```
    #[must_use]
    pub fn in_plane(plane: ReferencePlane, origin: Point, across: f64, up: f64) -> Self {
        let mut vector = origin.to_vector();
        vector[plane.weak_axis()] += across;
        vector[plane.strong_axis()] += up;
        vector.into()
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.to_vector() - other.to_vector()).norm()
    }
}

impl From<Vector3<f64>> for Point {
    fn from(value: Vector3<f64>) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl From<Point> for Vector3<f64> {
    fn from(value: Point) -> Self {
        value.to_vector()
    }
}

/// Convenience helper for creating [`Point`] instances.
///
/// # Examples
/// ```
/// use sectionx::point;
///
/// let origin = point(0.0, 0.0, 0.0);
/// assert_eq!(origin.x, 0.0);
/// ```
#[must_use]
pub const fn point(x: f64, y: f64, z: f64) -> Point {
    Point::new(x, y, z)
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extents {
    /// Minimum corner.
    pub min: Point,
    /// Maximum corner.
    pub max: Point,
}

impl Extents {
    /// Bounding box of a single point.
    #[must_use]
    pub const fn from_point(point: Point) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Bounding box of a set of points, or `None` when the set is empty.
    #[must_use]
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        points
            .into_iter()
            .map(Self::from_point)
            .reduce(Self::union)
    }

    /// Smallest box containing both boxes.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.to_vector().inf(&other.min.to_vector()).into(),
            max: self.max.to_vector().sup(&other.max.to_vector()).into(),
        }
    }

    /// Length of the box along ambient axis `axis`.
    #[must_use]
    pub fn span(&self, axis: usize) -> f64 {
        self.max.coord(axis) - self.min.coord(axis)
    }

    /// The four extreme corners of the box as seen in `plane`.
    ///
    /// Corners are ordered top-left, top-right, bottom-left, bottom-right, with "up"
    /// along the plane's strong axis and "right" along its weak axis. The normal
    /// coordinate is taken from the minimum corner.
    #[must_use]
    pub fn corners(&self, plane: ReferencePlane) -> [Point; 4] {
        let strong = plane.strong_axis();
        let weak = plane.weak_axis();
        let corner = |right: bool, top: bool| {
            let mut vector = self.min.to_vector();
            vector[weak] = if right {
                self.max.coord(weak)
            } else {
                self.min.coord(weak)
            };
            vector[strong] = if top {
                self.max.coord(strong)
            } else {
                self.min.coord(strong)
            };
            Point::from(vector)
        };
        [
            corner(false, true),
            corner(true, true),
            corner(false, false),
            corner(true, false),
        ]
    }
}
