//! Planar regions and their area moments.

use std::f64::consts::PI;

use log::trace;
use nalgebra::Vector3;

use crate::errors::{RegionKind, SectionError, SectionResult};
use crate::geometry::{Extents, Point};
use crate::plane::ReferencePlane;

/// Number of points used to sample a circle boundary.
const CIRCLE_SAMPLES: usize = 16;

/// A simple closed planar boundary.
///
/// Whether the region adds or removes material is decided by the list it is handed
/// to a [`Section`](crate::Section) in, not by the region itself.
#[derive(Clone, Debug, PartialEq)]
pub enum Region {
    /// Straight-edged boundary. The last vertex connects back to the first and
    /// either winding is accepted.
    Polygon(Vec<Point>),
    /// Full circle lying in the reference plane.
    Circle {
        /// Centre of the circle.
        center: Point,
        /// Radius of the circle.
        radius: f64,
    },
}

impl Region {
    /// Create a polygonal region from its vertices.
    #[must_use]
    pub fn polygon<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        Region::Polygon(vertices.into_iter().collect())
    }

    /// Create a circular region.
    #[must_use]
    pub const fn circle(center: Point, radius: f64) -> Self {
        Region::Circle { center, radius }
    }

    /// Create a rectangle centred on `center` with `width` along the plane's weak axis
    /// and `depth` along its strong axis.
    ///
    /// # Examples
    /// ```
    /// use sectionx::{point, ReferencePlane, Region};
    ///
    /// let plane = ReferencePlane::Xy;
    /// let moments = Region::rectangle(plane, point(0.0, 0.0, 0.0), 10.0, 20.0)
    ///     .moments(plane, 1e-9)
    ///     .unwrap();
    /// assert!((moments.area - 200.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn rectangle(plane: ReferencePlane, center: Point, width: f64, depth: f64) -> Self {
        let (half_width, half_depth) = (width / 2.0, depth / 2.0);
        Region::Polygon(vec![
            Point::in_plane(plane, center, -half_width, -half_depth),
            Point::in_plane(plane, center, half_width, -half_depth),
            Point::in_plane(plane, center, half_width, half_depth),
            Point::in_plane(plane, center, -half_width, half_depth),
        ])
    }

    /// Compute the area moments of the region in `plane`.
    ///
    /// # Errors
    ///
    /// See [`RegionMoments::compute`].
    pub fn moments(&self, plane: ReferencePlane, tolerance: f64) -> SectionResult<RegionMoments> {
        RegionMoments::compute(self, plane, tolerance)
    }

    /// Bounding box of the region.
    #[must_use]
    pub fn extents(&self, plane: ReferencePlane) -> Extents {
        match self {
            Region::Polygon(vertices) => Extents::from_points(vertices.iter().copied())
                .unwrap_or_else(|| Extents::from_point(Point::default())),
            Region::Circle { center, radius } => {
                let radius = *radius;
                Extents::from_point(Point::in_plane(plane, *center, -radius, -radius))
                    .union(Extents::from_point(Point::in_plane(
                        plane, *center, radius, radius,
                    )))
            }
        }
    }

    /// Whether the region is a usable closed boundary lying flat in `plane`.
    pub(crate) fn is_planar(&self, plane: ReferencePlane, tolerance: f64) -> bool {
        let normal = plane.normal_axis();
        match self {
            Region::Polygon(vertices) => {
                let Some(first) = vertices.first() else {
                    return false;
                };
                vertices.len() >= 3
                    && vertices.iter().all(|vertex| {
                        vertex.to_vector().iter().all(|c| c.is_finite())
                            && (vertex.coord(normal) - first.coord(normal)).abs() <= tolerance
                    })
            }
            Region::Circle { center, radius } => {
                radius.is_finite()
                    && *radius > 0.0
                    && center.to_vector().iter().all(|c| c.is_finite())
            }
        }
    }

    /// Whether the in-plane point `(across, up)` lies inside or on the boundary.
    pub(crate) fn contains(&self, plane: ReferencePlane, at: (f64, f64), tolerance: f64) -> bool {
        match self {
            Region::Polygon(vertices) => {
                let local = to_local(plane, vertices);
                polygon_contains(&local, at, tolerance)
            }
            Region::Circle { center, radius } => {
                let (cu, cv) = local(plane, *center);
                (at.0 - cu).hypot(at.1 - cv) <= radius + tolerance
            }
        }
    }

    /// In-plane points sampled along the boundary.
    pub(crate) fn boundary_samples(&self, plane: ReferencePlane) -> Vec<(f64, f64)> {
        match self {
            Region::Polygon(vertices) => to_local(plane, vertices),
            Region::Circle { center, radius } => {
                let (cu, cv) = local(plane, *center);
                (0..CIRCLE_SAMPLES)
                    .map(|step| {
                        let angle = 2.0 * PI * step as f64 / CIRCLE_SAMPLES as f64;
                        (cu + radius * angle.cos(), cv + radius * angle.sin())
                    })
                    .collect()
            }
        }
    }

    /// Area of the part of the region on the kept side of `cut`.
    pub(crate) fn clipped_area(&self, plane: ReferencePlane, cut: Cut) -> f64 {
        match self {
            Region::Polygon(vertices) => {
                let clipped = cut.clip(&to_local(plane, vertices));
                shoelace(&clipped).abs()
            }
            Region::Circle { center, radius } => {
                let radius = *radius;
                let full = PI * radius * radius;
                let offset = cut.bound - local(plane, *center).1;
                let above = if offset >= radius {
                    0.0
                } else if offset <= -radius {
                    full
                } else {
                    radius * radius * (offset / radius).acos()
                        - offset * (radius * radius - offset * offset).sqrt()
                };
                if cut.keep_above {
                    above
                } else {
                    full - above
                }
            }
        }
    }
}

/// What remains of a region on the kept side of a [`Cut`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Clipped {
    /// The remaining part, as a region of its own.
    Kept(Region),
    /// Nothing above the tolerance remains.
    Dropped,
    /// A circle crossed by the cut; its remainder is not a polygon or a circle.
    Curved,
}

impl Region {
    /// Part of the region on the kept side of `cut`.
    ///
    /// Polygons are clipped exactly. Circles are kept or dropped whole when they lie
    /// on one side of the cut and reported as [`Clipped::Curved`] otherwise.
    pub(crate) fn clipped(&self, plane: ReferencePlane, cut: Cut, tolerance: f64) -> Clipped {
        match self {
            Region::Polygon(vertices) => {
                let Some(first) = vertices.first() else {
                    return Clipped::Dropped;
                };
                let normal = first.coord(plane.normal_axis());
                let clipped = cut.clip(&to_local(plane, vertices));
                if clipped.len() < 3 || !(shoelace(&clipped).abs() > tolerance) {
                    return Clipped::Dropped;
                }
                Clipped::Kept(Region::Polygon(
                    clipped
                        .into_iter()
                        .map(|at| from_local(plane, at, normal))
                        .collect(),
                ))
            }
            Region::Circle { center, radius } => {
                let up = local(plane, *center).1;
                let (low, high) = (up - radius, up + radius);
                if cut.keeps(low) && cut.keeps(high) {
                    Clipped::Kept(self.clone())
                } else if !cut.keeps(low) && !cut.keeps(high) {
                    Clipped::Dropped
                } else if (cut.keep_above && high <= cut.bound)
                    || (!cut.keep_above && low >= cut.bound)
                {
                    // touches the cut line only
                    Clipped::Dropped
                } else {
                    Clipped::Curved
                }
            }
        }
    }
}

/// Area, centroid and centroidal second moments of a single region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionMoments {
    /// Enclosed area, always positive.
    pub area: f64,
    /// Centroid of the region.
    pub centroid: Point,
    /// Second moment of area about each ambient axis through the centroid.
    ///
    /// Entry `k` integrates the squared distance from ambient axis `k`, so for a
    /// region in `plane` the entry at `plane.weak_axis()` measures spread along the
    /// strong axis and vice versa. The normal entry is the polar moment.
    pub inertia: Vector3<f64>,
}

impl RegionMoments {
    /// Integrate `region` in the local frame of `plane`.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError::NonPositiveRadius`] for a circle whose radius is not a
    /// positive number and [`SectionError::DegenerateRegion`] when the area is not
    /// above `tolerance`.
    pub fn compute(
        region: &Region,
        plane: ReferencePlane,
        tolerance: f64,
    ) -> SectionResult<Self> {
        let (area, across, up, normal, about_across, about_up) = match region {
            Region::Polygon(vertices) => polygon_integrals(plane, vertices),
            Region::Circle { center, radius } => {
                if !(radius.is_finite() && *radius > 0.0) {
                    return Err(SectionError::NonPositiveRadius { radius: *radius });
                }
                let r2 = radius * radius;
                let area = PI * r2;
                let (cu, cv) = local(plane, *center);
                let second = area * r2 / 4.0;
                (area, cu, cv, center.coord(plane.normal_axis()), second, second)
            }
        };
        if !(area > tolerance) {
            return Err(SectionError::DegenerateRegion { area, tolerance });
        }

        let mut centroid = Vector3::zeros();
        centroid[plane.weak_axis()] = across;
        centroid[plane.strong_axis()] = up;
        centroid[plane.normal_axis()] = normal;

        let mut inertia = Vector3::zeros();
        inertia[plane.weak_axis()] = about_across;
        inertia[plane.strong_axis()] = about_up;
        inertia[plane.normal_axis()] = about_across + about_up;

        trace!("region moments: area = {area}, centroid = {centroid:?}, inertia = {inertia:?}");
        Ok(Self {
            area,
            centroid: centroid.into(),
            inertia,
        })
    }
}

/// Half-plane bounded by a line of constant strong-axis coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Cut {
    /// Strong-axis coordinate of the cutting line.
    pub bound: f64,
    /// Keep the side with larger strong-axis coordinates.
    pub keep_above: bool,
}

impl Cut {
    /// Whether an in-plane height lies on the kept side.
    fn keeps(self, up: f64) -> bool {
        if self.keep_above {
            up >= self.bound
        } else {
            up <= self.bound
        }
    }

    /// Sutherland–Hodgman clip of a polygon against the half-plane.
    fn clip(self, polygon: &[(f64, f64)]) -> Vec<(f64, f64)> {
        let n = polygon.len();
        let mut clipped = Vec::with_capacity(n + 2);
        for (idx, &current) in polygon.iter().enumerate() {
            let previous = polygon[(idx + n - 1) % n];
            let crossing = |from: (f64, f64), to: (f64, f64)| {
                let t = (self.bound - from.1) / (to.1 - from.1);
                (from.0 + t * (to.0 - from.0), self.bound)
            };
            match (self.keeps(previous.1), self.keeps(current.1)) {
                (true, true) => clipped.push(current),
                (false, true) => {
                    clipped.push(crossing(previous, current));
                    clipped.push(current);
                }
                (true, false) => clipped.push(crossing(previous, current)),
                (false, false) => {}
            }
        }
        clipped
    }
}

/// Check the planarity of every region and that each void sits inside a solid.
///
/// Regions are not re-validated during composition, so callers holding geometry of
/// unknown quality should run this first (or use [`Section::checked`](crate::Section::checked)).
///
/// # Errors
///
/// Returns [`SectionError::NonPlanarRegion`] for a region that is not flat in `plane`
/// and [`SectionError::VoidOutsideSolid`] for a void not contained by any solid.
pub fn validate_regions(
    plane: ReferencePlane,
    solids: &[Region],
    voids: &[Region],
    tolerance: f64,
) -> SectionResult<()> {
    for (kind, regions) in [(RegionKind::Solid, solids), (RegionKind::Void, voids)] {
        if let Some(index) = regions
            .iter()
            .position(|region| !region.is_planar(plane, tolerance))
        {
            return Err(SectionError::NonPlanarRegion { kind, index });
        }
    }
    for (index, void) in voids.iter().enumerate() {
        let samples = void.boundary_samples(plane);
        let contained = solids.iter().any(|solid| {
            samples
                .iter()
                .all(|&sample| solid.contains(plane, sample, tolerance))
        });
        if !contained {
            return Err(SectionError::VoidOutsideSolid { index });
        }
    }
    Ok(())
}

/// In-plane `(across, up)` coordinates of a point.
fn local(plane: ReferencePlane, point: Point) -> (f64, f64) {
    (point.coord(plane.weak_axis()), point.coord(plane.strong_axis()))
}

/// Point at in-plane `(across, up)` with the given normal coordinate.
fn from_local(plane: ReferencePlane, (across, up): (f64, f64), normal: f64) -> Point {
    let mut vector = Vector3::zeros();
    vector[plane.weak_axis()] = across;
    vector[plane.strong_axis()] = up;
    vector[plane.normal_axis()] = normal;
    vector.into()
}

fn to_local(plane: ReferencePlane, vertices: &[Point]) -> Vec<(f64, f64)> {
    vertices.iter().map(|&vertex| local(plane, vertex)).collect()
}

/// Signed polygon area, positive for counter-clockwise winding.
fn shoelace(polygon: &[(f64, f64)]) -> f64 {
    let n = polygon.len();
    0.5 * (0..n)
        .map(|idx| {
            let (u0, v0) = polygon[idx];
            let (u1, v1) = polygon[(idx + 1) % n];
            u0 * v1 - u1 * v0
        })
        .sum::<f64>()
}

/// Green's theorem integrals of a polygon.
///
/// Returns area, centroid (across, up, normal) and the centroidal second moments about
/// the across axis and the up axis. Vertices are shifted to the first vertex before
/// integrating to keep far-from-origin sections accurate.
fn polygon_integrals(
    plane: ReferencePlane,
    vertices: &[Point],
) -> (f64, f64, f64, f64, f64, f64) {
    let local = to_local(plane, vertices);
    let Some(&(u_ref, v_ref)) = local.first() else {
        return (0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    };
    let n = local.len();
    let normal =
        vertices.iter().map(|v| v.coord(plane.normal_axis())).sum::<f64>() / n as f64;

    let (mut twice_area, mut su, mut sv, mut suu, mut svv) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for idx in 0..n {
        let (u0, v0) = (local[idx].0 - u_ref, local[idx].1 - v_ref);
        let next = local[(idx + 1) % n];
        let (u1, v1) = (next.0 - u_ref, next.1 - v_ref);
        let cross = u0 * v1 - u1 * v0;
        twice_area += cross;
        su += (u0 + u1) * cross;
        sv += (v0 + v1) * cross;
        suu += (u0 * u0 + u0 * u1 + u1 * u1) * cross;
        svv += (v0 * v0 + v0 * v1 + v1 * v1) * cross;
    }

    let signed_area = 0.5 * twice_area;
    if signed_area == 0.0 {
        return (0.0, u_ref, v_ref, normal, 0.0, 0.0);
    }
    let area = signed_area.abs();
    let cu = su / (6.0 * signed_area);
    let cv = sv / (6.0 * signed_area);
    let orientation = signed_area.signum();
    let about_across = orientation * svv / 12.0 - area * cv * cv;
    let about_up = orientation * suu / 12.0 - area * cu * cu;
    (area, cu + u_ref, cv + v_ref, normal, about_across, about_up)
}

/// Point-in-polygon test that treats points within `tolerance` of an edge as inside.
fn polygon_contains(polygon: &[(f64, f64)], at: (f64, f64), tolerance: f64) -> bool {
    let n = polygon.len();
    let mut inside = false;
    for idx in 0..n {
        let a = polygon[idx];
        let b = polygon[(idx + 1) % n];
        if distance_to_segment(at, a, b) <= tolerance {
            return true;
        }
        if (a.1 > at.1) != (b.1 > at.1) {
            let crossing = a.0 + (at.1 - a.1) / (b.1 - a.1) * (b.0 - a.0);
            if at.0 < crossing {
                inside = !inside;
            }
        }
    }
    inside
}

fn distance_to_segment(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let length_sq = dx * dx + dy * dy;
    let t = if length_sq == 0.0 {
        0.0
    } else {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / length_sq).clamp(0.0, 1.0)
    };
    (p.0 - (a.0 + t * dx)).hypot(p.1 - (a.1 + t * dy))
}
