//! Elastic section moduli and other derived properties.

use serde::{Deserialize, Serialize};

use crate::errors::{Fiber, SectionError, SectionResult};
use crate::geometry::Point;
use crate::section::SectionLike;

/// Derived, read-only properties of a composed section.
///
/// The struct is a snapshot: it keeps no reference to the section it came from.
///
/// # Examples
/// ```
/// use sectionx::{point, ReferencePlane, Region, Section, SectionProperties};
///
/// let plane = ReferencePlane::Xy;
/// let section = Section::new(
///     plane,
///     vec![Region::rectangle(plane, point(0.0, 0.0, 0.0), 10.0, 20.0)],
///     vec![],
/// )
/// .unwrap();
/// let properties = SectionProperties::new(&section).unwrap();
/// assert!((properties.strong_modulus_top - 2000.0 / 3.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Net area.
    pub area: f64,
    /// Centroid.
    pub centroid: Point,
    /// Strong-axis second moment of area.
    pub strong_inertia: f64,
    /// Weak-axis second moment of area.
    pub weak_inertia: f64,
    /// Section modulus for the top fibre in strong-axis bending.
    pub strong_modulus_top: f64,
    /// Section modulus for the bottom fibre in strong-axis bending.
    pub strong_modulus_bottom: f64,
    /// Section modulus for the left fibre in weak-axis bending.
    pub weak_modulus_left: f64,
    /// Section modulus for the right fibre in weak-axis bending.
    pub weak_modulus_right: f64,
    /// Strong-axis radius of gyration.
    pub strong_radius_of_gyration: f64,
    /// Weak-axis radius of gyration.
    pub weak_radius_of_gyration: f64,
    /// Overall depth.
    pub depth: f64,
    /// Overall width.
    pub width: f64,
}

impl SectionProperties {
    /// Evaluate the properties of `section`.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError::DegenerateFiberDistance`] when the centroid lies within
    /// the section's tolerance of an extreme fibre.
    pub fn new<S: SectionLike + ?Sized>(section: &S) -> SectionResult<Self> {
        let plane = section.plane();
        let strong = plane.strong_axis();
        let weak = plane.weak_axis();
        let centroid = section.centroid();
        let tolerance = section.tolerance();
        let [top_left, top_right, bottom_left, _] = section.corners();

        let fibre = |fiber: Fiber, corner: Point, axis: usize| {
            let distance = (corner.coord(axis) - centroid.coord(axis)).abs();
            if distance > tolerance {
                Ok(distance)
            } else {
                Err(SectionError::DegenerateFiberDistance { fiber, distance })
            }
        };
        let top = fibre(Fiber::StrongTop, top_left, strong)?;
        let bottom = fibre(Fiber::StrongBottom, bottom_left, strong)?;
        let left = fibre(Fiber::WeakLeft, top_left, weak)?;
        let right = fibre(Fiber::WeakRight, top_right, weak)?;

        let area = section.area();
        let strong_inertia = section.strong_inertia();
        let weak_inertia = section.weak_inertia();

        Ok(Self {
            area,
            centroid,
            strong_inertia,
            weak_inertia,
            strong_modulus_top: strong_inertia / top,
            strong_modulus_bottom: strong_inertia / bottom,
            weak_modulus_left: weak_inertia / left,
            weak_modulus_right: weak_inertia / right,
            strong_radius_of_gyration: (strong_inertia / area).sqrt(),
            weak_radius_of_gyration: (weak_inertia / area).sqrt(),
            depth: top_left.distance_to(bottom_left),
            width: top_left.distance_to(top_right),
        })
    }

    /// Smaller of the two strong-axis moduli, governing extreme-fibre stress.
    #[must_use]
    pub fn strong_modulus_min(&self) -> f64 {
        self.strong_modulus_top.min(self.strong_modulus_bottom)
    }

    /// Smaller of the two weak-axis moduli.
    #[must_use]
    pub fn weak_modulus_min(&self) -> f64 {
        self.weak_modulus_left.min(self.weak_modulus_right)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::config::AnalysisConfig;
    use crate::geometry::{point, Extents};
    use crate::plane::ReferencePlane;
    use crate::region::Region;
    use crate::section::Section;

    /// Fixed-value section for exercising the modulus formula in isolation.
    struct Fixed {
        centroid: Point,
        extents: Extents,
    }

    impl SectionLike for Fixed {
        fn plane(&self) -> ReferencePlane {
            ReferencePlane::Xy
        }
        fn area(&self) -> f64 {
            1.0
        }
        fn centroid(&self) -> Point {
            self.centroid
        }
        fn strong_inertia(&self) -> f64 {
            120.0
        }
        fn weak_inertia(&self) -> f64 {
            60.0
        }
        fn extents(&self) -> Extents {
            self.extents
        }
        fn tolerance(&self) -> f64 {
            AnalysisConfig::DEFAULT_TOLERANCE
        }
    }

    #[test]
    fn rectangle_moduli_match_closed_form() {
        let plane = ReferencePlane::Xy;
        let section = Section::new(
            plane,
            vec![Region::rectangle(plane, point(0.0, 0.0, 0.0), 10.0, 20.0)],
            vec![],
        )
        .unwrap();
        let properties = SectionProperties::new(&section).unwrap();
        assert_relative_eq!(properties.strong_modulus_top, 666.666_666_7, epsilon = 1e-6);
        assert_relative_eq!(properties.strong_modulus_bottom, 666.666_666_7, epsilon = 1e-6);
        assert_relative_eq!(properties.weak_modulus_left, 333.333_333_3, epsilon = 1e-6);
        assert_relative_eq!(properties.weak_modulus_right, 333.333_333_3, epsilon = 1e-6);
        assert_relative_eq!(properties.depth, 20.0);
        assert_relative_eq!(properties.width, 10.0);
        assert_relative_eq!(
            properties.strong_radius_of_gyration,
            20.0 / 12.0_f64.sqrt(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn doubling_fibre_distance_halves_modulus() {
        let near = Fixed {
            centroid: point(0.0, 0.0, 0.0),
            extents: Extents::from_points([point(-1.0, -2.0, 0.0), point(1.0, 2.0, 0.0)]).unwrap(),
        };
        let far = Fixed {
            centroid: point(0.0, 0.0, 0.0),
            extents: Extents::from_points([point(-1.0, -2.0, 0.0), point(1.0, 4.0, 0.0)]).unwrap(),
        };
        let near = SectionProperties::new(&near).unwrap();
        let far = SectionProperties::new(&far).unwrap();
        assert_relative_eq!(far.strong_modulus_top, near.strong_modulus_top / 2.0);
        assert_relative_eq!(far.strong_modulus_bottom, near.strong_modulus_bottom);
        assert_relative_eq!(far.strong_modulus_min(), 30.0);
    }

    #[test]
    fn centroid_on_fibre_is_rejected() {
        let section = Fixed {
            centroid: point(0.0, 2.0, 0.0),
            extents: Extents::from_points([point(-1.0, -2.0, 0.0), point(1.0, 2.0, 0.0)]).unwrap(),
        };
        let error = SectionProperties::new(&section).expect_err("centroid on top fibre");
        assert_eq!(
            error,
            SectionError::DegenerateFiberDistance {
                fiber: Fiber::StrongTop,
                distance: 0.0
            }
        );
    }

    #[test]
    fn unsymmetric_section_has_distinct_moduli() {
        let plane = ReferencePlane::Xy;
        // T shape: 10 x 2 flange on top of a 2 x 8 stem.
        let section = Section::new(
            plane,
            vec![
                Region::rectangle(plane, point(0.0, 9.0, 0.0), 10.0, 2.0),
                Region::rectangle(plane, point(0.0, 4.0, 0.0), 2.0, 8.0),
            ],
            vec![],
        )
        .unwrap();
        let properties = SectionProperties::new(&section).unwrap();
        // centroid at (20 * 9 + 16 * 4) / 36
        let centroid = 244.0 / 36.0;
        assert_relative_eq!(properties.centroid.y, centroid, epsilon = 1e-12);
        assert_relative_eq!(
            properties.strong_modulus_top,
            properties.strong_inertia / (10.0 - centroid),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            properties.strong_modulus_bottom,
            properties.strong_inertia / centroid,
            epsilon = 1e-9
        );
        assert!(properties.strong_modulus_top > properties.strong_modulus_bottom);
    }
}
