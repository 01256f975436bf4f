//! Multi-material sections reduced by the transformed-section method.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::composition::{first_moment, second_moments, Term};
use crate::errors::{SectionError, SectionResult};
use crate::geometry::{Extents, Point};
use crate::plane::ReferencePlane;
use crate::section::{Section, SectionLike};

/// How modulus ratios enter the second moment of a [`MultiSection`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InertiaScaling {
    /// Scale only the parallel-axis transfer term `area · d²`; each constituent's own
    /// second moment is added unscaled and the centroid is divided by the geometric
    /// area. This reproduces the established behaviour of the section tools and is
    /// the default.
    #[default]
    ParallelAxisOnly,
    /// Textbook transformed section: every constituent's area and own second moment
    /// are scaled by its modulus ratio, and the centroid is divided by the
    /// transformed area.
    Full,
}

/// A constituent of a [`MultiSection`] with its modulus ratio to the base.
#[derive(Clone, Debug, PartialEq)]
pub struct Constituent {
    /// The constituent section.
    pub section: Section,
    /// `E / E_base`.
    pub scale_factor: f64,
}

/// Several sections of different stiffness acting together.
///
/// The first constituent is the base section whose modulus normalises all others.
///
/// # Examples
/// ```
/// use sectionx::{point, MultiSection, ReferencePlane, Region, Section, SectionLike};
///
/// let plane = ReferencePlane::Xy;
/// let base = Section::new(
///     plane,
///     vec![Region::rectangle(plane, point(0.0, 0.0, 0.0), 10.0, 20.0)],
///     vec![],
/// )
/// .unwrap();
/// let combined = MultiSection::new(base.clone(), vec![]).unwrap();
/// assert!((combined.area() - base.area()).abs() < 1e-9);
/// assert!((combined.strong_inertia() - base.strong_inertia()).abs() < 1e-6);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MultiSection {
    /// Shared plane.
    plane: ReferencePlane,
    /// Base section first, then the additional sections in order.
    constituents: Vec<Constituent>,
    /// Scaling rule used for the second moments.
    scaling: InertiaScaling,
    /// Geometric area.
    area: f64,
    /// Modulus-weighted area.
    transformed_area: f64,
    /// Modulus-weighted centroid.
    centroid: Point,
    /// Strong-axis second moment about the centroid, in base-material units.
    strong_inertia: f64,
    /// Weak-axis second moment about the centroid, in base-material units.
    weak_inertia: f64,
    /// Union of the constituent bounding boxes.
    extents: Extents,
    /// Tolerance inherited from the base section.
    tolerance: f64,
}

impl MultiSection {
    /// Combine `base` with `others` using [`InertiaScaling::ParallelAxisOnly`].
    ///
    /// # Errors
    ///
    /// See [`MultiSection::with_scaling`].
    pub fn new(base: Section, others: Vec<Section>) -> SectionResult<Self> {
        Self::with_scaling(base, others, InertiaScaling::default())
    }

    /// Combine `base` with `others` using the given scaling rule.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError::PlaneMismatch`] when any section lies in a different
    /// plane from `base`. The check runs before any composition.
    pub fn with_scaling(
        base: Section,
        others: Vec<Section>,
        scaling: InertiaScaling,
    ) -> SectionResult<Self> {
        Self::check_planes(&base, &others)?;

        let plane = base.plane();
        let base_modulus = base.elastic_modulus();
        let tolerance = base.tolerance();
        if Self::has_mixed_moduli(&base, &others) {
            debug!("combining sections with different elastic moduli");
        }

        let constituents: Vec<Constituent> = std::iter::once(base)
            .chain(others)
            .map(|section| Constituent {
                scale_factor: section.elastic_modulus() / base_modulus,
                section,
            })
            .collect();

        let terms: Vec<Term> = constituents
            .iter()
            .map(|constituent| {
                let section = &constituent.section;
                let factor = constituent.scale_factor;
                let centroid = section.centroid().to_vector();
                match scaling {
                    InertiaScaling::ParallelAxisOnly => Term {
                        area: section.area(),
                        centroid,
                        own_strong: section.strong_inertia(),
                        own_weak: section.weak_inertia(),
                        sign: 1.0,
                        scale: factor,
                    },
                    InertiaScaling::Full => Term {
                        area: factor * section.area(),
                        centroid,
                        own_strong: factor * section.strong_inertia(),
                        own_weak: factor * section.weak_inertia(),
                        sign: 1.0,
                        scale: 1.0,
                    },
                }
            })
            .collect();

        let area = constituents.iter().map(|c| c.section.area()).sum::<f64>();
        let transformed_area = constituents
            .iter()
            .map(|c| c.scale_factor * c.section.area())
            .sum::<f64>();
        let first = first_moment(&terms);
        let centroid = match scaling {
            InertiaScaling::ParallelAxisOnly => first.moment / area,
            // term areas are already modulus-weighted, so this divides by the
            // transformed area
            InertiaScaling::Full => first.centroid(),
        };
        let (strong_inertia, weak_inertia) = second_moments(&terms, &centroid, plane);
        let extents = constituents
            .iter()
            .map(|c| c.section.extents())
            .reduce(Extents::union)
            .ok_or(SectionError::InvalidSection { area })?;

        debug!(
            "composed {plane} multi-section from {} constituent(s) ({scaling:?}): \
             area = {area}, Istrong = {strong_inertia}, Iweak = {weak_inertia}",
            constituents.len(),
        );

        Ok(Self {
            plane,
            constituents,
            scaling,
            area,
            transformed_area,
            centroid: centroid.into(),
            strong_inertia,
            weak_inertia,
            extents,
            tolerance,
        })
    }

    /// Check that every section in `others` lies in the same plane as `base`.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError::PlaneMismatch`] naming the first offending section.
    pub fn check_planes(base: &Section, others: &[Section]) -> SectionResult<()> {
        let expected = base.plane();
        match others
            .iter()
            .position(|section| section.plane() != expected)
        {
            Some(index) => Err(SectionError::PlaneMismatch {
                expected,
                found: others[index].plane(),
                index,
            }),
            None => Ok(()),
        }
    }

    /// Whether any section in `others` has a different modulus from `base`.
    #[must_use]
    pub fn has_mixed_moduli(base: &Section, others: &[Section]) -> bool {
        others
            .iter()
            .any(|section| section.elastic_modulus() != base.elastic_modulus())
    }

    /// Constituents, base first.
    #[must_use]
    pub fn constituents(&self) -> &[Constituent] {
        &self.constituents
    }

    /// The base section.
    #[must_use]
    pub fn base(&self) -> &Section {
        &self.constituents[0].section
    }

    /// Scaling rule used for the second moments.
    #[must_use]
    pub fn scaling(&self) -> InertiaScaling {
        self.scaling
    }

    /// Area of an equivalent section made entirely of the base material.
    #[must_use]
    pub fn transformed_area(&self) -> f64 {
        self.transformed_area
    }
}

impl SectionLike for MultiSection {
    fn plane(&self) -> ReferencePlane {
        self.plane
    }

    fn area(&self) -> f64 {
        self.area
    }

    fn centroid(&self) -> Point {
        self.centroid
    }

    fn strong_inertia(&self) -> f64 {
        self.strong_inertia
    }

    fn weak_inertia(&self) -> f64 {
        self.weak_inertia
    }

    fn extents(&self) -> Extents {
        self.extents
    }

    fn tolerance(&self) -> f64 {
        self.tolerance
    }
}
