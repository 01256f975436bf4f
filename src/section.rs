//! Single-material sections composed from solid and void regions.

use log::{debug, trace};

use crate::composition::{first_moment, second_moments, Term};
use crate::config::AnalysisConfig;
use crate::errors::{RegionKind, SectionError, SectionResult};
use crate::geometry::{Extents, Point};
use crate::plane::ReferencePlane;
use crate::region::{validate_regions, Region};

/// Read-only view shared by every kind of composed section.
pub trait SectionLike {
    /// Plane the section lies in.
    fn plane(&self) -> ReferencePlane;
    /// Net area.
    fn area(&self) -> f64;
    /// Centroid.
    fn centroid(&self) -> Point;
    /// Second moment of area about the strong (horizontal) axis through the centroid.
    fn strong_inertia(&self) -> f64;
    /// Second moment of area about the weak (vertical) axis through the centroid.
    fn weak_inertia(&self) -> f64;
    /// Bounding box of the material.
    fn extents(&self) -> Extents;
    /// Degeneracy tolerance the section was built with.
    fn tolerance(&self) -> f64;

    /// Corners of the bounding box: top-left, top-right, bottom-left, bottom-right.
    fn corners(&self) -> [Point; 4] {
        self.extents().corners(self.plane())
    }

    /// Overall depth along the strong axis.
    fn depth(&self) -> f64 {
        let [top_left, _, bottom_left, _] = self.corners();
        top_left.distance_to(bottom_left)
    }

    /// Overall width along the weak axis.
    fn width(&self) -> f64 {
        let [top_left, top_right, _, _] = self.corners();
        top_left.distance_to(top_right)
    }
}

/// Cross-section of a single material built from solid regions minus void regions.
///
/// All properties are computed once at construction; the section is immutable
/// afterwards and owns copies of its regions.
///
/// # Examples
/// ```
/// use sectionx::{point, ReferencePlane, Region, Section, SectionLike};
///
/// let plane = ReferencePlane::Xy;
/// let origin = point(0.0, 0.0, 0.0);
/// let section = Section::new(
///     plane,
///     vec![Region::rectangle(plane, origin, 10.0, 20.0)],
///     vec![Region::rectangle(plane, origin, 4.0, 4.0)],
/// )
/// .unwrap();
/// assert!((section.area() - 184.0).abs() < 1e-9);
/// assert!(section.centroid().y.abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    /// Plane the regions lie in.
    plane: ReferencePlane,
    /// Regions adding material.
    solids: Vec<Region>,
    /// Regions removing material.
    voids: Vec<Region>,
    /// Elastic modulus, only used when combining materials.
    elastic_modulus: f64,
    /// Settings the section was built with.
    config: AnalysisConfig,
    /// Net area.
    area: f64,
    /// Area-weighted centroid.
    centroid: Point,
    /// Strong-axis second moment about the centroid.
    strong_inertia: f64,
    /// Weak-axis second moment about the centroid.
    weak_inertia: f64,
    /// Bounding box of the solid regions.
    extents: Extents,
}

impl Section {
    /// Compose a section with unit modulus and the default configuration.
    ///
    /// # Errors
    ///
    /// See [`Section::with_options`].
    pub fn new(
        plane: ReferencePlane,
        solids: Vec<Region>,
        voids: Vec<Region>,
    ) -> SectionResult<Self> {
        Self::with_options(plane, solids, voids, 1.0, &AnalysisConfig::default())
    }

    /// Compose a section from its regions.
    ///
    /// Regions are assumed to be closed and planar in `plane`; see
    /// [`Section::checked`] for a validating constructor.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError::InvalidConfig`] for an unusable configuration,
    /// [`SectionError::NonPositiveModulus`] when `elastic_modulus` is not positive,
    /// [`SectionError::DegenerateRegion`] when any region has no area and
    /// [`SectionError::InvalidSection`] when the voids consume all the material.
    pub fn with_options(
        plane: ReferencePlane,
        solids: Vec<Region>,
        voids: Vec<Region>,
        elastic_modulus: f64,
        config: &AnalysisConfig,
    ) -> SectionResult<Self> {
        config.validate()?;
        if !elastic_modulus.is_finite() || elastic_modulus <= 0.0 {
            return Err(SectionError::NonPositiveModulus { elastic_modulus });
        }

        let terms = Self::terms(plane, &solids, &voids, config.tolerance)?;
        let first = first_moment(&terms);
        if !(first.area > config.tolerance) {
            return Err(SectionError::InvalidSection { area: first.area });
        }
        let centroid = first.centroid();
        let (strong_inertia, weak_inertia) = second_moments(&terms, &centroid, plane);

        let extents = solids
            .iter()
            .map(|region| region.extents(plane))
            .reduce(Extents::union)
            .ok_or(SectionError::InvalidSection { area: first.area })?;

        debug!(
            "composed {plane} section from {} solid(s) and {} void(s): \
             area = {}, Istrong = {strong_inertia}, Iweak = {weak_inertia}",
            solids.len(),
            voids.len(),
            first.area,
        );

        Ok(Self {
            plane,
            solids,
            voids,
            elastic_modulus,
            config: *config,
            area: first.area,
            centroid: centroid.into(),
            strong_inertia,
            weak_inertia,
            extents,
        })
    }

    /// Validate the regions with [`validate_regions`] and then compose the section.
    ///
    /// # Errors
    ///
    /// Returns the validation errors of [`validate_regions`] followed by those of
    /// [`Section::with_options`].
    pub fn checked(
        plane: ReferencePlane,
        solids: Vec<Region>,
        voids: Vec<Region>,
        elastic_modulus: f64,
        config: &AnalysisConfig,
    ) -> SectionResult<Self> {
        validate_regions(plane, &solids, &voids, config.tolerance)?;
        Self::with_options(plane, solids, voids, elastic_modulus, config)
    }

    /// Integrate every region into a signed composition term.
    fn terms(
        plane: ReferencePlane,
        solids: &[Region],
        voids: &[Region],
        tolerance: f64,
    ) -> SectionResult<Vec<Term>> {
        let strong = plane.strong_axis();
        let weak = plane.weak_axis();
        let tagged = solids
            .iter()
            .map(|region| (RegionKind::Solid, region))
            .chain(voids.iter().map(|region| (RegionKind::Void, region)));
        tagged
            .map(|(kind, region)| {
                let moments = region.moments(plane, tolerance)?;
                trace!("{kind} region contributes area {}", moments.area);
                // The moment about the strong axis integrates spread along the strong
                // axis, which the region stores under the weak axis index.
                Ok(Term {
                    area: moments.area,
                    centroid: moments.centroid.to_vector(),
                    own_strong: moments.inertia[weak],
                    own_weak: moments.inertia[strong],
                    sign: kind.sign(),
                    scale: 1.0,
                })
            })
            .collect()
    }

    /// Regions adding material.
    #[must_use]
    pub fn solids(&self) -> &[Region] {
        &self.solids
    }

    /// Regions removing material.
    #[must_use]
    pub fn voids(&self) -> &[Region] {
        &self.voids
    }

    /// Elastic modulus of the material.
    #[must_use]
    pub fn elastic_modulus(&self) -> f64 {
        self.elastic_modulus
    }

    /// Configuration the section was built with.
    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }
}

impl SectionLike for Section {
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
        self.config.tolerance
    }
}
