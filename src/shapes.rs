//! Region sets for common structural shapes.
//!
//! Every builder works in the local frame of a reference plane: "across" runs along
//! the plane's weak axis and "up" along its strong axis, both measured from `origin`.

use crate::config::AnalysisConfig;
use crate::errors::{SectionError, SectionResult};
use crate::geometry::Point;
use crate::plane::ReferencePlane;
use crate::region::Region;
use crate::section::Section;

/// Solid and void regions describing a shape, ready to be composed.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    /// Plane the regions lie in.
    plane: ReferencePlane,
    /// Regions adding material.
    solids: Vec<Region>,
    /// Regions removing material.
    voids: Vec<Region>,
}

impl Profile {
    /// Plane the profile was drawn in.
    #[must_use]
    pub fn plane(&self) -> ReferencePlane {
        self.plane
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

    /// Compose the profile with unit modulus and the default configuration.
    ///
    /// # Errors
    ///
    /// See [`Section::with_options`].
    pub fn into_section(self) -> SectionResult<Section> {
        self.into_section_with(1.0, &AnalysisConfig::default())
    }

    /// Compose the profile with the given modulus and configuration.
    ///
    /// # Errors
    ///
    /// See [`Section::with_options`].
    pub fn into_section_with(
        self,
        elastic_modulus: f64,
        config: &AnalysisConfig,
    ) -> SectionResult<Section> {
        Section::with_options(self.plane, self.solids, self.voids, elastic_modulus, config)
    }
}

/// Solid rectangle centred on `origin`.
///
/// # Errors
///
/// Returns [`SectionError::InvalidDimension`] for non-positive dimensions.
pub fn rectangle(
    plane: ReferencePlane,
    origin: Point,
    width: f64,
    depth: f64,
) -> SectionResult<Profile> {
    positive("width", width)?;
    positive("depth", depth)?;
    Ok(solid(plane, Region::rectangle(plane, origin, width, depth)))
}

/// Doubly symmetric I beam centred on `origin`.
///
/// # Examples
/// ```
/// use sectionx::{point, shapes, ReferencePlane, SectionLike};
///
/// let origin = point(0.0, 0.0, 0.0);
/// let section = shapes::i_beam(ReferencePlane::Xy, origin, 300.0, 150.0, 10.0, 6.0)
///     .unwrap()
///     .into_section()
///     .unwrap();
/// assert!((section.area() - (2.0 * 150.0 * 10.0 + 280.0 * 6.0)).abs() < 1e-6);
/// ```
///
/// # Errors
///
/// Returns [`SectionError::InvalidDimension`] for non-positive dimensions, flanges
/// thicker than half the depth or a web wider than the flanges.
pub fn i_beam(
    plane: ReferencePlane,
    origin: Point,
    depth: f64,
    flange_width: f64,
    flange_thickness: f64,
    web_thickness: f64,
) -> SectionResult<Profile> {
    positive("depth", depth)?;
    positive("flange_width", flange_width)?;
    positive("flange_thickness", flange_thickness)?;
    positive("web_thickness", web_thickness)?;
    below("flange_thickness", flange_thickness, depth / 2.0)?;
    below("web_thickness", web_thickness, flange_width)?;

    let (b, d) = (flange_width / 2.0, depth / 2.0);
    let (tf, tw) = (flange_thickness, web_thickness / 2.0);
    Ok(solid(
        plane,
        outline(
            plane,
            origin,
            &[
                (-b, -d),
                (b, -d),
                (b, -d + tf),
                (tw, -d + tf),
                (tw, d - tf),
                (b, d - tf),
                (b, d),
                (-b, d),
                (-b, d - tf),
                (-tw, d - tf),
                (-tw, -d + tf),
                (-b, -d + tf),
            ],
        ),
    ))
}

/// Channel with its web centred on `origin` and flanges pointing across.
///
/// # Errors
///
/// Returns [`SectionError::InvalidDimension`] for non-positive dimensions or a
/// thickness that does not fit the depth or flange width.
pub fn channel(
    plane: ReferencePlane,
    origin: Point,
    depth: f64,
    flange_width: f64,
    thickness: f64,
) -> SectionResult<Profile> {
    positive("depth", depth)?;
    positive("flange_width", flange_width)?;
    positive("thickness", thickness)?;
    below("thickness", thickness, depth / 2.0)?;
    below("thickness", thickness, flange_width)?;

    let (d, t) = (depth / 2.0, thickness);
    let (inner, outer) = (t / 2.0, flange_width - t / 2.0);
    Ok(solid(
        plane,
        outline(
            plane,
            origin,
            &[
                (-inner, -d),
                (outer, -d),
                (outer, -d + t),
                (inner, -d + t),
                (inner, d - t),
                (outer, d - t),
                (outer, d),
                (-inner, d),
            ],
        ),
    ))
}

/// Tee with `origin` at the centre of the flange–web junction; the flange sits above
/// and the stem hangs below.
///
/// # Errors
///
/// Returns [`SectionError::InvalidDimension`] for non-positive dimensions, a flange
/// as deep as the tee or a stem wider than the flange.
pub fn tee(
    plane: ReferencePlane,
    origin: Point,
    depth: f64,
    flange_width: f64,
    flange_thickness: f64,
    web_thickness: f64,
) -> SectionResult<Profile> {
    positive("depth", depth)?;
    positive("flange_width", flange_width)?;
    positive("flange_thickness", flange_thickness)?;
    positive("web_thickness", web_thickness)?;
    below("flange_thickness", flange_thickness, depth)?;
    below("web_thickness", web_thickness, flange_width)?;

    let (b, tf, tw) = (flange_width / 2.0, flange_thickness, web_thickness / 2.0);
    let stem = depth - flange_thickness;
    Ok(solid(
        plane,
        outline(
            plane,
            origin,
            &[
                (-tw, -stem),
                (tw, -stem),
                (tw, 0.0),
                (b, 0.0),
                (b, tf),
                (-b, tf),
                (-b, 0.0),
                (-tw, 0.0),
            ],
        ),
    ))
}

/// Angle with its heel at `origin`, one leg rising and one running across.
///
/// # Errors
///
/// Returns [`SectionError::InvalidDimension`] for non-positive dimensions or a
/// thickness not smaller than both legs.
pub fn angle(
    plane: ReferencePlane,
    origin: Point,
    depth: f64,
    width: f64,
    thickness: f64,
) -> SectionResult<Profile> {
    positive("depth", depth)?;
    positive("width", width)?;
    positive("thickness", thickness)?;
    below("thickness", thickness, depth)?;
    below("thickness", thickness, width)?;

    let t = thickness;
    Ok(solid(
        plane,
        outline(
            plane,
            origin,
            &[(0.0, 0.0), (width, 0.0), (width, t), (t, t), (t, depth), (0.0, depth)],
        ),
    ))
}

/// Rectangular hollow section centred on `origin`.
///
/// # Errors
///
/// Returns [`SectionError::InvalidDimension`] for non-positive dimensions or a wall
/// that closes the hollow.
pub fn hss_rect(
    plane: ReferencePlane,
    origin: Point,
    depth: f64,
    width: f64,
    thickness: f64,
) -> SectionResult<Profile> {
    positive("depth", depth)?;
    positive("width", width)?;
    positive("thickness", thickness)?;
    below("thickness", thickness, depth / 2.0)?;
    below("thickness", thickness, width / 2.0)?;

    Ok(Profile {
        plane,
        solids: vec![Region::rectangle(plane, origin, width, depth)],
        voids: vec![Region::rectangle(
            plane,
            origin,
            width - 2.0 * thickness,
            depth - 2.0 * thickness,
        )],
    })
}

/// Circular hollow section centred on `origin`.
///
/// # Errors
///
/// Returns [`SectionError::InvalidDimension`] for non-positive dimensions or a wall
/// at least as thick as the radius.
pub fn hss_round(
    plane: ReferencePlane,
    origin: Point,
    radius: f64,
    thickness: f64,
) -> SectionResult<Profile> {
    positive("radius", radius)?;
    positive("thickness", thickness)?;
    below("thickness", thickness, radius)?;

    Ok(Profile {
        plane,
        solids: vec![Region::circle(origin, radius)],
        voids: vec![Region::circle(origin, radius - thickness)],
    })
}

/// Solid round bar centred on `origin`.
///
/// # Errors
///
/// Returns [`SectionError::InvalidDimension`] for a non-positive radius.
pub fn round(plane: ReferencePlane, origin: Point, radius: f64) -> SectionResult<Profile> {
    positive("radius", radius)?;
    Ok(solid(plane, Region::circle(origin, radius)))
}

fn solid(plane: ReferencePlane, region: Region) -> Profile {
    Profile {
        plane,
        solids: vec![region],
        voids: Vec::new(),
    }
}

fn outline(plane: ReferencePlane, origin: Point, local: &[(f64, f64)]) -> Region {
    Region::polygon(
        local
            .iter()
            .map(|&(across, up)| Point::in_plane(plane, origin, across, up)),
    )
}

fn positive(name: &'static str, value: f64) -> SectionResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SectionError::InvalidDimension { name, value })
    }
}

fn below(name: &'static str, value: f64, limit: f64) -> SectionResult<()> {
    if value < limit {
        Ok(())
    } else {
        Err(SectionError::InvalidDimension { name, value })
    }
}
