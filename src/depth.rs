//! Area–depth relations measured from an extreme fibre.
//!
//! These answer questions like "how much concrete lies within 50 mm of the top" or
//! "how deep must a compression block reach to cover a given area".

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::errors::{RegionKind, SectionError, SectionResult};
use crate::region::{Clipped, Cut, Region};
use crate::section::{Section, SectionLike};

/// Extreme fibre a depth is measured from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepthFrom {
    /// The fibre with the largest strong-axis coordinate.
    #[default]
    Top,
    /// The fibre with the smallest strong-axis coordinate.
    Bottom,
}

/// Result of [`depth_from_area`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepthSolution {
    /// Depth reached by the search.
    pub depth: f64,
    /// `|target - area(depth)| / target` at that depth.
    pub relative_error: f64,
    /// Bisection steps taken.
    pub iterations: usize,
}

/// Net area of `section` lying within `depth` of the chosen extreme fibre.
///
/// # Examples
/// ```
/// use sectionx::{depth::{area_from_depth, DepthFrom}, point, shapes, ReferencePlane};
///
/// let section = shapes::rectangle(ReferencePlane::Xy, point(0.0, 0.0, 0.0), 10.0, 20.0)
///     .unwrap()
///     .into_section()
///     .unwrap();
/// let area = area_from_depth(&section, 5.0, DepthFrom::Top).unwrap();
/// assert!((area - 50.0).abs() < 1e-9);
/// ```
///
/// # Errors
///
/// Returns [`SectionError::DepthOutOfRange`] when `depth` is negative or exceeds the
/// section depth.
pub fn area_from_depth(section: &Section, depth: f64, from: DepthFrom) -> SectionResult<f64> {
    let cut = cut_at(section, depth, from)?;
    let plane = section.plane();
    let solid = section
        .solids()
        .iter()
        .map(|region| region.clipped_area(plane, cut))
        .sum::<f64>();
    let void = section
        .voids()
        .iter()
        .map(|region| region.clipped_area(plane, cut))
        .sum::<f64>();
    Ok(solid - void)
}

/// The part of `section` lying within `depth` of the chosen extreme fibre, as a new
/// section with the same plane, modulus and configuration.
///
/// Regions that fall entirely outside the cut are dropped.
///
/// # Examples
/// ```
/// use sectionx::{clip_to_depth, point, shapes, DepthFrom, ReferencePlane, SectionLike};
///
/// let section = shapes::rectangle(ReferencePlane::Xy, point(0.0, 0.0, 0.0), 10.0, 20.0)
///     .unwrap()
///     .into_section()
///     .unwrap();
/// let block = clip_to_depth(&section, 5.0, DepthFrom::Top).unwrap();
/// assert!((block.area() - 50.0).abs() < 1e-9);
/// assert!((block.centroid().y - 7.5).abs() < 1e-9);
/// ```
///
/// # Errors
///
/// Returns [`SectionError::DepthOutOfRange`] for a depth outside the section,
/// [`SectionError::CurvedRegionCut`] when the cut crosses a circular region and the
/// composition errors of [`Section::with_options`] for what remains (for example
/// [`SectionError::InvalidSection`] at zero depth).
pub fn clip_to_depth(section: &Section, depth: f64, from: DepthFrom) -> SectionResult<Section> {
    let cut = cut_at(section, depth, from)?;
    let plane = section.plane();
    let tolerance = section.tolerance();
    let keep = |kind: RegionKind, regions: &[Region]| -> SectionResult<Vec<Region>> {
        let mut kept = Vec::with_capacity(regions.len());
        for (index, region) in regions.iter().enumerate() {
            match region.clipped(plane, cut, tolerance) {
                Clipped::Kept(part) => kept.push(part),
                Clipped::Dropped => {}
                Clipped::Curved => return Err(SectionError::CurvedRegionCut { kind, index }),
            }
        }
        Ok(kept)
    };
    let solids = keep(RegionKind::Solid, section.solids())?;
    let voids = keep(RegionKind::Void, section.voids())?;
    debug!(
        "clipped {depth} from the {from:?} fibre: {} solid(s), {} void(s) remain",
        solids.len(),
        voids.len()
    );
    Section::with_options(
        plane,
        solids,
        voids,
        section.elastic_modulus(),
        section.config(),
    )
}

/// Half-plane holding everything within `depth` of the chosen fibre.
fn cut_at(section: &Section, depth: f64, from: DepthFrom) -> SectionResult<Cut> {
    let max = section.depth();
    if !(0.0..=max).contains(&depth) {
        return Err(SectionError::DepthOutOfRange { depth, max });
    }
    let strong = section.plane().strong_axis();
    let extents = section.extents();
    Ok(match from {
        DepthFrom::Top => Cut {
            bound: extents.max.coord(strong) - depth,
            keep_above: true,
        },
        DepthFrom::Bottom => Cut {
            bound: extents.min.coord(strong) + depth,
            keep_above: false,
        },
    })
}

/// Depth from the chosen extreme fibre enclosing `target` area, found by bisection.
///
/// The search stops once the relative area error drops to `config.depth_tolerance`
/// or after `config.max_iterations` steps; in the latter case the last estimate is
/// returned and a warning is logged.
///
/// # Errors
///
/// Returns [`SectionError::TargetAreaOutOfRange`] when `target` is not in
/// `(0, area]` and [`SectionError::InvalidConfig`] for an invalid configuration.
pub fn depth_from_area(
    section: &Section,
    target: f64,
    from: DepthFrom,
    config: &AnalysisConfig,
) -> SectionResult<DepthSolution> {
    config.validate()?;
    let area = section.area();
    if !(target > 0.0 && target <= area) {
        return Err(SectionError::TargetAreaOutOfRange { target, area });
    }

    let (mut low, mut high) = (0.0, section.depth());
    let mut solution = DepthSolution {
        depth: high,
        relative_error: f64::INFINITY,
        iterations: 0,
    };
    for iteration in 1..=config.max_iterations {
        let depth = 0.5 * (low + high);
        let enclosed = area_from_depth(section, depth, from)?;
        solution = DepthSolution {
            depth,
            relative_error: (target - enclosed).abs() / target,
            iterations: iteration,
        };
        trace!("depth search step {iteration}: depth = {depth}, area = {enclosed}");
        if solution.relative_error <= config.depth_tolerance {
            return Ok(solution);
        }
        if enclosed < target {
            low = depth;
        } else {
            high = depth;
        }
    }

    warn!(
        "depth search for area {target} stopped after {} iterations with relative error {}",
        solution.iterations, solution.relative_error
    );
    Ok(solution)
}

/// `samples + 1` evenly spaced `(depth, area)` pairs from the chosen fibre, covering
/// the whole section depth.
///
/// # Errors
///
/// Returns [`SectionError::InvalidSampleCount`] when `samples` is zero.
pub fn depth_map(
    section: &Section,
    samples: usize,
    from: DepthFrom,
) -> SectionResult<Vec<(f64, f64)>> {
    if samples == 0 {
        return Err(SectionError::InvalidSampleCount);
    }
    let total = section.depth();
    (0..=samples)
        .map(|step| {
            // land exactly on the far fibre
            let depth = if step == samples {
                total
            } else {
                total * step as f64 / samples as f64
            };
            area_from_depth(section, depth, from).map(|area| (depth, area))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::point;
    use crate::plane::ReferencePlane;
    use crate::region::Region;
    use crate::shapes;

    fn hollow_block() -> Section {
        let plane = ReferencePlane::Xy;
        let origin = point(0.0, 0.0, 0.0);
        Section::new(
            plane,
            vec![Region::rectangle(plane, origin, 10.0, 20.0)],
            vec![Region::rectangle(plane, origin, 4.0, 4.0)],
        )
        .unwrap()
    }

    #[test]
    fn partial_depth_subtracts_clipped_void() {
        let section = hollow_block();
        let area = |depth, from| area_from_depth(&section, depth, from).unwrap();
        assert_relative_eq!(area(5.0, DepthFrom::Top), 50.0, epsilon = 1e-9);
        assert_relative_eq!(area(10.0, DepthFrom::Top), 92.0, epsilon = 1e-9);
        assert_relative_eq!(area(12.0, DepthFrom::Bottom), 104.0, epsilon = 1e-9);
        assert_relative_eq!(area(20.0, DepthFrom::Bottom), 184.0, epsilon = 1e-9);
        assert_relative_eq!(area(0.0, DepthFrom::Top), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn clipped_rectangle_is_a_section_of_its_own() {
        let plane = ReferencePlane::Xy;
        let section = Section::with_options(
            plane,
            vec![Region::rectangle(plane, point(0.0, 0.0, 0.0), 10.0, 20.0)],
            vec![],
            7.0,
            &AnalysisConfig::default(),
        )
        .unwrap();
        let block = clip_to_depth(&section, 5.0, DepthFrom::Top).unwrap();
        assert_relative_eq!(block.area(), 50.0, epsilon = 1e-9);
        assert_relative_eq!(block.centroid().y, 7.5, epsilon = 1e-9);
        assert_relative_eq!(block.strong_inertia(), 10.0 * 125.0 / 12.0, epsilon = 1e-9);
        assert_eq!(block.elastic_modulus(), 7.0);
        assert_eq!(block.plane(), plane);
        assert_eq!(block.config(), section.config());

        let bottom = clip_to_depth(&section, 5.0, DepthFrom::Bottom).unwrap();
        assert_relative_eq!(bottom.centroid().y, -7.5, epsilon = 1e-9);
    }

    #[test]
    fn clipping_keeps_and_cuts_voids() {
        let section = hollow_block();
        // the hole spans -2..2 and lies wholly inside the cut
        let block = clip_to_depth(&section, 12.0, DepthFrom::Top).unwrap();
        assert_eq!(block.voids().len(), 1);
        assert_relative_eq!(block.area(), 104.0, epsilon = 1e-9);
        // the hole is cut in half
        let block = clip_to_depth(&section, 10.0, DepthFrom::Top).unwrap();
        assert_relative_eq!(block.area(), 92.0, epsilon = 1e-9);
        assert_relative_eq!(
            block.area(),
            area_from_depth(&section, 10.0, DepthFrom::Top).unwrap(),
            epsilon = 1e-9
        );
        // the hole is missed entirely
        let block = clip_to_depth(&section, 5.0, DepthFrom::Top).unwrap();
        assert!(block.voids().is_empty());
        assert_eq!(
            clip_to_depth(&section, 0.0, DepthFrom::Top),
            Err(SectionError::InvalidSection { area: 0.0 })
        );
    }

    #[test]
    fn clipping_through_a_circle_is_rejected() {
        let section = shapes::hss_round(ReferencePlane::Xy, point(0.0, 0.0, 0.0), 5.0, 1.0)
            .unwrap()
            .into_section()
            .unwrap();
        assert_eq!(
            clip_to_depth(&section, 3.0, DepthFrom::Top),
            Err(SectionError::CurvedRegionCut {
                kind: RegionKind::Solid,
                index: 0
            })
        );
        let whole = clip_to_depth(&section, 10.0, DepthFrom::Top).unwrap();
        assert_relative_eq!(whole.area(), section.area(), epsilon = 1e-12);
    }

    #[test]
    fn circle_half_depth_is_half_area() {
        let section = shapes::round(ReferencePlane::Yz, point(0.0, 3.0, -2.0), 2.0)
            .unwrap()
            .into_section()
            .unwrap();
        assert_relative_eq!(
            area_from_depth(&section, 2.0, DepthFrom::Top).unwrap(),
            2.0 * PI,
            max_relative = 1e-12
        );
        // segment of height 1 in a circle of radius 2
        let segment = 4.0 * (0.5_f64).acos() - 3.0_f64.sqrt();
        assert_relative_eq!(
            area_from_depth(&section, 1.0, DepthFrom::Bottom).unwrap(),
            segment,
            max_relative = 1e-12
        );
    }

    #[test]
    fn depth_outside_section_is_rejected() {
        let section = hollow_block();
        assert_eq!(
            area_from_depth(&section, 20.5, DepthFrom::Top),
            Err(SectionError::DepthOutOfRange { depth: 20.5, max: 20.0 })
        );
        assert!(area_from_depth(&section, -1.0, DepthFrom::Top).is_err());
    }

    #[test]
    fn bisection_recovers_depth() {
        let section = hollow_block();
        let config = AnalysisConfig {
            depth_tolerance: 1e-9,
            ..AnalysisConfig::default()
        };
        let solution = depth_from_area(&section, 50.0, DepthFrom::Top, &config).unwrap();
        assert_relative_eq!(solution.depth, 5.0, epsilon = 1e-6);
        assert!(solution.relative_error <= 1e-9);
        assert!(solution.iterations > 1);
    }

    #[test]
    fn unconverged_search_returns_last_estimate() {
        let section = hollow_block();
        let config = AnalysisConfig {
            depth_tolerance: 0.0,
            max_iterations: 1,
            ..AnalysisConfig::default()
        };
        let solution = depth_from_area(&section, 50.0, DepthFrom::Top, &config).unwrap();
        assert_eq!(solution.iterations, 1);
        assert_relative_eq!(solution.depth, 10.0);
        assert_relative_eq!(solution.relative_error, 42.0 / 50.0, epsilon = 1e-12);
    }

    #[test]
    fn unreachable_target_is_rejected() {
        let section = hollow_block();
        let config = AnalysisConfig::default();
        assert!(matches!(
            depth_from_area(&section, 0.0, DepthFrom::Top, &config),
            Err(SectionError::TargetAreaOutOfRange { .. })
        ));
        assert!(matches!(
            depth_from_area(&section, 185.0, DepthFrom::Top, &config),
            Err(SectionError::TargetAreaOutOfRange { .. })
        ));
    }

    #[test]
    fn depth_map_spans_the_section() {
        let section = hollow_block();
        let map = depth_map(&section, 4, DepthFrom::Top).unwrap();
        assert_eq!(map.len(), 5);
        assert_eq!(map[0], (0.0, 0.0));
        assert_relative_eq!(map[1].1, 50.0, epsilon = 1e-9);
        assert_relative_eq!(map[4].0, 20.0);
        assert_relative_eq!(map[4].1, 184.0, epsilon = 1e-9);
        assert_eq!(depth_map(&section, 0, DepthFrom::Top), Err(SectionError::InvalidSampleCount));
    }
}
