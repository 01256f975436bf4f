#![warn(clippy::pedantic)]

use approx::assert_relative_eq;
use sectionx::{
    point, shapes, AnalysisConfig, InertiaScaling, MultiSection, Point, ReferencePlane, Region,
    Section, SectionError, SectionLike, SectionProperties,
};

const ORIGIN: Point = point(0.0, 0.0, 0.0);

fn block(plane: ReferencePlane, hole: Option<f64>) -> Section {
    let voids = hole
        .map(|side| vec![Region::rectangle(plane, ORIGIN, side, side)])
        .unwrap_or_default();
    Section::new(
        plane,
        vec![Region::rectangle(plane, ORIGIN, 10.0, 20.0)],
        voids,
    )
    .expect("block composes")
}

#[test]
fn solid_rectangle_matches_hand_calculation() {
    for plane in ReferencePlane::ALL {
        let section = block(plane, None);
        let properties = SectionProperties::new(&section).expect("properties evaluate");

        assert_relative_eq!(properties.area, 200.0, epsilon = 1.0e-9);
        assert_relative_eq!(properties.centroid.to_vector(), ORIGIN.to_vector(), epsilon = 1.0e-12);
        assert_relative_eq!(properties.strong_inertia, 6_666.666_667, epsilon = 1.0e-5);
        assert_relative_eq!(properties.weak_inertia, 1_666.666_667, epsilon = 1.0e-5);
        assert_relative_eq!(properties.strong_modulus_min(), 666.666_667, epsilon = 1.0e-5);
        assert_relative_eq!(properties.weak_modulus_min(), 333.333_333, epsilon = 1.0e-5);
        assert_relative_eq!(properties.depth, 20.0);
        assert_relative_eq!(properties.width, 10.0);
    }
}

#[test]
fn concentric_hole_keeps_the_centroid() {
    let section = block(ReferencePlane::Xy, Some(4.0));
    assert_relative_eq!(section.area(), 184.0, epsilon = 1.0e-9);
    assert_relative_eq!(section.centroid().to_vector(), ORIGIN.to_vector(), epsilon = 1.0e-12);
    assert_relative_eq!(section.strong_inertia(), 6_645.333_333, epsilon = 1.0e-5);
    assert_relative_eq!(section.weak_inertia(), 1_645.333_333, epsilon = 1.0e-5);

    // The hole does not reach the extreme fibres, so the bounding box is unchanged.
    assert_eq!(section.extents(), block(ReferencePlane::Xy, None).extents());
}

#[test]
fn profile_builder_matches_hand_drawn_regions() {
    let drawn = block(ReferencePlane::Xz, None);
    let built = shapes::rectangle(ReferencePlane::Xz, ORIGIN, 10.0, 20.0)
        .expect("valid rectangle")
        .into_section()
        .expect("rectangle composes");
    assert_eq!(built, drawn);
}

#[test]
fn multi_section_without_others_equals_base() {
    let base = block(ReferencePlane::Yz, Some(4.0));
    for scaling in [InertiaScaling::ParallelAxisOnly, InertiaScaling::Full] {
        let combined = MultiSection::with_scaling(base.clone(), vec![], scaling)
            .expect("single constituent composes");
        let lhs = SectionProperties::new(&combined).expect("properties evaluate");
        let rhs = SectionProperties::new(&base).expect("properties evaluate");
        assert_relative_eq!(lhs.area, rhs.area, epsilon = 1.0e-12);
        assert_relative_eq!(lhs.strong_inertia, rhs.strong_inertia, epsilon = 1.0e-9);
        assert_relative_eq!(lhs.weak_modulus_left, rhs.weak_modulus_left, epsilon = 1.0e-9);
    }
}

#[test]
fn multi_section_rejects_sections_in_other_planes() {
    let error = MultiSection::new(
        block(ReferencePlane::Xy, None),
        vec![block(ReferencePlane::Xz, None)],
    )
    .expect_err("planes differ");
    assert_eq!(
        error,
        SectionError::PlaneMismatch {
            expected: ReferencePlane::Xy,
            found: ReferencePlane::Xz,
            index: 0,
        }
    );
}

#[test]
fn void_outside_every_solid_is_rejected_by_checked_construction() {
    let plane = ReferencePlane::Xy;
    let error = Section::checked(
        plane,
        vec![Region::rectangle(plane, ORIGIN, 10.0, 20.0)],
        vec![Region::rectangle(plane, point(30.0, 0.0, 0.0), 2.0, 2.0)],
        1.0,
        &AnalysisConfig::default(),
    )
    .expect_err("void lies outside");
    assert_eq!(error, SectionError::VoidOutsideSolid { index: 0 });
}

#[test]
fn tolerance_comes_from_the_configuration() {
    let plane = ReferencePlane::Xy;
    let tiny = || vec![Region::rectangle(plane, ORIGIN, 0.05, 0.05)];

    let error = Section::new(plane, tiny(), vec![]).expect_err("below default tolerance");
    assert!(matches!(error, SectionError::DegenerateRegion { .. }));

    let config = AnalysisConfig::from_json_str(r#"{ "tolerance": 1e-6 }"#).expect("valid json");
    let section = Section::with_options(plane, tiny(), vec![], 1.0, &config)
        .expect("above configured tolerance");
    assert_relative_eq!(section.area(), 0.0025, epsilon = 1.0e-12);
    assert_relative_eq!(section.tolerance(), 1.0e-6);
}
