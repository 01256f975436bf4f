use sectionx::{
    depth_map, point, shapes, DepthFrom, InertiaScaling, MultiSection, ReferencePlane,
    SectionProperties,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let plane = ReferencePlane::Xy;

    // Steel I beam with a concrete slab on top, in millimetres and MPa
    let beam = shapes::i_beam(plane, point(0.0, 0.0, 0.0), 300.0, 150.0, 12.0, 8.0)?
        .into_section_with(200.0e3, &Default::default())?;
    let slab = shapes::rectangle(plane, point(0.0, 200.0, 0.0), 1200.0, 100.0)?
        .into_section_with(30.0e3, &Default::default())?;

    // Compare the two ways of weighting each part's own second moment
    for scaling in [InertiaScaling::ParallelAxisOnly, InertiaScaling::Full] {
        let composite = MultiSection::with_scaling(beam.clone(), vec![slab.clone()], scaling)?;
        let properties = SectionProperties::new(&composite)?;
        println!(
            "{scaling:?}: neutral axis at y = {:.1} mm, Istrong = {:.4e} mm^4, \
             Sbottom = {:.4e} mm^3",
            properties.centroid.y,
            properties.strong_inertia,
            properties.strong_modulus_bottom
        );
    }

    // How the slab area accumulates from its top face
    for (depth, area) in depth_map(&slab, 4, DepthFrom::Top)? {
        println!("depth {depth:.1} mm -> area {area:.1} mm^2");
    }

    Ok(())
}
