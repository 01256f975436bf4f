use crate::analysis::AnalysisSummary;
use sectionx::SectionProperties;
use std::fmt::Write;

/// Render a textual summary of the section analysis.
///
/// Section moduli are reported for each extreme fibre; the smaller one governs the
/// bending stress (see <https://en.wikipedia.org/wiki/Section_modulus>).
#[must_use]
pub fn render_summary(summary: &AnalysisSummary) -> String {
    let mut output = String::new();
    let properties = &summary.properties;

    writeln!(
        &mut output,
        "Hollow block {} m x {} m with a {} m square hole (E = {:.1e} Pa)",
        properties.width, properties.depth, properties.hole, properties.block_modulus
    )
    .expect("writing to string cannot fail");
    write_properties(&mut output, &summary.block);

    writeln!(
        &mut output,
        "Same block on a {} m plate (E = {:.1e} Pa), in block material units",
        properties.plate_thickness, properties.plate_modulus
    )
    .expect("writing to string cannot fail");
    write_properties(&mut output, &summary.composite);
    writeln!(
        &mut output,
        "  transformed area = {:.3} m^2",
        summary.transformed_area
    )
    .expect("writing to string cannot fail");

    // The default depth tolerance is loose, so the search quality is printed too.
    let depth = &summary.half_area_depth;
    writeln!(
        &mut output,
        "Half of the block area lies within {:.3} m of the top (relative error {:.1e}, {} steps)",
        depth.depth, depth.relative_error, depth.iterations
    )
    .expect("writing to string cannot fail");

    output
}

fn write_properties(output: &mut String, properties: &SectionProperties) {
    writeln!(
        output,
        "  area = {:.3} m^2, centroid = ({:+.3}, {:+.3}) m",
        properties.area, properties.centroid.x, properties.centroid.y
    )
    .expect("writing to string cannot fail");
    writeln!(
        output,
        "  I strong = {:.3} m^4, S top = {:.3} m^3, S bottom = {:.3} m^3",
        properties.strong_inertia, properties.strong_modulus_top, properties.strong_modulus_bottom
    )
    .expect("writing to string cannot fail");
    writeln!(
        output,
        "  I weak = {:.3} m^4, S left = {:.3} m^3, S right = {:.3} m^3",
        properties.weak_inertia, properties.weak_modulus_left, properties.weak_modulus_right
    )
    .expect("writing to string cannot fail");
}
