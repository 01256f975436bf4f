use sectionx::{
    point, shapes, AnalysisConfig, MultiSection, ReferencePlane, Region, Section, SectionResult,
};

/// Material and dimensions used for the demonstration sections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioProperties {
    /// Width of the block in metres.
    pub width: f64,
    /// Depth of the block in metres.
    pub depth: f64,
    /// Side of the square hole through the block in metres.
    pub hole: f64,
    /// Thickness of the plate under the block in metres.
    pub plate_thickness: f64,
    /// Elastic modulus of the block in pascals.
    pub block_modulus: f64,
    /// Elastic modulus of the plate in pascals.
    pub plate_modulus: f64,
}

impl Default for ScenarioProperties {
    fn default() -> Self {
        Self {
            width: 10.0,
            depth: 20.0,
            hole: 4.0,
            plate_thickness: 1.0,
            block_modulus: 25.0e9,
            plate_modulus: 200.0e9,
        }
    }
}

/// Sections analysed by the binary.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Hollow block on its own.
    pub block: Section,
    /// Block with the plate attached underneath.
    pub composite: MultiSection,
    /// Values the sections were built from.
    pub properties: ScenarioProperties,
}

/// Build the hollow block and the plated composite in the XY plane.
pub fn build_scenario(config: &AnalysisConfig) -> SectionResult<Scenario> {
    let properties = ScenarioProperties::default();
    let plane = ReferencePlane::Xy;
    let origin = point(0.0, 0.0, 0.0);

    let block = Section::with_options(
        plane,
        vec![Region::rectangle(plane, origin, properties.width, properties.depth)],
        vec![Region::rectangle(plane, origin, properties.hole, properties.hole)],
        properties.block_modulus,
        config,
    )?;

    let plate = shapes::rectangle(
        plane,
        point(0.0, -(properties.depth + properties.plate_thickness) / 2.0, 0.0),
        properties.width,
        properties.plate_thickness,
    )?
    .into_section_with(properties.plate_modulus, config)?;

    let composite = MultiSection::new(block.clone(), vec![plate])?;

    Ok(Scenario {
        block,
        composite,
        properties,
    })
}
