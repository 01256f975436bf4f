use crate::scenario::{Scenario, ScenarioProperties};
use sectionx::{
    depth_from_area, AnalysisConfig, DepthFrom, DepthSolution, SectionLike, SectionProperties,
    SectionResult,
};

/// Summary of the results from the demonstration sections.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSummary {
    /// Properties of the hollow block.
    pub block: SectionProperties,
    /// Properties of the plated block in units of block material.
    pub composite: SectionProperties,
    /// Area of the plated block converted to block material.
    pub transformed_area: f64,
    /// Depth from the top of the block enclosing half of its area.
    pub half_area_depth: DepthSolution,
    /// Properties that generated the result, exposed for reporting.
    pub properties: ScenarioProperties,
}

/// Evaluate both demonstration sections and run a depth search on the block.
///
/// The composite uses the transformed-section method described at
/// <https://en.wikipedia.org/wiki/Section_modulus>.
pub fn run_analysis(
    scenario: &Scenario,
    config: &AnalysisConfig,
) -> SectionResult<AnalysisSummary> {
    let block = SectionProperties::new(&scenario.block)?;
    let composite = SectionProperties::new(&scenario.composite)?;
    let half_area_depth = depth_from_area(
        &scenario.block,
        scenario.block.area() / 2.0,
        DepthFrom::Top,
        config,
    )?;

    Ok(AnalysisSummary {
        block,
        composite,
        transformed_area: scenario.composite.transformed_area(),
        half_area_depth,
        properties: scenario.properties,
    })
}
