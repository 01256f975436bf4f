mod analysis;
mod report;
mod scenario;

use analysis::run_analysis;
use report::render_summary;
use scenario::build_scenario;
use sectionx::AnalysisConfig;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // An optional JSON file overrides the default tolerances, e.g.
    // `{ "tolerance": 1e-6, "depth_tolerance": 1e-3 }`.
    let config = match std::env::args().nth(1) {
        Some(path) => AnalysisConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => AnalysisConfig::default(),
    };

    // A hollow concrete block on its own, then the same block with a steel plate
    // fixed to its underside. The plate is converted into an equivalent area of
    // concrete using the ratio of elastic moduli.
    // See: https://en.wikipedia.org/wiki/Composite_construction
    let scenario = build_scenario(&config)?;

    // Evaluate the section properties of both sections and locate the depth of
    // the block that holds half of its area.
    let summary = run_analysis(&scenario, &config)?;

    let report = render_summary(&summary);
    println!("{report}");

    Ok(())
}
