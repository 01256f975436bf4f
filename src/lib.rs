#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod composition;
pub mod config;
pub mod depth;
pub mod errors;
pub mod geometry;
pub mod multi;
pub mod plane;
pub mod properties;
pub mod region;
pub mod section;
pub mod shapes;

pub use config::AnalysisConfig;
pub use depth::{
    area_from_depth, clip_to_depth, depth_from_area, depth_map, DepthFrom, DepthSolution,
};
pub use errors::{ConfigError, Fiber, RegionKind, SectionError, SectionResult};
pub use geometry::{point, Extents, Point};
pub use multi::{Constituent, InertiaScaling, MultiSection};
pub use plane::ReferencePlane;
pub use properties::SectionProperties;
pub use region::{validate_regions, Region, RegionMoments};
pub use section::{Section, SectionLike};
pub use shapes::Profile;
