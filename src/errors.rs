//! Error types produced while composing or querying sections.

use std::fmt;

use thiserror::Error;

use crate::plane::ReferencePlane;

/// Whether a region adds to or removes from a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// Material present.
    Solid,
    /// Material removed.
    Void,
}

impl RegionKind {
    /// Sign applied to the region's contributions.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            RegionKind::Solid => 1.0,
            RegionKind::Void => -1.0,
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionKind::Solid => f.write_str("solid"),
            RegionKind::Void => f.write_str("void"),
        }
    }
}

/// Extreme fibre used as the divisor of a section modulus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fiber {
    /// Top fibre, strong-axis bending.
    StrongTop,
    /// Bottom fibre, strong-axis bending.
    StrongBottom,
    /// Left fibre, weak-axis bending.
    WeakLeft,
    /// Right fibre, weak-axis bending.
    WeakRight,
}

impl fmt::Display for Fiber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Fiber::StrongTop => "strong-axis top",
            Fiber::StrongBottom => "strong-axis bottom",
            Fiber::WeakLeft => "weak-axis left",
            Fiber::WeakRight => "weak-axis right",
        };
        f.write_str(name)
    }
}

/// Error returned when a section cannot be composed or queried.
///
/// Every variant is a caller contract violation: the enclosing construction is
/// aborted and no value is substituted.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SectionError {
    /// Returned when a region encloses (almost) no area.
    #[error("region area {area} is not above the tolerance {tolerance}")]
    DegenerateRegion {
        /// Computed area of the region.
        area: f64,
        /// Tolerance the area was compared against.
        tolerance: f64,
    },
    /// Returned when a circle's radius is zero, negative or not finite.
    #[error("circle radius must be positive (received {radius})")]
    NonPositiveRadius {
        /// Rejected radius.
        radius: f64,
    },
    /// Returned when solids minus voids leave no positive area.
    #[error("net section area must be positive (received {area})")]
    InvalidSection {
        /// Net area after subtracting voids.
        area: f64,
    },
    /// Returned when the sections of a multi-material section lie in different planes.
    #[error("section {index} is in the {found} plane, the base section in the {expected} plane")]
    PlaneMismatch {
        /// Plane of the base section.
        expected: ReferencePlane,
        /// Plane of the offending section.
        found: ReferencePlane,
        /// Position of the offending section among the additional sections.
        index: usize,
    },
    /// Returned when the centroid sits on an extreme fibre.
    #[error("{fiber} fibre is {distance} from the centroid; the section modulus is undefined")]
    DegenerateFiberDistance {
        /// Fibre whose distance vanished.
        fiber: Fiber,
        /// Distance between the centroid and the fibre.
        distance: f64,
    },
    /// Returned when the elastic modulus is zero, negative or not finite.
    #[error("elastic modulus must be positive (received {elastic_modulus})")]
    NonPositiveModulus {
        /// Rejected elastic modulus.
        elastic_modulus: f64,
    },
    /// Returned when a region does not lie flat in the reference plane.
    #[error("{kind} region {index} is not a planar closed region in the reference plane")]
    NonPlanarRegion {
        /// Which list the region belongs to.
        kind: RegionKind,
        /// Position of the region in its list.
        index: usize,
    },
    /// Returned when a void is not contained by any solid region.
    #[error("void region {index} is not contained in any solid region")]
    VoidOutsideSolid {
        /// Position of the void in the void list.
        index: usize,
    },
    /// Returned when a profile dimension is not physically meaningful.
    #[error("profile dimension `{name}` is invalid (received {value})")]
    InvalidDimension {
        /// Name of the dimension.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// Returned when a depth lies outside the section.
    #[error("depth {depth} lies outside the section depth 0..={max}")]
    DepthOutOfRange {
        /// Requested depth.
        depth: f64,
        /// Total depth of the section.
        max: f64,
    },
    /// Returned when a target area cannot be reached within the section.
    #[error("target area {target} must lie in (0, {area}]")]
    TargetAreaOutOfRange {
        /// Requested area.
        target: f64,
        /// Net area of the section.
        area: f64,
    },
    /// Returned when a depth cut crosses a circular region.
    #[error("{kind} region {index} is a circle crossed by the cut")]
    CurvedRegionCut {
        /// Which list the region belongs to.
        kind: RegionKind,
        /// Position of the region in its list.
        index: usize,
    },
    /// Returned when a depth map is requested with no samples.
    #[error("depth map needs at least one sample")]
    InvalidSampleCount,
    /// Returned when the analysis configuration is invalid.
    #[error("invalid analysis configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Error returned when loading or validating an [`AnalysisConfig`](crate::AnalysisConfig).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Returned when the configuration text cannot be parsed.
    #[error("failed to parse configuration at line {line}, column {column}: {message}")]
    Parse {
        /// Parser message.
        message: String,
        /// One-based line of the failure.
        line: usize,
        /// One-based column of the failure.
        column: usize,
    },
    /// Returned when a tolerance is negative or not finite.
    #[error("`{field}` must be a finite, non-negative number (received {value})")]
    InvalidTolerance {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// Returned when the iteration limit is zero.
    #[error("`max_iterations` must be at least 1")]
    ZeroIterations,
}

/// Result type for section operations.
pub type SectionResult<T> = Result<T, SectionError>;
