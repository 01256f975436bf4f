//! Numerical settings shared by an analysis.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Tolerances and iteration limits used when composing and querying sections.
///
/// Every [`Section`](crate::Section) stores the configuration it was built with, so
/// callers can run several analyses side by side with different settings.
///
/// # Examples
/// ```
/// use sectionx::AnalysisConfig;
///
/// let config = AnalysisConfig::from_json_str(r#"{ "tolerance": 1e-6 }"#).unwrap();
/// assert_eq!(config.tolerance, 1e-6);
/// assert_eq!(config.max_iterations, AnalysisConfig::default().max_iterations);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Smallest area, and smallest centroid-to-fibre distance, treated as non-degenerate.
    pub tolerance: f64,
    /// Relative area error at which a depth search stops.
    pub depth_tolerance: f64,
    /// Upper bound on bisection steps in a depth search.
    pub max_iterations: usize,
}

impl AnalysisConfig {
    /// Default degeneracy tolerance.
    pub const DEFAULT_TOLERANCE: f64 = 1e-2;

    /// Parse a configuration from JSON, filling missing fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the validation errors of
    /// [`AnalysisConfig::validate`] for out-of-range values.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the degeneracy tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTolerance`] when a tolerance is negative or not
    /// finite and [`ConfigError::ZeroIterations`] when `max_iterations` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("tolerance", self.tolerance),
            ("depth_tolerance", self.depth_tolerance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidTolerance { field, value });
            }
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Parse {
            message: error.to_string(),
            line: error.line(),
            column: error.column(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
            depth_tolerance: 0.05,
            max_iterations: 250,
        }
    }
}
