//! Centralized values shared by the vector crates.
//!
//! Each public item documents its purpose and provides a minimal usage
//! example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// SHAPE CONSTANTS
// =============================================================================

/// Number of components held by every vector.
///
/// Index checks and component loops are bounded by this value.
///
/// # Example
///
/// ```rust
/// use config::constants::DIMENSION;
///
/// let valid = (0..DIMENSION as i64).collect::<Vec<_>>();
/// assert_eq!(valid, vec![0, 1, 2]);
/// ```
pub const DIMENSION: usize = 3;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance, e.g. when checking that a cross product is
/// orthogonal to its inputs.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// RENDERING CONSTANTS
// =============================================================================

/// Type name used by both textual renderings of a vector.
///
/// The display form is `vector[x, y, z] at 0x…` and the reconstructible
/// form is `vector(x, y, z)`.
///
/// # Example
///
/// ```rust
/// use config::constants::DISPLAY_NAME;
///
/// assert_eq!(format!("{DISPLAY_NAME}(1.0, 2.0, 3.0)"), "vector(1.0, 2.0, 3.0)");
/// ```
pub const DISPLAY_NAME: &str = "vector";

/// Separator placed between components in both textual renderings.
pub const COMPONENT_SEPARATOR: &str = ", ";

/// Marker introducing the opaque identity token in the display form.
pub const IDENTITY_MARKER: &str = " at ";

// =============================================================================
// RUNTIME CONFIGURATION
// =============================================================================

/// Immutable snapshot of tunable settings that can be shared between crates.
///
/// # Example
///
/// ```rust
/// use config::constants::VectorConfig;
///
/// let config = VectorConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorConfig {
    /// Absolute tolerance used by approximate component comparisons.
    pub tolerance: f64,
}

impl VectorConfig {
    /// Builds a configuration, rejecting tolerances that are not strictly
    /// positive and finite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::constants::VectorConfig;
    ///
    /// let cfg = VectorConfig::new(1.0e-6).expect("valid config");
    /// assert_eq!(cfg.tolerance, 1.0e-6);
    /// assert!(VectorConfig::new(0.0).is_err());
    /// ```
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        Ok(Self { tolerance })
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self { tolerance: EPSILON }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative, or not finite.
    InvalidTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    within(a, b, EPSILON)
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    within(value, 0.0, EPSILON)
}

/// Checks if two f64 values differ by less than `tolerance`.
///
/// # Example
///
/// ```rust
/// use config::constants::within;
///
/// assert!(within(1.0, 1.05, 0.1));
/// assert!(!within(1.0, 1.2, 0.1));
/// ```
#[inline]
pub fn within(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}
