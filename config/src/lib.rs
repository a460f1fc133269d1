//! # Config Crate
//!
//! Centralized configuration constants for the vector crates.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_zero, DIMENSION, EPSILON};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(approx_zero(value));
//! assert!(value.abs() < EPSILON);
//!
//! // Every vector has exactly DIMENSION components
//! assert_eq!(DIMENSION, 3);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency Free**: Pure constants and plain data
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

pub use constants::{ConfigError, VectorConfig};
