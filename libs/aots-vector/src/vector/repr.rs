//! Textual renderings of [`Vector3`].
//!
//! - Display: `vector[1.0, 2.0, 3.0] at 0x7ffd…`. The trailing token is the
//!   value's current address, useful only for telling instances apart while
//!   debugging. It is never part of equality.
//! - Reconstructible: `vector(1.0, 2.0, 3.0)`, which parses back with
//!   [`str::parse`].

use super::Vector3;
use crate::error::{VectorError, VectorResult};
use config::constants::{COMPONENT_SEPARATOR, DIMENSION, DISPLAY_NAME, IDENTITY_MARKER};
use std::fmt;
use std::str::FromStr;

impl Vector3 {
    /// Returns the reconstructible form `vector(x, y, z)`.
    ///
    /// ```
    /// use aots_vector::Vector3;
    ///
    /// let v = Vector3::new(1.0, 2.5, -3.0);
    /// assert_eq!(v.repr(), "vector(1.0, 2.5, -3.0)");
    /// assert_eq!(v.repr().parse::<Vector3>().unwrap(), v);
    /// ```
    pub fn repr(&self) -> String {
        format!("{DISPLAY_NAME}({})", self.joined_components())
    }

    fn joined_components(&self) -> String {
        self.to_array()
            .iter()
            .map(|c| format!("{c:?}"))
            .collect::<Vec<_>>()
            .join(COMPONENT_SEPARATOR)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{DISPLAY_NAME}[{}]{IDENTITY_MARKER}{:p}",
            self.joined_components(),
            self
        )
    }
}

impl FromStr for Vector3 {
    type Err = VectorError;

    fn from_str(s: &str) -> VectorResult<Self> {
        let invalid = || VectorError::ValueConversion(format!("'{s}' as a vector literal"));

        let body = s
            .trim()
            .strip_prefix(DISPLAY_NAME)
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('('))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;

        let components = body
            .split(',')
            .map(|part| part.trim().parse::<f64>().map_err(|_| invalid()))
            .collect::<VectorResult<Vec<_>>>()?;

        match components.as_slice() {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            _ => Err(VectorError::ValueConversion(format!(
                "'{s}' as a vector literal: expected {DIMENSION} components, found {}",
                components.len()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repr_keeps_decimal_point() {
        assert_eq!(Vector3::new(1.0, 0.0, -0.0).repr(), "vector(1.0, 0.0, -0.0)");
        assert_eq!(Vector3::new(0.1, 1234.5, 2.5).repr(), "vector(0.1, 1234.5, 2.5)");
    }

    #[test]
    fn test_display_form() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let text = v.to_string();
        assert!(text.starts_with("vector[1.0, 2.0, 3.0] at 0x"), "{text}");
    }

    #[test]
    fn test_display_token_differs_between_instances() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = a;
        assert_eq!(a, b);
        assert_eq!(a.to_string(), a.to_string());
        assert_ne!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_parse_accepts_whitespace() {
        let v: Vector3 = "  vector ( 1 , -2.5,3e2 ) ".parse().unwrap();
        assert_eq!(v, Vector3::new(1.0, -2.5, 300.0));
    }

    #[test]
    fn test_parse_non_finite_round_trip() {
        let v = Vector3::new(f64::INFINITY, f64::NEG_INFINITY, 0.0);
        assert_eq!(v.repr().parse::<Vector3>().unwrap(), v);
    }

    #[test]
    fn test_parse_rejects_malformed_literals() {
        for bad in [
            "",
            "vector",
            "(1.0, 2.0, 3.0)",
            "vector[1.0, 2.0, 3.0]",
            "vector(1.0, 2.0)",
            "vector(1.0, 2.0, 3.0, 4.0)",
            "vector(1.0, two, 3.0)",
        ] {
            assert!(
                matches!(bad.parse::<Vector3>(), Err(VectorError::ValueConversion(_))),
                "{bad:?}"
            );
        }
    }
}
