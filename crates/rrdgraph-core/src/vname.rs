//! Variable names for data-producing graph elements.
//!
//! rrdtool refers to the output of `DEF`, `CDEF` and `VDEF` commands by a
//! variable name ("vname"). A valid vname is 1 to 255 characters long and
//! only contains ASCII letters, digits, `_` and `-`.

use std::fmt;

use serde::Deserialize;

use crate::error::ElementError;

const MAX_LEN: usize = 255;

/// A validated rrdtool variable name.
///
/// # Examples
///
/// ```
/// use rrdgraph_core::vname::VName;
///
/// let name = VName::new("cpu_avg").unwrap();
/// assert_eq!(name, "cpu_avg");
///
/// assert!(VName::new("has space").is_err());
/// assert!(VName::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct VName(String);

impl VName {
    /// Creates a `VName`, validating its characters and length.
    ///
    /// # Errors
    ///
    /// Returns [`ElementError::InvalidVName`] if `name` is empty, longer than
    /// 255 characters, or contains characters outside `[A-Za-z0-9_-]`.
    pub fn new(name: impl Into<String>) -> Result<Self, ElementError> {
        let name = name.into();
        let valid = !name.is_empty()
            && name.len() <= MAX_LEN
            && name
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');

        if valid {
            Ok(Self(name))
        } else {
            Err(ElementError::InvalidVName(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VName {
    type Error = ElementError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for VName {
    type Error = ElementError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for VName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for VName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for VName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let name = VName::new("in-octets_5m").unwrap();
        assert_eq!(name, "in-octets_5m");
        assert_eq!(name.to_string(), "in-octets_5m");
    }

    #[test]
    fn test_rejects_invalid_characters() {
        for invalid in ["", "a b", "a:b", "a=b", "ümlaut", "a,b"] {
            assert_eq!(
                VName::new(invalid),
                Err(ElementError::InvalidVName(invalid.to_string())),
                "{invalid:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_length_limit() {
        assert!(VName::new("a".repeat(255)).is_ok());
        assert!(VName::new("a".repeat(256)).is_err());
    }
}
