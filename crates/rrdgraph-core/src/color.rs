//! Color handling for graph series
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Any CSS color string is accepted and rendered in the
//! `#RRGGBB[AA]` form rrdtool uses in `LINE`, `AREA` and `HRULE` commands.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{DynamicColor, Srgb};
use serde::Deserialize;

use crate::error::ElementError;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_rrd_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use rrdgraph_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, ElementError> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(ElementError::InvalidColor(format!(
                "invalid color `{color_str}`: {err}"
            ))),
        }
    }

    /// Returns the color as `#RRGGBB`, or `#RRGGBBAA` if it is not fully opaque.
    ///
    /// # Examples
    ///
    /// ```
    /// use rrdgraph_core::color::Color;
    ///
    /// assert_eq!(Color::new("red").unwrap().to_rrd_string(), "#FF0000");
    /// assert_eq!(
    ///     Color::new("#0000ff80").unwrap().to_rrd_string(),
    ///     "#0000FF80"
    /// );
    /// ```
    pub fn to_rrd_string(&self) -> String {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        if rgba.a == u8::MAX {
            format!("#{:02X}{:02X}{:02X}", rgba.r, rgba.g, rgba.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", rgba.r, rgba.g, rgba.b, rgba.a)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ElementError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rrd_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#ff0000").is_ok());

        let invalid = Color::new("not-a-color");
        assert!(matches!(invalid, Err(ElementError::InvalidColor(_))));
    }

    #[test]
    fn test_color_rrd_string_opaque() {
        assert_eq!(Color::new("#00ff00").unwrap().to_rrd_string(), "#00FF00");
        assert_eq!(Color::new("black").unwrap().to_rrd_string(), "#000000");
    }

    #[test]
    fn test_color_rrd_string_translucent() {
        let color = Color::new("#ff000080").unwrap();
        assert_eq!(color.to_rrd_string(), "#FF000080");
    }

    #[test]
    fn test_color_eq_hash() {
        use std::collections::HashSet;

        let color1 = Color::new("red").unwrap();
        let color2 = Color::new("red").unwrap();
        let color3 = Color::new("blue").unwrap();

        assert_eq!(color1, color2);
        assert_ne!(color1, color3);

        let mut set = HashSet::new();
        set.insert(color1);
        assert!(set.contains(&color2));
        assert!(!set.contains(&color3));
    }
}
