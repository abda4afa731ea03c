//! Typed values for the display and time attributes of a graph.
//!
//! Each type here has one infallible constructor from its natural Rust type
//! and fallible conversions from text, so that values read from files or the
//! command line are validated at the point of assignment.
//!
//! - [`Timestamp`]: a point in time, rendered as whole seconds since the epoch.
//! - [`Dimension`]: a pixel count for the width or height of the graph.
//! - [`ImageFormat`]: one of the output formats rrdtool accepts for `--imgformat`.

use std::{fmt, str::FromStr, time::SystemTime};

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::error::AttributeError;

// =============================================================================
// Timestamp
// =============================================================================

/// A point in time used for the `--start` and `--end` flags.
///
/// # Examples
///
/// ```
/// use rrdgraph_core::attribute::Timestamp;
///
/// let ts: Timestamp = "1700000000".parse().unwrap();
/// assert_eq!(ts.to_string(), "1700000000");
///
/// let ts: Timestamp = "2023-11-14T22:13:20Z".parse().unwrap();
/// assert_eq!(ts.epoch_seconds(), 1_700_000_000);
///
/// assert!("hello".parse::<Timestamp>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "RawTimestamp")]
pub struct Timestamp(DateTime<Utc>);

const TIMESTAMP_EXPECTED: &str = "a timestamp (epoch seconds or RFC 3339)";

impl Timestamp {
    /// Returns the current time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from whole seconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::Type`] if `secs` is outside of the range
    /// representable by [`DateTime<Utc>`].
    pub fn from_epoch_seconds(secs: i64) -> Result<Self, AttributeError> {
        Utc.timestamp_opt(secs, 0)
            .single()
            .map(Self)
            .ok_or_else(|| AttributeError::type_error(TIMESTAMP_EXPECTED, secs))
    }

    /// Returns the timestamp as whole seconds since the Unix epoch.
    ///
    /// Sub-second precision is truncated.
    pub fn epoch_seconds(&self) -> i64 {
        self.0.timestamp()
    }

    /// Returns the underlying date-time.
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        Self(DateTime::<Utc>::from(time))
    }
}

impl FromStr for Timestamp {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(secs) = trimmed.parse::<i64>() {
            return Self::from_epoch_seconds(secs);
        }

        DateTime::parse_from_rfc3339(trimmed)
            .map(|datetime| Self(datetime.with_timezone(&Utc)))
            .map_err(|_| AttributeError::type_error(TIMESTAMP_EXPECTED, s))
    }
}

impl TryFrom<&str> for Timestamp {
    type Error = AttributeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Timestamp {
    type Error = AttributeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<i64> for Timestamp {
    type Error = AttributeError;

    fn try_from(secs: i64) -> Result<Self, Self::Error> {
        Self::from_epoch_seconds(secs)
    }
}

/// Renders whole epoch seconds, the form rrdtool expects on the command line.
impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.epoch_seconds())
    }
}

/// Timestamps in documents are either integer seconds or RFC 3339 strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Seconds(i64),
    Text(String),
}

impl TryFrom<RawTimestamp> for Timestamp {
    type Error = AttributeError;

    fn try_from(raw: RawTimestamp) -> Result<Self, Self::Error> {
        match raw {
            RawTimestamp::Seconds(secs) => Self::from_epoch_seconds(secs),
            RawTimestamp::Text(text) => text.parse(),
        }
    }
}

// =============================================================================
// Dimension
// =============================================================================

/// Width or height of the graph canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct Dimension(u32);

const DIMENSION_EXPECTED: &str = "a numeric pixel count";

impl Dimension {
    /// Creates a dimension of `pixels` pixels.
    pub fn new(pixels: u32) -> Self {
        Self(pixels)
    }

    /// Returns the pixel count.
    pub fn pixels(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Dimension {
    fn from(pixels: u32) -> Self {
        Self(pixels)
    }
}

impl FromStr for Dimension {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| AttributeError::type_error(DIMENSION_EXPECTED, s))
    }
}

impl TryFrom<&str> for Dimension {
    type Error = AttributeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Dimension {
    type Error = AttributeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<i64> for Dimension {
    type Error = AttributeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| AttributeError::type_error(DIMENSION_EXPECTED, value))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// ImageFormat
// =============================================================================

/// Output image format passed to `--imgformat`.
///
/// Matching is exact: `"PNG"` is accepted, `"png"` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum ImageFormat {
    Png,
    Svg,
    Eps,
    Pdf,
}

impl ImageFormat {
    /// Every format accepted by [`ImageFormat::from_str`], in display order.
    pub const ALL: [ImageFormat; 4] = [Self::Png, Self::Svg, Self::Eps, Self::Pdf];

    /// Returns the rrdtool spelling of this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Svg => "SVG",
            Self::Eps => "EPS",
            Self::Pdf => "PDF",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| AttributeError::Validation {
                kind: "image format",
                value: s.to_string(),
                allowed: Self::ALL.map(|format| format.as_str()).join(", "),
            })
    }
}

impl TryFrom<&str> for ImageFormat {
    type Error = AttributeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for ImageFormat {
    type Error = AttributeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_from_epoch_text() {
        let ts: Timestamp = "1700000000".parse().unwrap();
        assert_eq!(ts.epoch_seconds(), 1_700_000_000);
        assert_eq!(ts.to_string(), "1700000000");
    }

    #[test]
    fn test_timestamp_from_rfc3339() {
        let ts: Timestamp = "2023-11-14T23:13:20+01:00".parse().unwrap();
        assert_eq!(ts.epoch_seconds(), 1_700_000_000);
    }

    #[test]
    fn test_timestamp_truncates_subseconds() {
        let ts: Timestamp = "2023-11-14T22:13:20.999Z".parse().unwrap();
        assert_eq!(ts.to_string(), "1700000000");
    }

    #[test]
    fn test_timestamp_rejects_text() {
        let err = "hello".parse::<Timestamp>().unwrap_err();
        assert!(err.is_type_error());
        assert!(err.to_string().contains("hello"));
    }

    #[test]
    fn test_timestamp_rejects_out_of_range_seconds() {
        let err = Timestamp::from_epoch_seconds(i64::MAX).unwrap_err();
        assert!(err.is_type_error());
    }

    #[test]
    fn test_timestamp_from_system_time() {
        let time = SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(42);
        assert_eq!(Timestamp::from(time).epoch_seconds(), 42);
    }

    #[test]
    fn test_dimension_parse() {
        assert_eq!("640".parse::<Dimension>().unwrap(), Dimension::new(640));
        assert!("ball".parse::<Dimension>().unwrap_err().is_type_error());
        assert!("-1".parse::<Dimension>().is_err());
        assert!(Dimension::try_from(-5_i64).is_err());
        assert_eq!(Dimension::try_from(480_i64).unwrap().pixels(), 480);
    }

    #[test]
    fn test_image_format_round_trip_names() {
        for format in ImageFormat::ALL {
            assert_eq!(format.as_str().parse::<ImageFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_image_format_rejects_unknown() {
        let err = "bread".parse::<ImageFormat>().unwrap_err();
        assert!(err.is_validation_error());
        assert!(err.to_string().contains("PNG, SVG, EPS, PDF"));

        assert!("png".parse::<ImageFormat>().is_err());
    }
}
