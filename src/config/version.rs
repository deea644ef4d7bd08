//! Graph API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the Graph API to use, together with the per-version capabilities that
//! change how requests are encoded.

use crate::clients::TimestampFormat;
use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Graph API version.
///
/// The version is part of every request path (`/v2.4/me`). Versions differ in
/// how request timestamps are encoded; see [`ApiVersion::timestamp_format`].
///
/// # Example
///
/// ```rust
/// use facebook_graph::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version.to_string(), "v2.4");
///
/// let version: ApiVersion = "v2.2".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2_2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// Graph API v2.2
    V2_2,
    /// Graph API v2.3
    V2_3,
    /// Graph API v2.4
    V2_4,
    /// Custom version string (`vMAJOR.MINOR`) for versions not listed here.
    Custom(String),
}

impl ApiVersion {
    /// Returns the version this crate targets by default.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2_4
    }

    /// Returns `true` if this is one of the versions known to this crate.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Returns how timestamps are written into request forms for this version.
    ///
    /// v2.2 takes Unix epoch seconds; later versions take ISO-8601 strings
    /// with a numeric offset. Custom versions are assumed to be newer.
    #[must_use]
    pub const fn timestamp_format(&self) -> TimestampFormat {
        match self {
            Self::V2_2 => TimestampFormat::UnixSeconds,
            Self::V2_3 | Self::V2_4 | Self::Custom(_) => TimestampFormat::Iso8601,
        }
    }

    fn is_valid_version_format(s: &str) -> bool {
        let Some(rest) = s.strip_prefix('v') else {
            return false;
        };
        let mut parts = rest.split('.');
        let (Some(major), Some(minor), None) = (parts.next(), parts.next(), parts.next()) else {
            return false;
        };
        !major.is_empty()
            && !minor.is_empty()
            && major.chars().all(|c| c.is_ascii_digit())
            && minor.chars().all(|c| c.is_ascii_digit())
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V2_2 => "v2.2",
            Self::V2_3 => "v2.3",
            Self::V2_4 => "v2.4",
            Self::Custom(s) => s,
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        // Accept both "v2.4" and "2.4"
        let s = if s.starts_with('v') { s } else { format!("v{s}") };

        match s.as_str() {
            "v2.2" => Ok(Self::V2_2),
            "v2.3" => Ok(Self::V2_3),
            "v2.4" => Ok(Self::V2_4),
            _ => {
                if Self::is_valid_version_format(&s) {
                    Ok(Self::Custom(s))
                } else {
                    Err(ConfigError::InvalidApiVersion { version: s })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_parses_known_versions() {
        assert_eq!("v2.2".parse::<ApiVersion>().unwrap(), ApiVersion::V2_2);
        assert_eq!("v2.3".parse::<ApiVersion>().unwrap(), ApiVersion::V2_3);
        assert_eq!("2.4".parse::<ApiVersion>().unwrap(), ApiVersion::V2_4);
        assert_eq!(" V2.4 ".parse::<ApiVersion>().unwrap(), ApiVersion::V2_4);
    }

    #[test]
    fn test_api_version_accepts_custom_versions() {
        let version: ApiVersion = "v19.0".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("v19.0".to_string()));
        assert!(!version.is_known());
        assert_eq!(version.to_string(), "v19.0");
    }

    #[test]
    fn test_api_version_rejects_invalid_format() {
        for input in ["", "v", "v2", "v2.", "2024-10", "v2.4.1", "vx.y", "latest"] {
            assert!(
                input.parse::<ApiVersion>().is_err(),
                "expected '{input}' to be rejected"
            );
        }
    }

    #[test]
    fn test_api_version_display() {
        assert_eq!(ApiVersion::V2_2.to_string(), "v2.2");
        assert_eq!(ApiVersion::V2_4.to_string(), "v2.4");
    }

    #[test]
    fn test_timestamp_format_per_version() {
        assert_eq!(
            ApiVersion::V2_2.timestamp_format(),
            TimestampFormat::UnixSeconds
        );
        assert_eq!(ApiVersion::V2_3.timestamp_format(), TimestampFormat::Iso8601);
        assert_eq!(ApiVersion::V2_4.timestamp_format(), TimestampFormat::Iso8601);
        assert_eq!(
            ApiVersion::Custom("v19.0".to_string()).timestamp_format(),
            TimestampFormat::Iso8601
        );
    }

    #[test]
    fn test_latest_is_default() {
        assert_eq!(ApiVersion::default(), ApiVersion::latest());
        assert!(ApiVersion::latest().is_known());
    }
}
