#![forbid(unsafe_code)]

//! Version tuples and the bump policy
//!
//! Versions are `X.Y.Z` triples of non-negative integers. A bump is only
//! accepted when it is a minor release (minor increased, patch reset to 0) or
//! a patch release (minor unchanged, patch increased), and the major component
//! never moves.

use crate::error::VersionError;
use std::fmt;
use std::str::FromStr;

/// A `major.minor.patch` version triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Creates a version from its three components
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parses an `X.Y.Z` string
    ///
    /// The string must split on `.` into exactly three parts, and each part
    /// must be a plain decimal number (no sign, no whitespace).
    pub fn parse(s: &str) -> Result<Self, VersionError> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(VersionError::InvalidFormat(s.to_string()));
        }

        let major = parse_component(s, "major", parts[0])?;
        let minor = parse_component(s, "minor", parts[1])?;
        let patch = parse_component(s, "patch", parts[2])?;

        Ok(Version::new(major, minor, patch))
    }
}

fn parse_component(
    version: &str,
    component: &'static str,
    value: &str,
) -> Result<u64, VersionError> {
    let invalid = || VersionError::InvalidComponent {
        version: version.to_string(),
        component,
        value: value.to_string(),
    };

    // u64::from_str accepts a leading '+'
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse().map_err(|_| invalid())
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Kind of an accepted bump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseKind {
    /// Minor increased and patch reset to zero
    Minor,
    /// Minor unchanged and patch increased
    Patch,
}

impl fmt::Display for ReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseKind::Minor => write!(f, "minor release"),
            ReleaseKind::Patch => write!(f, "patch release"),
        }
    }
}

/// Checks that `requested` is an allowed bump from `current`
///
/// The "must be bigger" check runs before the major check, so `2.3.5 -> 3.0.0`
/// reports `NotGreater` while `2.3.5 -> 3.4.0` reports `MajorChange`.
pub fn classify_bump(current: &Version, requested: &Version) -> Result<ReleaseKind, VersionError> {
    let is_minor_release = current.minor < requested.minor && requested.patch == 0;
    let is_patch_release = current.minor == requested.minor && current.patch < requested.patch;

    let kind = if is_minor_release {
        ReleaseKind::Minor
    } else if is_patch_release {
        ReleaseKind::Patch
    } else {
        return Err(VersionError::NotGreater {
            current: current.to_string(),
            requested: requested.to_string(),
        });
    };

    if current.major != requested.major {
        return Err(VersionError::MajorChange {
            current: current.to_string(),
            requested: requested.to_string(),
        });
    }

    Ok(kind)
}
