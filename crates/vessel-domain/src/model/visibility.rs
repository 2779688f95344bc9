//! Visibility - Which centers may see a vessel
//!
//! Visibility is a Value Object - two visibilities with the same variant are equal.

use core::str::FromStr;

/// Who can see a vessel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Listed for every center
    AllCenters,

    /// Listed only for the center that created the vessel
    CreationCenterOnly,
}

impl Visibility {
    /// Get the display name of this visibility
    pub fn display_name(&self) -> &'static str {
        match self {
            Visibility::AllCenters => "all-centers",
            Visibility::CreationCenterOnly => "creation-center-only",
        }
    }

    /// Get all visibilities (useful for iteration)
    pub fn all() -> &'static [Visibility] {
        &[Visibility::AllCenters, Visibility::CreationCenterOnly]
    }
}

impl core::fmt::Display for Visibility {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Returned when a string names no known visibility
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVisibilityError {
    pub input: String,
}

impl core::fmt::Display for ParseVisibilityError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Unknown visibility '{}'. Expected one of: all-centers, creation-center-only",
            self.input
        )
    }
}

impl std::error::Error for ParseVisibilityError {}

impl FromStr for Visibility {
    type Err = ParseVisibilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Visibility::all()
            .iter()
            .copied()
            .find(|v| v.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseVisibilityError {
                input: s.to_string(),
            })
    }
}
