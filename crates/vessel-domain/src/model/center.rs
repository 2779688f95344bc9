//! CenterReference - Pointer to an operating center
//!
//! Centers live outside this crate; a vessel only carries the UUID
//! of the center that created it.

/// Reference to a center, identified by its UUID
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CenterReference(String);

impl CenterReference {
    pub fn new(uuid: impl Into<String>) -> Self {
        Self(uuid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CenterReference {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_value_equality() {
        assert_eq!(CenterReference::new("1"), CenterReference::new("1"));
        assert_ne!(CenterReference::new("1"), CenterReference::new("2"));
    }
}
