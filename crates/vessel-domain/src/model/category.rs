//! CategoryReference - The kind of vessel (cargo, tanker, ...)

/// Reference to a vessel category, identified by its UUID
///
/// Category names are resolved elsewhere; only the UUID is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryReference(String);

impl CategoryReference {
    pub fn new(uuid: impl Into<String>) -> Self {
        Self(uuid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CategoryReference {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
