//! Vessel - A ship tracked by the centers
//!
//! Vessel is an Entity, but its identity is assigned late: callers build
//! a vessel without an id and the repository gives it one on insert.
//! Once assigned, the id never changes; there is no setter for it.

use super::category::CategoryReference;
use super::center::CenterReference;
use super::visibility::Visibility;

/// Unique identifier for a Vessel (canonical UUID text)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VesselId(String);

impl VesselId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An id with no characters is treated as absent
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl core::fmt::Display for VesselId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Vessel - Immutable value once built
///
/// Equality compares every field, so a vessel read back from the store
/// can be checked against the one that was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vessel {
    /// Identity, absent until persisted
    id: Option<VesselId>,
    /// Display name
    name: String,
    /// What kind of vessel this is
    category: CategoryReference,
    /// Center that registered the vessel
    creation_center: CenterReference,
    /// Which centers may list it
    visibility: Visibility,
}

impl Vessel {
    /// Create a new, not yet persisted Vessel
    pub fn new(
        name: impl Into<String>,
        category: CategoryReference,
        creation_center: CenterReference,
        visibility: Visibility,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            category,
            creation_center,
            visibility,
        }
    }

    /// Return a copy of this vessel carrying `id`
    pub fn with_id(&self, id: VesselId) -> Self {
        Self {
            id: Some(id),
            ..self.clone()
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> Option<&VesselId> {
        self.id.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &CategoryReference {
        &self.category
    }

    pub fn creation_center(&self) -> &CenterReference {
        &self.creation_center
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    // ========== Visibility Checks ==========

    /// Check if `center` is allowed to see this vessel
    pub fn is_visible_to(&self, center: &CenterReference) -> bool {
        match self.visibility {
            Visibility::AllCenters => true,
            Visibility::CreationCenterOnly => &self.creation_center == center,
        }
    }
}
