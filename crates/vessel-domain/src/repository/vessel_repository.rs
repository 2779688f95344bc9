//! Vessel Repository - Abstract persistence for Vessels
//!
//! The domain asks for three things: the vessels a center may see,
//! one vessel by id, and a way to register a new vessel.

use crate::model::center::CenterReference;
use crate::model::vessel::{Vessel, VesselId};

/// Vessel Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// Failures are the adapter's own error type so driver errors reach
/// the caller untouched.
///
/// "Not found" is `Ok(None)`, never an error.
pub trait VesselRepository {
    /// Error raised by the backing store
    type Error: std::error::Error + Send + Sync + 'static;

    /// Find every vessel visible to `center`, in store order
    fn find_all(
        &self,
        center: &CenterReference,
    ) -> impl core::future::Future<Output = Result<Vec<Vessel>, Self::Error>> + Send;

    /// Find a vessel by ID
    fn find(
        &self,
        id: &VesselId,
    ) -> impl core::future::Future<Output = Result<Option<Vessel>, Self::Error>> + Send;

    /// Persist a new vessel under a freshly generated ID and return that ID
    fn add(
        &self,
        vessel: &Vessel,
    ) -> impl core::future::Future<Output = Result<VesselId, Self::Error>> + Send;
}
