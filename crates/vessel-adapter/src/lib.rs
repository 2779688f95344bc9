//! # Vessel Adapter Layer
//!
//! Outbound persistence adapters for the vessel domain.
//!
//! ## Structure
//!
//! - `error` - Conversion and store errors
//! - `repository/` - Document mapping, store handles and the `VesselService`

pub mod error;
pub mod repository;

pub use error::{ConversionError, StoreError};
pub use repository::collection::VesselCollection;
pub use repository::in_memory::InMemoryVesselCollection;
pub use repository::service::VesselService;
