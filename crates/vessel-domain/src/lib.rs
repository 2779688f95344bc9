//! # Vessel Domain Layer
//!
//! Pure domain types for vessels, with zero external dependencies.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Entities & Value Objects                      ││
//! │  │  repository/- Trait definitions (not implementations)       ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! How a vessel is laid out in MongoDB, and how its identifier is
//! generated, is the adapter's business. Nothing here changes if the
//! document store does.

pub mod model;
pub mod repository;

// Re-export commonly used types
pub use model::{
    category::CategoryReference,
    center::CenterReference,
    vessel::{Vessel, VesselId},
    visibility::{ParseVisibilityError, Visibility},
};

pub use repository::vessel_repository::VesselRepository;
