//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define what the domain needs from persistence,
//! but NOT how it's actually done. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait VesselRepository│  VesselService<mongodb::Collection>
//!   fn find_all()       │  VesselService<InMemoryVesselCollection>
//!   fn find()           │
//!   fn add()            │
//! ```

pub mod vessel_repository;
