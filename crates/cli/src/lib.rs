//! Vessel Store CLI library
//!
//! Commands are generic over [`vessel_domain::VesselRepository`] so the
//! binary can wire them to MongoDB or to an in-memory collection.

pub mod commands;
pub mod output;
pub mod store;
