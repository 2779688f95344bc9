//! Persistence Adapters - Repository implementations
//!
//! `converter` maps vessels to documents, `collection` abstracts the
//! handle the documents live in, and `service` implements
//! `VesselRepository` on top of both.

pub mod collection;
pub mod converter;
pub mod in_memory;
pub mod service;
