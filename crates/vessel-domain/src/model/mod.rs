//! Domain Models - The vocabulary of vessel tracking
//!
//! Every name here should match how centers talk about their fleet.

pub mod category;
pub mod center;
pub mod vessel;
pub mod visibility;
