//! Triage engine
//!
//! The algorithmic core: filtering, priority scoring, grouping, and sorting
//! over in-memory alert batches. Every operation here is total — filters
//! return empty batches, unknown group fields return empty mappings, and the
//! scorer defines away its only division hazard.

pub mod filter;
pub mod group;
pub mod score;
pub mod sort;

pub use group::GroupField;
