//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&SqlitePool` as the first argument.

pub mod garment_repo;
pub mod usage_event_repo;

pub use garment_repo::GarmentRepo;
pub use usage_event_repo::UsageEventRepo;
