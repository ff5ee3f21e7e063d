//! Domain logic for the smart closet.
//!
//! Everything in this crate is pure: no database, no GPIO, no logging.
//! Callers fetch inventory snapshots and pass them in.

pub mod error;
pub mod garment;
pub mod preferences;
pub mod recommendation;
pub mod types;
