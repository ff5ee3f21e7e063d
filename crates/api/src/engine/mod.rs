//! Orchestration across inventory, recommendation and rotation.
//!
//! Handlers stay thin: they parse the request and call into here. Each
//! function owns one end-to-end use case of the closet.

pub mod delivery;
pub mod inventory;
pub mod recommend;
