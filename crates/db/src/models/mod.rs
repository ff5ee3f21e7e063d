//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus a `Deserialize` DTO for writes where one exists.

pub mod garment;
pub mod usage_event;
