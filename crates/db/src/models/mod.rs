//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the stored row
//! - A `Deserialize` input DTO for the write operations
//! - The normalized write model the repository binds

pub mod stage;
