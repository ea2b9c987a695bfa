//! NUCOS Core - shared types
//!
//! This crate provides the types used across the NUCOS crates:
//! - `ConversionError`: errors returned by lookups and conversions
//! - `TableError`: integrity errors in the unit table
//! - `normalize`: the unit-name lookup key

mod error;
mod name;

pub use error::{codes, ConversionError, TableError};
pub use name::{normalize, NormalizedName};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{normalize, ConversionError, NormalizedName, TableError};
}
