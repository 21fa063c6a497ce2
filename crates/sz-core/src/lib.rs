//! sz-core: shared foundation for solarsize.
//!
//! Contains:
//! - numeric (Real, tolerances, domain guards, rounding helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;

pub use error::{SzError, SzResult};
pub use numeric::*;
