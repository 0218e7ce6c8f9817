//! Shared primitives: error taxonomy, small value types and numeric helpers.

pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod math;
