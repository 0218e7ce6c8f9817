//! Project-level reductions: timing statistics and budget.

pub(crate) mod budget;
pub(crate) mod stats;
