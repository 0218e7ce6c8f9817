//! Shot model and the ordered registry the pipeline consumes.

pub(crate) mod builder;
pub(crate) mod model;
pub(crate) mod registry;
pub(crate) mod sample;
