//! Camera plan suggestions: the action rule table plus intensity augmentation.

pub(crate) mod engine;
pub(crate) mod table;
