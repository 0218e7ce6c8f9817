//! Named visual profiles and their fusion into a project mood board.

pub(crate) mod profiles;
pub(crate) mod synth;
