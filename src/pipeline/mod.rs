//! End-to-end analysis of a registry and its content fingerprint.

pub(crate) mod analysis;
pub(crate) mod fingerprint;
