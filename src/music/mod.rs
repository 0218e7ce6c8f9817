//! Music cue selection: an ordered policy from action markers to cue styles.

pub(crate) mod cue;
