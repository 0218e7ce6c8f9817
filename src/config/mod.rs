//! Project configuration loaded from TOML: title, report toggles and budget template.

pub(crate) mod project;
