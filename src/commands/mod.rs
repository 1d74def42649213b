//! Command implementations

pub mod clean_cache;
pub mod clone;
pub mod completions;
pub mod version;
