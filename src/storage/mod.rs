//! Budget document loading
//!
//! The budget is read once from a YAML document at startup; nothing is ever
//! written back.

pub mod yaml;

pub use yaml::{load_from_file, load_from_str};
