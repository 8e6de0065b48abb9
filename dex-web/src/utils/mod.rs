//! Constants and display formatting

pub mod constants;
pub mod format;
