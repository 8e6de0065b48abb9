//! Browser-side services: LCD queries and timers

pub mod epochs;
pub mod ticker;
