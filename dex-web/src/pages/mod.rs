//! Page modules

pub mod pools;

pub use pools::PoolsPage;
