//! # Data Transfer Objects (DTOs)
//!
//! Data structures read from the chain LCD endpoint.
//!
//! ## Module Organization
//!
//! - [`epoch`] - Epoch schedule (`/osmosis/epochs/v1beta1/epochs`)
//!
//! ## Example JSON Communication
//!
//! ```text
//! GET /osmosis/epochs/v1beta1/epochs
//!
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "epochs": [
//!     {
//!       "identifier": "day",
//!       "start_time": "2021-06-18T17:00:00Z",
//!       "duration": "86400s",
//!       "current_epoch": "12",
//!       "current_epoch_start_time": "2021-06-30T17:00:00Z",
//!       "epoch_counting_started": true,
//!       "current_epoch_start_height": "123456"
//!     }
//!   ]
//! }
//! ```

pub mod epoch;

pub use epoch::*;
