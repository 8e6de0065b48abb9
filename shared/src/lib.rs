//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the web front end and the chain's LCD
//! (REST) endpoint. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for LCD queries
//!   - **[`dto::epoch`]**: Epoch query responses and the [`Epoch`](dto::epoch::Epoch) value
//!
//! ## Wire Format
//!
//! The LCD serializes protobuf messages to JSON:
//! - Field names are **snake_case**, matching the Rust field names
//! - 64-bit integers are encoded as decimal strings
//! - Timestamps are RFC3339 strings, durations are seconds with an `s` suffix (`"86400s"`)
//!
//! ## Usage in Frontend
//!
//! ```rust
//! use shared::dto::epoch::EpochsResponse;
//!
//! let body = r#"{"epochs":[{
//!     "identifier": "day",
//!     "start_time": "2021-06-18T17:00:00Z",
//!     "duration": "86400s",
//!     "current_epoch": "12",
//!     "current_epoch_start_time": "2021-06-30T17:00:00Z",
//!     "epoch_counting_started": true,
//!     "current_epoch_start_height": "123456"
//! }]}"#;
//!
//! let response: EpochsResponse = serde_json::from_str(body).unwrap();
//! let epoch = response.find("day").unwrap();
//! assert_eq!(epoch.end_time.to_rfc3339(), "2021-07-01T17:00:00+00:00");
//! ```

pub mod dto;

pub use dto::*;
