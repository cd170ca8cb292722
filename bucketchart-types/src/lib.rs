//! # bucketchart-types
//!
//! Core types for projecting API analytics responses into charts. This crate
//! defines the bucket model the analytics backend produces and the chart
//! series shape renderers consume, plus the small pure helpers both
//! projectors use to read buckets.
//!
//! ## Design Goals
//!
//! - **Read-only model**: responses are built once per backend reply and never
//!   mutated
//! - **Total helpers**: reading a bucket never fails; missing data reads as
//!   `0` or as the bucket key
//! - **Optional serialization**: enable the `serde` feature for the JSON wire
//!   contract
//! - **Ergonomic builders**: fluent API for constructing responses in tests
//!   and fixtures
//!
//! ## Features
//!
//! - `serde`: JSON serialization of responses and chart series via serde
//!
//! ## Example
//!
//! ```rust
//! use bucketchart_types::{display_name, primary_value, time_label, TimeSeriesResponse};
//!
//! let response = TimeSeriesResponse::builder()
//!     .metric("HTTP_REQUESTS", |m| {
//!         m.bucket("t1", |b| {
//!             b.timestamp(1_735_689_600_000.0)
//!                 .bucket("2xx", |g| g.measure("COUNT", 90.0))
//!                 .bucket("5xx", |g| g.name("Errors").measure("COUNT", 10.0))
//!         })
//!     })
//!     .build();
//!
//! let slot = &response.metrics[0].buckets[0];
//! assert_eq!(time_label(slot), "2025-01-01T00:00:00.000Z");
//! assert_eq!(primary_value(slot), 100.0);
//! assert_eq!(display_name(&slot.buckets[1]), "Errors");
//! ```

mod bucket;
mod histogram;
mod metric;
mod series;
mod timestamp;

pub use bucket::*;
pub use histogram::*;
pub use metric::*;
pub use series::*;
pub use timestamp::*;
