//! intake — call-intake analytics for caregiver recruitment and customer
//! service.
//!
//! This crate re-exports the two pipeline layers so integration tests and
//! the CLI binary can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! raw rows ──► Normalizer ──► Analytics Engine ──► aggregate views
//!              (intake-core)  (intake-analytics)   (JSON to renderer)
//! ```
//!
//! Rows arrive as arbitrary key/value maps (CSV headers, snake_case API
//! fields, camelCase JSON); the normalizer resolves them onto canonical
//! records, rejecting only rows missing their identity fields. The
//! analytics engine is a family of pure aggregation functions over those
//! records — no persistence, no shared state, no failure modes beyond
//! degenerate input, which degrades to zero counts rather than errors.

pub use intake_analytics as analytics;
pub use intake_core as core;
