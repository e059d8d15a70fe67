//! intake-core — canonical records and the record normalizer.
//!
//! This crate is the front half of the intake pipeline:
//!
//! ```text
//! raw rows ──► Normalizer ──► canonical records ──► Analytics Engine
//! ```
//!
//! Raw rows are arbitrary key/value maps from CSV, Excel, or API sources;
//! the normalizer resolves per-field alias lists into one canonical record
//! shape per domain (candidate, customer, form submission). Records are
//! immutable values with no back-references — each analytics call owns its
//! own collection.

pub mod config;
pub mod normalize;
pub mod types;

pub use normalize::{RawRow, RejectReason};
pub use types::{CandidateRecord, CustomerRecord, FormRecord, InterviewResult, YesNo};
