//! intake-analytics — aggregate analytics over canonical intake records.
//!
//! The back half of the intake pipeline:
//!
//! ```text
//! canonical records ──► Analytics Engine ──► aggregate views ──► renderer
//! ```
//!
//! Three view families, one per record kind:
//!
//! - [`candidate`] — recruitment funnel, qualification gates, score
//!   distributions/statistics/correlations, geography, time series, risk
//!   and compliance.
//! - [`customer`] — inquiry trends, referral sources, sentiment, patient
//!   problems, service hours/times, zip codes, contact and callback views.
//! - [`form`] — applicant gate, criterion breakdowns, compliance and
//!   availability distributions, headline counters.
//!
//! Every function is pure and total over its input slice: no I/O, no
//! shared state between calls, and explicit zero fallbacks instead of NaN
//! for empty input. The heavy lifting shared across families lives in
//! [`stats`] and [`dates`].

pub mod candidate;
pub mod customer;
pub mod dates;
pub mod form;
pub mod stats;
