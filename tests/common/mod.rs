//! Shared test utilities for intake integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top
//! of each harness file. Builders construct canonical records directly;
//! fixtures hold raw-row corpora in the three source casings.

// Each harness binary compiles its own copy; not every harness uses
// every helper.
#![allow(dead_code)]

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
