//! Flow rules for the Seep fluid grid engine.
//!
//! # Pipeline order (each step)
//!
//! 1. [`VerticalFlow`]: gravity. Each open cell drains into the open cell
//!    beneath it, up to that cell's remaining capacity.
//! 2. [`LateralFlow`]: leveling. Each *grounded* open cell shares a third
//!    of its surplus with each lower open neighbour to the left and right.
//!
//! Both rules are [`Incremental`](seep_rule::WriteMode::Incremental): they
//! read the pass snapshot and apply debit/credit pairs to the next-state
//! buffer, so fluid is moved and never created.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod defaults;
pub(crate) mod grid_helpers;
pub mod lateral;
pub mod vertical;

pub use defaults::{DEFAULT_CAPACITY, DEFAULT_DAMPING, DEFAULT_MIN_TRANSFER};
pub use lateral::LateralFlow;
pub use vertical::VerticalFlow;
