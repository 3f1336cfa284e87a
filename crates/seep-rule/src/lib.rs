//! Flow rule trait and pass context for Seep simulations.
//!
//! A step is an ordered list of passes. Each pass runs one [`FlowRule`]
//! against a frozen snapshot of the grid and writes the next state into a
//! separate buffer through [`PassContext`]. Reads and writes never alias,
//! so the result of a pass cannot depend on the order cells are visited.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod pipeline;
pub mod rule;

pub use context::PassContext;
pub use pipeline::{validate_rules, RuleError, RulePlan};
pub use rule::{FlowRule, PassOutcome, WriteMode};
