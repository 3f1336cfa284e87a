//! Step engine for the Seep fluid grid.
//!
//! Provides [`FluidEngine`], which owns the cell buffers and the rule
//! pipeline. Each [`step()`](FluidEngine::step) runs every rule as one
//! snapshot-to-buffer pass and swaps the buffers between passes. Edits are
//! applied between steps through [`set_cell`](FluidEngine::set_cell) or
//! [`apply_edits`](FluidEngine::apply_edits).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod edit;
pub mod engine;
pub mod metrics;
pub mod snapshot;

pub use config::{ConfigError, EngineConfig, FlowParams};
pub use edit::{CellEdit, EditReceipt};
pub use engine::FluidEngine;
pub use metrics::StepMetrics;
pub use snapshot::{OwnedSnapshot, Snapshot};
