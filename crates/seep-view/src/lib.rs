//! Rendering-side interfaces for Seep grid snapshots.
//!
//! The engine never draws. A host reads a
//! [`GridSnapshot`](seep_core::GridSnapshot) after each step and asks a
//! [`ColorPolicy`] for the colour of each cell, or uses [`TextView`] for a
//! terminal rendering. Stored fills may drift slightly outside `[0, 1]`;
//! [`visual_fill`] clamps them for display only.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod palette;
pub mod text;

pub use palette::{visual_fill, ColorPolicy, DefaultPalette};
pub use text::TextView;
