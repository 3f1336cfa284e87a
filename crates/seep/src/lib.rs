//! Seep: cellular-automaton fluid simulation on a 2D grid.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Seep sub-crates. For most users, adding `seep` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use seep::prelude::*;
//!
//! // The default 900x600 px area with 20 px cells: 30 rows x 45 columns.
//! let mut engine = FluidEngine::new(EngineConfig::new(GridGeometry::default())).unwrap();
//!
//! // A shelf with a full cell of fluid resting on it.
//! let receipts = engine.apply_edits(vec![
//!     CellEdit::solid(10, 20),
//!     CellEdit::solid(10, 21),
//!     CellEdit::fluid(9, 20),
//! ]);
//! assert!(receipts.iter().all(|r| r.accepted));
//!
//! let metrics = engine.step();
//! assert_eq!(metrics.tick_id, TickId(1));
//!
//! // The drop levels along the shelf; total fluid is unchanged.
//! let snap = engine.snapshot();
//! assert!(snap.cell(9, 21).unwrap().fill > 0.0);
//! assert!((snap.total_mass() - 1.0).abs() < 1e-12);
//!
//! // Hosts colour cells through a policy.
//! let palette = DefaultPalette::default();
//! assert_eq!(palette.color(&snap.cell(10, 20).unwrap()), DefaultPalette::SOLID);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `seep-core` | Cell model, IDs, edit errors, `GridSnapshot` |
//! | [`grid`] | `seep-grid` | Grid dimensions, topology, pixel geometry |
//! | [`rule`] | `seep-rule` | `FlowRule` trait, pass context, pipeline validation |
//! | [`rules`] | `seep-rules` | Vertical and lateral flow rules |
//! | [`engine`] | `seep-engine` | `FluidEngine`, config, edits, snapshots, metrics |
//! | [`view`] | `seep-view` | Colour policies and text rendering |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`seep-core`).
pub use seep_core as types;

/// Grid dimensions, neighbour lookup, and pixel geometry (`seep-grid`).
pub use seep_grid as grid;

/// Flow rule trait and pipeline validation (`seep-rule`).
///
/// The [`rule::FlowRule`] trait is the extension point for custom passes.
pub use seep_rule as rule;

/// Standard flow rules (`seep-rules`).
///
/// [`rules::VerticalFlow`] then [`rules::LateralFlow`] make up the
/// default pipeline.
pub use seep_rules as rules;

/// The step engine (`seep-engine`).
pub use seep_engine as engine;

/// Rendering-side helpers (`seep-view`).
pub use seep_view as view;

/// Common imports for typical Seep usage.
///
/// ```rust
/// use seep::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use seep_core::{Cell, CellCoord, CellKind, CellState, EditError, GridSnapshot, TickId};

    // Grid
    pub use seep_grid::{GridDims, GridError, GridGeometry};

    // Rules
    pub use seep_rule::{FlowRule, PassContext, PassOutcome, RuleError, WriteMode};
    pub use seep_rules::{LateralFlow, VerticalFlow};

    // Engine
    pub use seep_engine::{
        CellEdit, ConfigError, EditReceipt, EngineConfig, FlowParams, FluidEngine,
        OwnedSnapshot, Snapshot, StepMetrics,
    };

    // View
    pub use seep_view::{visual_fill, ColorPolicy, DefaultPalette, TextView};
}
