//! Core types and traits for the Seep fluid grid engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! cell model shared by every other crate: the closed [`CellKind`]
//! enumeration, per-cell [`CellState`] storage, the materialised [`Cell`]
//! view handed to renderers, step identifiers, edit errors, and the
//! [`GridSnapshot`] read trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;
pub mod traits;

pub use cell::{Cell, CellKind, CellState};
pub use error::EditError;
pub use id::{CellCoord, TickId};
pub use traits::GridSnapshot;
