//! Grid topology for Seep simulations.
//!
//! [`GridDims`] owns the row-major index arithmetic every pass relies on:
//! bounds checks, the cell directly below, and the left/right neighbours.
//! [`GridGeometry`] ties the grid to a pixel area and a fixed cell edge
//! length, deriving the dimensions once at startup and mapping pointer
//! positions back to cells for the input layer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dims;
pub mod error;
pub mod geometry;

pub use dims::GridDims;
pub use error::GridError;
pub use geometry::{GridGeometry, PixelRect};
