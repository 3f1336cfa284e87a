//! Cell colouring.

use seep_core::{Cell, CellKind};

/// Clamp a stored fill to `[0, 1]` for display.
///
/// Fills above 1 read as visually full; NaN reads as dry.
pub fn visual_fill(fill: f64) -> f64 {
    if fill.is_nan() {
        0.0
    } else {
        fill.clamp(0.0, 1.0)
    }
}

/// Maps a cell to a `0xAARRGGBB` colour.
pub trait ColorPolicy {
    /// Colour for `cell`.
    fn color(&self, cell: &Cell) -> u32;
}

/// Solid cells in one colour; empty cells blended from background to
/// fluid colour by [`visual_fill`].
///
/// ```
/// use seep_core::{Cell, CellKind};
/// use seep_view::{ColorPolicy, DefaultPalette};
///
/// let p = DefaultPalette::default();
/// let full = Cell { kind: CellKind::Empty, fill: 1.0, row: 0, col: 0 };
/// assert_eq!(p.color(&full), DefaultPalette::FLUID);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DefaultPalette {
    /// Colour of a dry empty cell.
    pub background: u32,
    /// Colour of a solid cell.
    pub solid: u32,
    /// Colour of a full empty cell.
    pub fluid: u32,
}

impl DefaultPalette {
    /// Black.
    pub const BACKGROUND: u32 = 0x0000_0000;
    /// White.
    pub const SOLID: u32 = 0xFFFF_FFFF;
    /// Blue.
    pub const FLUID: u32 = 0x0034_C3EB;
}

impl Default for DefaultPalette {
    fn default() -> Self {
        Self {
            background: Self::BACKGROUND,
            solid: Self::SOLID,
            fluid: Self::FLUID,
        }
    }
}

impl ColorPolicy for DefaultPalette {
    fn color(&self, cell: &Cell) -> u32 {
        match cell.kind {
            CellKind::Solid => self.solid,
            CellKind::Empty => lerp_argb(self.background, self.fluid, visual_fill(cell.fill)),
        }
    }
}

/// Per-channel linear blend, `t` in `[0, 1]`.
fn lerp_argb(from: u32, to: u32, t: f64) -> u32 {
    (0..4).fold(0u32, |acc, channel| {
        let shift = channel * 8;
        let a = f64::from((from >> shift) & 0xFF);
        let b = f64::from((to >> shift) & 0xFF);
        let c = (a + (b - a) * t).round() as u32 & 0xFF;
        acc | (c << shift)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn empty(fill: f64) -> Cell {
        Cell {
            kind: CellKind::Empty,
            fill,
            row: 0,
            col: 0,
        }
    }

    #[test]
    fn visual_fill_clamps() {
        assert_eq!(visual_fill(-0.001), 0.0);
        assert_eq!(visual_fill(1.2), 1.0);
        assert_eq!(visual_fill(0.4), 0.4);
        assert_eq!(visual_fill(f64::NAN), 0.0);
    }

    #[test]
    fn endpoints_are_exact() {
        let p = DefaultPalette::default();
        assert_eq!(p.color(&empty(0.0)), DefaultPalette::BACKGROUND);
        assert_eq!(p.color(&empty(1.0)), DefaultPalette::FLUID);
        assert_eq!(p.color(&empty(1.5)), DefaultPalette::FLUID);
        let wall = Cell {
            kind: CellKind::Solid,
            ..empty(0.7)
        };
        assert_eq!(p.color(&wall), DefaultPalette::SOLID);
    }

    #[test]
    fn half_fill_is_halfway() {
        let p = DefaultPalette::default();
        // 0x34/2 = 0x1A, 0xC3/2 = 97.5 -> 0x62, 0xEB/2 = 117.5 -> 0x76
        assert_eq!(p.color(&empty(0.5)), 0x001A_6276);
    }

    proptest! {
        #[test]
        fn blue_channel_grows_with_fill(a in 0.0f64..1.0, b in 0.0f64..1.0) {
            let p = DefaultPalette::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(p.color(&empty(lo)) & 0xFF <= p.color(&empty(hi)) & 0xFF);
        }
    }
}
