//! Terminal rendering of a snapshot.

use seep_core::{CellKind, GridSnapshot};

use crate::palette::visual_fill;

/// Renders a snapshot as one line of text per row.
///
/// | glyph | cell |
/// |-------|------|
/// | `#` | solid |
/// | ` ` | dry |
/// | `.` | fill up to 1/4 |
/// | `-` | up to 1/2 |
/// | `~` | up to 3/4 |
/// | `=` | above 3/4 |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextView {
    border: bool,
}

impl TextView {
    /// A view without a frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a `|` frame at both sides and a `+---+` rule top and bottom.
    pub fn with_border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    /// Glyph for one cell.
    pub fn glyph(kind: CellKind, fill: f64) -> char {
        if kind.is_solid() {
            return '#';
        }
        let v = visual_fill(fill);
        if v <= 0.0 {
            ' '
        } else if v <= 0.25 {
            '.'
        } else if v <= 0.5 {
            '-'
        } else if v <= 0.75 {
            '~'
        } else {
            '='
        }
    }

    /// Render to lines, top row first.
    pub fn lines(&self, snapshot: &dyn GridSnapshot) -> Vec<String> {
        let cols = snapshot.cols() as usize;
        let mut out = Vec::with_capacity(snapshot.rows() as usize + 2);
        let rule = format!("+{}+", "-".repeat(cols));
        if self.border {
            out.push(rule.clone());
        }
        for row in snapshot.states().chunks(cols.max(1)) {
            let body: String = row.iter().map(|s| Self::glyph(s.kind, s.fill)).collect();
            out.push(if self.border {
                format!("|{body}|")
            } else {
                body
            });
        }
        if self.border {
            out.push(rule);
        }
        out
    }

    /// Render to a single newline-separated string.
    pub fn render(&self, snapshot: &dyn GridSnapshot) -> String {
        self.lines(snapshot).join("\n")
    }
}
