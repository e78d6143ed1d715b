//! Per-frame character grid with depth-tested writes.

use crate::shade::Shade;
use crate::types::HexColor;

/// One character cell of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenCell {
    pub glyph: char,
    pub color: Option<HexColor>,
    /// Occupying depth (1/z) of the sample that won this cell; 0 when empty.
    pub depth: f64,
}

impl Default for ScreenCell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            color: None,
            depth: 0.0,
        }
    }
}

impl ScreenCell {
    pub fn is_lit(&self) -> bool {
        self.color.is_some()
    }
}

/// A complete rendered frame, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    width: usize,
    height: usize,
    cells: Vec<ScreenCell>,
}

impl Frame {
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![ScreenCell::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[ScreenCell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, column: i64, row: i64) -> Option<usize> {
        if column < 0 || row < 0 {
            return None;
        }
        let (column, row) = (column as usize, row as usize);
        if column >= self.width || row >= self.height {
            return None;
        }
        Some(column + row * self.width)
    }

    pub fn cell(&self, column: usize, row: usize) -> Option<&ScreenCell> {
        self.idx(column as i64, row as i64).map(|i| &self.cells[i])
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[ScreenCell]> + '_ {
        self.cells.chunks(self.width.max(1))
    }

    /// Number of cells that received a lit sample.
    pub fn lit_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_lit()).count()
    }

    /// Record a sample if it is nearer than what the cell already holds.
    ///
    /// Ties keep the earlier writer. Off-grid coordinates are ignored.
    /// Returns whether the cell was overwritten.
    pub fn plot(&mut self, column: i64, row: i64, ooz: f64, shade: Shade) -> bool {
        let Some(i) = self.idx(column, row) else {
            return false;
        };
        let cell = &mut self.cells[i];
        if ooz > cell.depth {
            *cell = ScreenCell {
                glyph: shade.glyph,
                color: Some(shade.color),
                depth: ooz,
            };
            true
        } else {
            false
        }
    }

    /// Glyphs only, one line per row.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.rows() {
            out.extend(row.iter().map(|c| c.glyph));
            out.push('\n');
        }
        out
    }

    /// Span markup for a whitespace-preserving text surface.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.encode_markup_into(&mut out);
        out
    }

    /// Append span markup to `out`.
    ///
    /// Lit cells become `<span style="color: #rrggbb">g</span>`, blank cells
    /// stay bare, and every row ends with `\n`.
    pub fn encode_markup_into(&self, out: &mut String) {
        out.reserve(self.lit_cells() * 36 + (self.width + 1) * self.height);
        for row in self.rows() {
            for cell in row {
                match cell.color {
                    Some(color) => {
                        out.push_str("<span style=\"color: ");
                        out.push_str(color.hex());
                        out.push_str("\">");
                        out.push(cell.glyph);
                        out.push_str("</span>");
                    }
                    None => out.push(cell.glyph),
                }
            }
            out.push('\n');
        }
    }
}
