//! DonutView: maps a rendered `Frame` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Frame;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub const TITLE: &str = "Rotating ASCII Donut";
pub const CAPTION: &str = "3D ASCII torus with real-time trigonometric rotation";

/// Rows used by the title and caption, including one blank spacer each.
const CHROME_ROWS: u16 = 4;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Where the frame landed inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Top-left of the visible part of the frame, in viewport coordinates.
    pub x: u16,
    pub y: u16,
    /// First frame column/row shown. Non-zero when the viewport is smaller than the frame.
    pub skip_cols: u16,
    pub skip_rows: u16,
    pub cols: u16,
    pub rows: u16,
    pub chrome: bool,
}

/// Centers the donut frame on a dark background, with a title and caption
/// when the terminal is tall enough.
pub struct DonutView {
    base: CellStyle,
    title: CellStyle,
    caption: CellStyle,
    chrome: bool,
}

impl Default for DonutView {
    fn default() -> Self {
        let base = CellStyle {
            fg: Rgb::new(74, 222, 128),
            bg: Rgb::BLACK,
            bold: false,
        };
        Self {
            base,
            title: CellStyle {
                fg: Rgb::new(240, 240, 240),
                bg: Rgb::BLACK,
                bold: true,
            },
            caption: base.with_fg(Rgb::new(140, 140, 150)),
            chrome: true,
        }
    }
}

impl DonutView {
    /// Frame only, no title or caption.
    pub fn bare() -> Self {
        Self {
            chrome: false,
            ..Self::default()
        }
    }

    pub fn placement(&self, frame: &Frame, viewport: Viewport) -> Placement {
        let fw = frame.width().min(u16::MAX as usize) as u16;
        let fh = frame.height().min(u16::MAX as usize) as u16;
        let chrome = self.chrome && viewport.height >= fh + CHROME_ROWS;
        let used_h = if chrome { fh + CHROME_ROWS } else { fh };

        let x = viewport.width.saturating_sub(fw) / 2;
        let top = viewport.height.saturating_sub(used_h) / 2;
        let y = if chrome { top + 2 } else { top };

        Placement {
            x,
            y,
            skip_cols: fw.saturating_sub(viewport.width) / 2,
            skip_rows: fh.saturating_sub(viewport.height) / 2,
            cols: fw.min(viewport.width),
            rows: fh.min(viewport.height),
            chrome,
        }
    }

    /// Render a frame into an existing framebuffer.
    ///
    /// Allocation-free once `fb` has the viewport's size.
    pub fn render_into(&self, frame: &Frame, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(self.base.into_cell(' '));
        if viewport.is_empty() {
            return;
        }

        let p = self.placement(frame, viewport);
        if p.chrome {
            fb.put_str_centered(p.y - 2, TITLE, self.title);
            fb.put_str_centered(p.y + p.rows + 1, CAPTION, self.caption);
        }

        for dy in 0..p.rows {
            for dx in 0..p.cols {
                let col = (p.skip_cols + dx) as usize;
                let row = (p.skip_rows + dy) as usize;
                let Some(cell) = frame.cell(col, row) else {
                    continue;
                };
                let style = match cell.color {
                    Some(color) => self.base.with_fg(Rgb::from(color)),
                    None => self.base,
                };
                fb.set(p.x + dx, p.y + dy, style.into_cell(cell.glyph));
            }
        }
    }

    pub fn render(&self, frame: &Frame, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, &mut fb);
        fb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Shade;

    fn dotted(width: usize, height: usize) -> Frame {
        let mut frame = Frame::blank(width, height);
        frame.plot(0, 0, 0.5, Shade::from_index(11));
        frame.plot(width as i64 - 1, height as i64 - 1, 0.5, Shade::from_index(0));
        frame
    }

    #[test]
    fn frame_is_centered_with_chrome() {
        let frame = dotted(4, 2);
        let view = DonutView::default();
        let fb = view.render(&frame, Viewport::new(10, 8));
        // 2 frame rows + 4 chrome rows in 8 => top margin 1, frame at row 3.
        let p = view.placement(&frame, Viewport::new(10, 8));
        assert_eq!((p.x, p.y, p.chrome), (3, 3, true));
        assert_eq!(fb.get(3, 3).unwrap().ch, '@');
        assert_eq!(fb.get(6, 4).unwrap().ch, '.');
        assert_eq!(fb.get(3, 3).unwrap().style.fg, Rgb::new(255, 255, 255));
    }

    #[test]
    fn chrome_dropped_when_short() {
        let frame = dotted(4, 2);
        let view = DonutView::default();
        let p = view.placement(&frame, Viewport::new(10, 5));
        assert!(!p.chrome);
        assert_eq!(p.y, 1);
    }

    #[test]
    fn small_viewport_shows_the_middle() {
        let frame = dotted(6, 4);
        let view = DonutView::bare();
        let p = view.placement(&frame, Viewport::new(2, 2));
        assert_eq!((p.skip_cols, p.skip_rows, p.cols, p.rows), (2, 1, 2, 2));
        assert_eq!((p.x, p.y), (0, 0));
    }

    #[test]
    fn empty_viewport_is_noop() {
        let frame = dotted(4, 2);
        let fb = DonutView::default().render(&frame, Viewport::new(0, 0));
        assert!(fb.cells().is_empty());
    }
}
