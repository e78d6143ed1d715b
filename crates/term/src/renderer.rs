//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame, every frame after a size change and every frame after
//! [`TerminalRenderer::invalidate`] are full redraws. Otherwise rows that are
//! unchanged are skipped outright (the title, caption and margins never
//! change) and only changed runs inside the donut rows are re-emitted. Runs
//! separated by a few unchanged cells are merged, because reprinting a short
//! gap is cheaper than another cursor move.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// [`TerminalSink`](crate::sink::TerminalSink) calls this after a resize
    /// event, since the emulator may have cleared or reflowed the screen.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// The caller keeps one `FrameBuffer` and passes it in every frame; after
    /// the call it holds the previous frame and can be overwritten without
    /// reallocating.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.encode_swap(fb)?;
        self.flush_buf()
    }

    fn encode_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(0, 0));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Unchanged cells between two changed runs that are reprinted rather than
/// skipped with a cursor move.
const MERGE_GAP: usize = 4;

/// Attributes last sent to the terminal within one encode.
///
/// Donut cells differ only in foreground, so tracking each attribute on its
/// own keeps the stream to one SGR per color change.
#[derive(Debug, Default)]
struct Pen {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    bold: Option<bool>,
}

impl Pen {
    fn apply(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        if self.bold != Some(style.bold) {
            let attr = if style.bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            };
            out.queue(SetAttribute(attr))?;
            self.bold = Some(style.bold);
        }
        if self.fg != Some(style.fg) {
            out.queue(SetForegroundColor(truecolor(style.fg)))?;
            self.fg = Some(style.fg);
        }
        if self.bg != Some(style.bg) {
            out.queue(SetBackgroundColor(truecolor(style.bg)))?;
            self.bg = Some(style.bg);
        }
        Ok(())
    }

    fn print(&mut self, out: &mut Vec<u8>, cells: &[Cell]) -> Result<()> {
        for cell in cells {
            self.apply(out, cell.style)?;
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    /// Reset attributes, if anything was drawn.
    fn finish(self, out: &mut Vec<u8>) -> Result<()> {
        if self.bold.is_some() {
            out.queue(ResetColor)?;
            out.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

fn truecolor(rgb: Rgb) -> Color {
    let Rgb { r, g, b } = rgb;
    Color::Rgb { r, g, b }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        pen.print(out, fb.row(y))?;
    }
    pen.finish(out)
}

/// Encode only what changed between `prev` and `next`.
///
/// Buffers of different sizes fall back to a full redraw. Identical buffers
/// encode to nothing.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        return encode_full_into(next, out);
    }

    let mut pen = Pen::default();
    for y in 0..next.height() {
        let (old, new) = (prev.row(y), next.row(y));
        if old == new {
            continue;
        }
        for run in changed_runs(old, new) {
            out.queue(cursor::MoveTo(run.start as u16, y))?;
            pen.print(out, &new[run])?;
        }
    }
    pen.finish(out)
}

/// Column ranges where `new` differs from `old`, with short gaps merged.
fn changed_runs<'a>(old: &'a [Cell], new: &'a [Cell]) -> impl Iterator<Item = Range<usize>> + 'a {
    let width = new.len().min(old.len());
    let differs = move |i: usize| old[i] != new[i];
    let mut x = 0;
    std::iter::from_fn(move || {
        let start = (x..width).find(|&i| differs(i))?;
        let mut end = start + 1;
        loop {
            while end < width && differs(end) {
                end += 1;
            }
            match (end..width.min(end + MERGE_GAP + 1)).find(|&i| differs(i)) {
                Some(next) => end = next + 1,
                None => break,
            }
        }
        x = end;
        Some(start..end)
    })
}
