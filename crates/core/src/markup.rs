//! Markup display sink.
//!
//! Writes each frame as span markup, ready to drop into a monospaced,
//! whitespace-preserving text surface such as `<pre>`.

use std::io::Write;

use crate::driver::{DisplaySink, SinkError};
use crate::frame::Frame;

/// Line written between consecutive frames.
pub const FRAME_SEPARATOR: &str = "\u{c}\n";

pub struct MarkupSink<W: Write> {
    out: W,
    buf: String,
    frames_written: u64,
}

impl<W: Write> MarkupSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: String::with_capacity(64 * 1024),
            frames_written: 0,
        }
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for MarkupSink<W> {
    fn paint(&mut self, frame: &Frame) -> Result<(), SinkError> {
        self.buf.clear();
        if self.frames_written > 0 {
            self.buf.push_str(FRAME_SEPARATOR);
        }
        frame.encode_markup_into(&mut self.buf);
        self.out.write_all(self.buf.as_bytes())?;
        self.out.flush()?;
        self.frames_written += 1;
        Ok(())
    }
}
