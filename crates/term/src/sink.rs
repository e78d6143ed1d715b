//! Terminal display sink.

use std::io;

use crossterm::terminal;

use crate::core::{DisplaySink, Frame, SinkError};
use crate::donut_view::{DonutView, Viewport};
use crate::fb::FrameBuffer;
use crate::renderer::TerminalRenderer;
use crate::ticks::ResizeSignal;

/// Paints frames to the real terminal through a [`DonutView`].
///
/// The terminal size is read on every paint. A size that cannot be read, or
/// a zero-sized terminal, makes the sink unavailable for that frame. A
/// raised [`ResizeSignal`] makes the next paint a full redraw.
pub struct TerminalSink {
    renderer: TerminalRenderer,
    view: DonutView,
    fb: FrameBuffer,
    resize: ResizeSignal,
}

impl TerminalSink {
    pub fn new(view: DonutView) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view,
            fb: FrameBuffer::new(0, 0),
            resize: ResizeSignal::new(),
        }
    }

    /// Handle for the tick source to raise on resize events.
    pub fn resize_signal(&self) -> ResizeSignal {
        self.resize.clone()
    }

    pub fn renderer_mut(&mut self) -> &mut TerminalRenderer {
        &mut self.renderer
    }
}

impl DisplaySink for TerminalSink {
    fn paint(&mut self, frame: &Frame) -> Result<(), SinkError> {
        if self.resize.take() {
            self.renderer.invalidate();
        }

        let (w, h) = terminal::size()
            .map_err(|err| SinkError::Unavailable(format!("terminal size: {err}")))?;
        let viewport = Viewport::new(w, h);
        if viewport.is_empty() {
            return Err(SinkError::Unavailable(format!("terminal is {w}x{h}")));
        }

        self.view.render_into(frame, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb).map_err(|err| {
            SinkError::Io(
                err.downcast::<io::Error>()
                    .unwrap_or_else(|err| io::Error::new(io::ErrorKind::Other, err)),
            )
        })
    }
}
