//! Terminal tick source.
//!
//! Paces frames with `crossterm::event::poll`, so waiting for the next frame
//! and watching for quit keys happen in the same call. A quit key fires the
//! cancellation token, which is the teardown hook for the whole loop. A
//! resize event raises a [`ResizeSignal`] shared with the sink, so the next
//! paint is a full redraw.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, warn};

use crate::core::{CancelToken, Tick, TickSource};

/// `q`, `Esc` or `Ctrl-C`.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// "The terminal was resized since the last paint" flag.
///
/// Clones share the flag. The tick source raises it, the sink takes it.
#[derive(Debug, Clone, Default)]
pub struct ResizeSignal {
    raised: Arc<AtomicBool>,
}

impl ResizeSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    /// Clear the flag, returning whether it was raised.
    pub fn take(&self) -> bool {
        self.raised.swap(false, Ordering::SeqCst)
    }
}

pub struct TerminalTicks {
    interval: Duration,
    last_tick: Option<Instant>,
    index: u64,
    cancel: CancelToken,
    resize: ResizeSignal,
}

impl TerminalTicks {
    pub fn new(interval: Duration, cancel: CancelToken) -> Self {
        Self {
            interval,
            last_tick: None,
            index: 0,
            cancel,
            resize: ResizeSignal::new(),
        }
    }

    /// Raise `signal` on resize events instead of a private flag.
    pub fn with_resize_signal(mut self, signal: ResizeSignal) -> Self {
        self.resize = signal;
        self
    }

    fn handle_event(&mut self, ev: Event) {
        match ev {
            Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(key) => {
                debug!("quit key pressed");
                self.cancel.cancel();
            }
            Event::Resize(w, h) => {
                debug!("terminal resized to {w}x{h}");
                self.resize.raise();
            }
            _ => {}
        }
    }
}

impl TickSource for TerminalTicks {
    fn next_tick(&mut self) -> Option<Tick> {
        loop {
            if self.cancel.is_cancelled() {
                return None;
            }

            let due = match self.last_tick {
                Some(last) if last.elapsed() < self.interval => false,
                _ => true,
            };
            if due {
                self.last_tick = Some(Instant::now());
                let tick = Tick { index: self.index };
                self.index += 1;
                return Some(tick);
            }

            let timeout = self
                .last_tick
                .and_then(|last| self.interval.checked_sub(last.elapsed()))
                .unwrap_or(Duration::ZERO);

            match event::poll(timeout) {
                Ok(true) => match event::read() {
                    Ok(ev) => self.handle_event(ev),
                    Err(err) => {
                        warn!("terminal input failed: {err}");
                        self.cancel.cancel();
                    }
                },
                Ok(false) => {}
                Err(err) => {
                    warn!("terminal input failed: {err}");
                    self.cancel.cancel();
                }
            }
        }
    }
}
