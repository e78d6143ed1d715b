//! Terminal layer for the donut.
//!
//! Rendering is split the same way a small game renderer would split it:
//! a pure view maps a `core::Frame` into a styled framebuffer, and a
//! renderer flushes that framebuffer to the terminal with crossterm, emitting
//! only changed runs between frames.
//!
//! - [`DonutView`] is pure and allocation-free after warm-up
//! - [`TerminalSink`] plugs the view and renderer into the core driver
//! - [`TerminalTicks`] paces frames and turns quit keys into cancellation

pub mod donut_view;
pub mod fb;
pub mod renderer;
pub mod sink;
pub mod ticks;

pub use tui_donut_core as core;
pub use tui_donut_types as types;

pub use donut_view::{DonutView, Placement, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sink::TerminalSink;
pub use ticks::{should_quit, ResizeSignal, TerminalTicks};
