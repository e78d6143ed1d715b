//! Donut core - pure, deterministic frame rendering
//!
//! Renders a rotating torus into a 120x40 grid of colored glyphs. The
//! renderer has no I/O and no hidden state:
//!
//! - **Deterministic**: the same rotation always gives a byte-identical frame
//! - **Self-contained**: every call allocates its own grid
//! - **Explicit state**: the next rotation is returned, never stored
//!
//! # Module Structure
//!
//! - [`torus`]: fixed surface sampling, rotation, perspective, lighting
//! - [`shade`]: luminance bucket → glyph and color
//! - [`frame`]: depth-tested grid and its markup/text serialization
//! - [`renderer`]: the per-frame kernel
//! - [`driver`]: tick source, display sink, cancellation, and the loop tying them together
//! - [`markup`]: a display sink that writes span markup
//!
//! # Example
//!
//! ```
//! use tui_donut_core::render;
//! use tui_donut_types::RotationState;
//!
//! let (frame, next) = render(RotationState::default());
//! assert_eq!(frame.to_text().lines().count(), 40);
//! assert!(frame.lit_cells() > 0);
//! assert!((next.angle_a - 0.04).abs() < 1e-12);
//! ```

pub mod driver;
pub mod frame;
pub mod markup;
pub mod renderer;
pub mod shade;
pub mod torus;

pub use tui_donut_types as types;

pub use driver::{
    CancelToken, DisplaySink, DriveSummary, Driver, ImmediateTicks, IntervalTicks, SinkError,
    Tick, TickSource,
};
pub use frame::{Frame, ScreenCell};
pub use markup::MarkupSink;
pub use renderer::{render, render_angles};
pub use shade::Shade;
pub use torus::{Projection, SurfaceSample};
