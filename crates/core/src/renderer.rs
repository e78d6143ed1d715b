//! FrameRenderer: one rotation in, one composed frame out.
//!
//! Pure and synchronous. Each call allocates its own grid, so two calls never
//! share state and identical inputs give byte-identical frames.

use crate::frame::Frame;
use crate::shade::Shade;
use crate::torus::{project, Rotation, SurfaceSample};
use crate::types::{RotationState, GRID_HEIGHT, GRID_WIDTH};

/// Render the torus at `state` and return the frame plus the next orientation.
pub fn render(state: RotationState) -> (Frame, RotationState) {
    let mut frame = Frame::blank(GRID_WIDTH, GRID_HEIGHT);
    let rot = Rotation::new(state);

    for sample in SurfaceSample::iter() {
        let p = project(sample, &rot);
        if !p.is_visible() {
            continue;
        }
        frame.plot(p.column, p.row, p.ooz, Shade::from_luminance(p.luminance));
    }

    (frame, state.advance())
}

/// [`render`] with the angles passed and returned as bare values.
pub fn render_angles(angle_a: f64, angle_b: f64) -> (Frame, f64, f64) {
    let (frame, next) = render(RotationState::new(angle_a, angle_b));
    (frame, next.angle_a, next.angle_b)
}
