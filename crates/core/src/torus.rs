//! Torus sampling and projection.
//!
//! The sample set is fixed: theta walks the tube cross-section (outer loop),
//! phi walks the revolution circle (inner loop). Sample angles are computed
//! as `step * index` so the set never drifts with accumulated rounding and
//! does not depend on the current rotation.

use std::f64::consts::TAU;

use crate::types::{RotationState, GRID_HEIGHT, GRID_WIDTH, K1, K2, PHI_STEP, R1, R2, THETA_STEP};

/// One parametric point on the torus surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSample {
    /// Tube angle.
    pub theta: f64,
    /// Revolution angle.
    pub phi: f64,
}

fn steps(step: f64) -> impl Iterator<Item = f64> + Clone {
    (0u32..)
        .map(move |i| f64::from(i) * step)
        .take_while(|angle| *angle < TAU)
}

impl SurfaceSample {
    /// All samples for one frame, theta-major.
    pub fn iter() -> impl Iterator<Item = SurfaceSample> {
        steps(THETA_STEP)
            .flat_map(|theta| steps(PHI_STEP).map(move |phi| SurfaceSample { theta, phi }))
    }
}

/// Number of samples visited per frame.
pub fn sample_count() -> usize {
    steps(THETA_STEP).count() * steps(PHI_STEP).count()
}

/// Per-frame trig of the two rotation angles.
#[derive(Debug, Clone, Copy)]
pub struct Rotation {
    cos_a: f64,
    sin_a: f64,
    cos_b: f64,
    sin_b: f64,
}

impl Rotation {
    pub fn new(state: RotationState) -> Self {
        let (sin_a, cos_a) = state.angle_a.sin_cos();
        let (sin_b, cos_b) = state.angle_b.sin_cos();
        Self {
            cos_a,
            sin_a,
            cos_b,
            sin_b,
        }
    }
}

/// A sample after rotation, perspective and lighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub column: i64,
    pub row: i64,
    /// One over camera-space z. Larger is nearer.
    pub ooz: f64,
    pub luminance: f64,
}

impl Projection {
    /// Lit (facing the light) and inside the grid.
    pub fn is_visible(&self) -> bool {
        self.luminance > 0.0
            && (0..GRID_WIDTH as i64).contains(&self.column)
            && (0..GRID_HEIGHT as i64).contains(&self.row)
    }
}

pub fn project(sample: SurfaceSample, rot: &Rotation) -> Projection {
    let (sin_theta, cos_theta) = sample.theta.sin_cos();
    let (sin_phi, cos_phi) = sample.phi.sin_cos();
    let Rotation {
        cos_a,
        sin_a,
        cos_b,
        sin_b,
    } = *rot;

    // Point on the tube cross-section before revolving.
    let circle_x = R2 + R1 * cos_theta;
    let circle_y = R1 * sin_theta;

    let x = circle_x * (cos_b * cos_phi + sin_a * sin_b * sin_phi) - circle_y * cos_a * sin_b;
    let y = circle_x * (sin_b * cos_phi - sin_a * cos_b * sin_phi) + circle_y * cos_a * cos_b;
    let z = K2 + cos_a * circle_x * sin_phi + circle_y * sin_a;
    let ooz = 1.0 / z;

    // Screen y grows downward.
    let column = (GRID_WIDTH as f64 / 2.0 + K1 * ooz * x).floor() as i64;
    let row = (GRID_HEIGHT as f64 / 2.0 - K1 * ooz * y).floor() as i64;

    let luminance = cos_phi * cos_theta * sin_b
        - cos_a * cos_theta * sin_phi
        - sin_a * sin_theta
        + cos_b * (cos_a * sin_theta - cos_theta * sin_a * sin_phi);

    Projection {
        column,
        row,
        ooz,
        luminance,
    }
}
