use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use super::{PerimeterMethod, PerimeterResult};
use crate::spiral::{DoubleConicalSpiral, Helix};

/// Flat-circle lengths plus the number of circles used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircularResult {
    #[serde(flatten)]
    pub lengths: PerimeterResult,
    pub turns: usize,
}

/// One flat circle per whole turn, each at its slice's midpoint height.
///
/// Vertical travel is ignored, so this is the crudest of the three estimates.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircularMethod;

impl CircularMethod {
    pub fn evaluate(&self, spiral: &DoubleConicalSpiral) -> CircularResult {
        let turns = spiral.slice_count();
        let mut outer = 0.0;
        let mut inner = 0.0;
        for z in spiral.slice_midpoints(turns) {
            outer += TAU * spiral.radius(z, Helix::Outer);
            inner += TAU * spiral.radius(z, Helix::Inner);
        }
        CircularResult {
            lengths: PerimeterResult::new(outer, inner),
            turns,
        }
    }
}

impl PerimeterMethod for CircularMethod {
    fn name(&self) -> &'static str {
        "circular"
    }

    fn compute(&self, spiral: &DoubleConicalSpiral) -> PerimeterResult {
        self.evaluate(spiral).lengths
    }
}
