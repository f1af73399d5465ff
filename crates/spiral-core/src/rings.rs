//! Flat-ring discretization of the cone.
//!
//! Rings are plain data so the net builder never needs the spiral itself.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SpiralError;
use crate::spiral::{DoubleConicalSpiral, Helix, MAX_SLICES};

/// Radii of both helices at one slice's midpoint height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub r_outer: f64,
    pub r_inner: f64,
}

impl Ring {
    pub fn new(r_outer: f64, r_inner: f64) -> Self {
        Self { r_outer, r_inner }
    }

    pub fn average_radius(&self) -> f64 {
        0.5 * (self.r_outer + self.r_inner)
    }
}

impl DoubleConicalSpiral {
    /// One ring per slice, bottom first.
    ///
    /// `None` uses the spiral's whole-turn count; an explicit zero is treated
    /// as a single slice. Explicit counts above [`MAX_SLICES`] are rejected.
    pub fn get_xy_circles_for_visualization(
        &self,
        num_turns: Option<usize>,
    ) -> Result<Vec<Ring>, SpiralError> {
        let slices = num_turns.unwrap_or_else(|| self.slice_count()).max(1);
        if slices > MAX_SLICES {
            return Err(SpiralError::ExcessiveSubdivision {
                quantity: "slice",
                count: slices as f64,
                limit: MAX_SLICES,
            });
        }
        let rings: Vec<Ring> = self
            .slice_midpoints(slices)
            .into_iter()
            .map(|z| Ring::new(self.radius(z, Helix::Outer), self.radius(z, Helix::Inner)))
            .collect();
        debug!(count = rings.len(), "derived flat rings");
        Ok(rings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spiral::SpiralConfig;

    fn four_turn_spiral() -> DoubleConicalSpiral {
        DoubleConicalSpiral::new(SpiralConfig {
            num_turns: 4.0,
            ..SpiralConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_rings_follow_turn_count() {
        let rings = four_turn_spiral().get_xy_circles_for_visualization(None).unwrap();
        assert_eq!(rings.len(), 4);
        assert!((rings[0].r_outer - 13.125).abs() < 1e-12);
        assert!((rings[0].r_inner - 4.375).abs() < 1e-12);
        assert!((rings[3].r_outer - 1.875).abs() < 1e-12);
    }

    #[test]
    fn test_rings_shrink_with_height() {
        let rings = four_turn_spiral().get_xy_circles_for_visualization(Some(12)).unwrap();
        assert_eq!(rings.len(), 12);
        for pair in rings.windows(2) {
            assert!(pair[1].r_outer < pair[0].r_outer);
            assert!(pair[1].r_inner < pair[0].r_inner);
        }
    }

    #[test]
    fn test_zero_slices_yields_one_ring() {
        let rings = four_turn_spiral().get_xy_circles_for_visualization(Some(0)).unwrap();
        assert_eq!(rings.len(), 1);
        assert!((rings[0].r_outer - 7.5).abs() < 1e-12);
    }

    #[test]
    fn test_excessive_slice_request_rejected() {
        let err = four_turn_spiral()
            .get_xy_circles_for_visualization(Some(usize::MAX))
            .unwrap_err();
        assert_eq!(
            err,
            SpiralError::ExcessiveSubdivision {
                quantity: "slice",
                count: usize::MAX as f64,
                limit: MAX_SLICES,
            }
        );
    }

    #[test]
    fn test_ring_average() {
        let r = Ring::new(10.0, 4.0);
        assert_eq!(r.average_radius(), 7.0);
    }
}
