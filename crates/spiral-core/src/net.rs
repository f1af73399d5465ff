//! Annular net: struts joining each ring's outer boundary to its inner one.
//!
//! Every ring gets `max(4, floor(avg_circumference / target_spacing))` anchor
//! points on its outer boundary, evenly spaced over `[0, 2π)`. Each anchor
//! fans out `arc_density` struts to the inner boundary across an arc of
//! `arc_span_deg` centered on the anchor's angle.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::SpiralError;
use crate::geometry::point::Point2d;
use crate::linspace;
use crate::rings::Ring;
use crate::spiral::DoubleConicalSpiral;

/// Fewest anchors any ring receives.
pub const MIN_ANCHOR_POINTS: usize = 4;

/// Most anchors a single ring may receive.
pub const MAX_ANCHOR_POINTS: usize = 10_000_000;

/// Most struts a single anchor may fan out.
pub const MAX_ARC_DENSITY: usize = 10_000;

/// Validated net layout parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetLayout {
    target_spacing: f64,
    arc_span_deg: f64,
    arc_density: usize,
}

/// Totals for a whole ring set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NetStats {
    pub total_length: f64,
    pub strut_count: usize,
    pub anchor_points: usize,
}

impl NetLayout {
    pub fn new(
        target_spacing: f64,
        arc_span_deg: f64,
        arc_density: usize,
    ) -> Result<Self, SpiralError> {
        if !target_spacing.is_finite() {
            return Err(SpiralError::NonFinite {
                field: "target_spacing",
            });
        }
        if !arc_span_deg.is_finite() {
            return Err(SpiralError::NonFinite {
                field: "arc_span_deg",
            });
        }
        if target_spacing <= 0.0 {
            return Err(SpiralError::NonPositiveSpacing {
                spacing: target_spacing,
            });
        }
        if arc_density == 0 {
            return Err(SpiralError::ZeroArcDensity);
        }
        if arc_density > MAX_ARC_DENSITY {
            return Err(SpiralError::ExcessiveSubdivision {
                quantity: "strut",
                count: arc_density as f64,
                limit: MAX_ARC_DENSITY,
            });
        }
        Ok(Self {
            target_spacing,
            arc_span_deg,
            arc_density,
        })
    }

    pub fn target_spacing(&self) -> f64 {
        self.target_spacing
    }

    pub fn arc_span_deg(&self) -> f64 {
        self.arc_span_deg
    }

    pub fn arc_density(&self) -> usize {
        self.arc_density
    }

    /// Anchor count for a ring, proportional to its mean circumference.
    ///
    /// Rings needing more than [`MAX_ANCHOR_POINTS`] are rejected.
    pub fn anchor_count(&self, ring: &Ring) -> Result<usize, SpiralError> {
        let spaced = (TAU * ring.average_radius() / self.target_spacing).floor();
        if spaced > MAX_ANCHOR_POINTS as f64 {
            return Err(SpiralError::ExcessiveSubdivision {
                quantity: "anchor point",
                count: spaced,
                limit: MAX_ANCHOR_POINTS,
            });
        }
        // Negative or NaN ratios saturate to 0.
        Ok((spaced as usize).max(MIN_ANCHOR_POINTS))
    }

    /// Offsets of the fan's inner angles relative to the anchor angle.
    fn fan_offsets(&self) -> Vec<f64> {
        let half_span = 0.5 * self.arc_span_deg.to_radians();
        linspace(-half_span, half_span, self.arc_density)
    }

    fn ring_stats(&self, ring: &Ring, offsets: &[f64]) -> Result<NetStats, SpiralError> {
        let anchors = self.anchor_count(ring)?;
        let step = TAU / anchors as f64;
        let mut length = 0.0;
        for angle in (0..anchors).map(|k| step * k as f64) {
            let outer = Point2d::from_polar(ring.r_outer, angle);
            for offset in offsets {
                let inner = Point2d::from_polar(ring.r_inner, angle + offset);
                length += outer.distance_to(&inner);
            }
        }
        Ok(NetStats {
            total_length: length,
            strut_count: anchors * offsets.len(),
            anchor_points: anchors,
        })
    }

    /// Net length of a single ring.
    pub fn ring_length(&self, ring: &Ring) -> Result<f64, SpiralError> {
        Ok(self.ring_stats(ring, &self.fan_offsets())?.total_length)
    }

    /// Length, strut and anchor totals over every ring.
    #[instrument(skip(self, rings), fields(rings = rings.len()))]
    pub fn net_stats(&self, rings: &[Ring]) -> Result<NetStats, SpiralError> {
        let offsets = self.fan_offsets();
        let mut stats = NetStats::default();
        for ring in rings {
            let s = self.ring_stats(ring, &offsets)?;
            stats.total_length += s.total_length;
            stats.strut_count += s.strut_count;
            stats.anchor_points += s.anchor_points;
        }
        debug!(
            length = stats.total_length,
            struts = stats.strut_count,
            "computed annular net"
        );
        Ok(stats)
    }

    pub fn net_length(&self, rings: &[Ring]) -> Result<f64, SpiralError> {
        Ok(self.net_stats(rings)?.total_length)
    }
}

impl DoubleConicalSpiral {
    /// Net length over `rings` using this spiral's layout parameters.
    ///
    /// Rings derived from this spiral never exceed the anchor limit; rings
    /// supplied from elsewhere may.
    pub fn calculate_net_length_angles(&self, rings: &[Ring]) -> Result<f64, SpiralError> {
        self.net_layout().net_length(rings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_anchor_count_floor() {
        let layout = NetLayout::new(100.0, 30.0, 5).unwrap();
        assert_eq!(layout.anchor_count(&Ring::new(1.0, 0.5)), Ok(MIN_ANCHOR_POINTS));
    }

    #[test]
    fn test_anchor_count_tracks_circumference() {
        let layout = NetLayout::new(1.0, 30.0, 5).unwrap();
        // Mean radius 10 -> circumference 62.83 -> 62 anchors.
        assert_eq!(layout.anchor_count(&Ring::new(15.0, 5.0)), Ok(62));
    }

    #[test]
    fn test_radial_struts_with_zero_span() {
        // Zero span collapses every fan onto the anchor's own angle.
        let layout = NetLayout::new(1.0, 0.0, 3).unwrap();
        let ring = Ring::new(10.0, 4.0);
        let anchors = layout.anchor_count(&ring).unwrap();
        let stats = layout.net_stats(&[ring]).unwrap();
        assert_eq!(stats.strut_count, anchors * 3);
        assert_relative_eq!(stats.total_length, 6.0 * (anchors * 3) as f64, epsilon = 1e-9);
    }

    #[test]
    fn test_single_strut_sits_at_fan_start() {
        let layout = NetLayout::new(100.0, 180.0, 1).unwrap();
        let ring = Ring::new(1.0, 1.0);
        // Four anchors, each joined to the point a quarter turn behind it:
        // chord of a unit circle over 90 degrees.
        let expected = 4.0 * (2.0 * (PI / 4.0).sin());
        assert_relative_eq!(layout.ring_length(&ring).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_total_is_sum_of_rings() {
        let layout = NetLayout::new(0.5, 30.0, 5).unwrap();
        let rings = [Ring::new(12.0, 4.0), Ring::new(6.0, 2.0)];
        let sum: f64 = rings.iter().map(|r| layout.ring_length(r).unwrap()).sum();
        assert_relative_eq!(layout.net_length(&rings).unwrap(), sum, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_ring_set() {
        let layout = NetLayout::new(0.3, 30.0, 5).unwrap();
        assert_eq!(layout.net_stats(&[]), Ok(NetStats::default()));
    }

    #[test]
    fn test_vanishing_spacing_is_rejected_not_overflowed() {
        let layout = NetLayout::new(1e-300, 30.0, 5).unwrap();
        let err = layout.net_length(&[Ring::new(15.0, 5.0)]).unwrap_err();
        assert!(matches!(
            err,
            SpiralError::ExcessiveSubdivision {
                quantity: "anchor point",
                limit: MAX_ANCHOR_POINTS,
                ..
            }
        ));
    }

    #[test]
    fn test_anchor_count_just_below_limit() {
        // Unit mean radius over a spacing slightly above 2π / MAX.
        let spacing = TAU / MAX_ANCHOR_POINTS as f64 * 1.000_001;
        let layout = NetLayout::new(spacing, 0.0, 1).unwrap();
        let anchors = layout.anchor_count(&Ring::new(1.0, 1.0)).unwrap();
        assert!(anchors <= MAX_ANCHOR_POINTS);
        assert!(anchors > MAX_ANCHOR_POINTS - 100);
    }

    #[test]
    fn test_excessive_arc_density_rejected() {
        assert!(matches!(
            NetLayout::new(0.3, 30.0, MAX_ARC_DENSITY + 1),
            Err(SpiralError::ExcessiveSubdivision {
                quantity: "strut",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_layouts() {
        assert_eq!(
            NetLayout::new(0.0, 30.0, 5),
            Err(SpiralError::NonPositiveSpacing { spacing: 0.0 })
        );
        assert_eq!(NetLayout::new(0.3, 30.0, 0), Err(SpiralError::ZeroArcDensity));
        assert_eq!(
            NetLayout::new(0.3, f64::INFINITY, 5),
            Err(SpiralError::NonFinite {
                field: "arc_span_deg"
            })
        );
    }
}
