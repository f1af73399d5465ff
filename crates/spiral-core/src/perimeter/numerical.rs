use super::{PerimeterMethod, PerimeterResult};
use crate::linspace;
use crate::spiral::{DoubleConicalSpiral, Helix, HelixSamples};

/// Default number of samples along the height.
pub const DEFAULT_NUM_POINTS: usize = 1000;

/// Sums chord lengths through evenly spaced samples on `[0, h]`.
///
/// The polyline is inscribed in the helix, so it never exceeds the true length
/// and grows toward it as samples are added.
#[derive(Debug, Clone, Copy)]
pub struct NumericalMethod {
    pub num_points: usize,
}

impl Default for NumericalMethod {
    fn default() -> Self {
        Self {
            num_points: DEFAULT_NUM_POINTS,
        }
    }
}

impl NumericalMethod {
    pub fn new(num_points: usize) -> Self {
        Self { num_points }
    }
}

/// Length of the polyline through consecutive samples.
pub fn polyline_length(samples: &HelixSamples) -> f64 {
    let mut points = samples.points();
    let Some(mut prev) = points.next() else {
        return 0.0;
    };
    let mut length = 0.0;
    for curr in points {
        length += prev.distance_to(&curr);
        prev = curr;
    }
    length
}

impl PerimeterMethod for NumericalMethod {
    fn name(&self) -> &'static str {
        "numerical"
    }

    fn compute(&self, spiral: &DoubleConicalSpiral) -> PerimeterResult {
        let z_values = linspace(0.0, spiral.height(), self.num_points);
        let outer = polyline_length(&spiral.coordinates(&z_values, Helix::Outer));
        let inner = polyline_length(&spiral.coordinates(&z_values, Helix::Inner));
        PerimeterResult::new(outer, inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perimeter::AnalyticalMethod;
    use crate::spiral::SpiralConfig;

    #[test]
    fn test_fewer_than_two_samples_is_zero() {
        let s = DoubleConicalSpiral::new(SpiralConfig::default()).unwrap();
        assert_eq!(NumericalMethod::new(0).compute(&s).total, 0.0);
        assert_eq!(NumericalMethod::new(1).compute(&s).total, 0.0);
    }

    #[test]
    fn test_two_samples_is_base_to_apex_chord() {
        let s = DoubleConicalSpiral::new(SpiralConfig {
            num_turns: 3.0,
            ..SpiralConfig::default()
        })
        .unwrap();
        let r = NumericalMethod::new(2).compute(&s);
        // Base point (15, 0, 0) to apex (0, 0, 20).
        assert!((r.outer - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_inscribed_polyline_undercounts() {
        let s = DoubleConicalSpiral::new(SpiralConfig::default()).unwrap();
        let numerical = NumericalMethod::default().compute(&s);
        let analytical = AnalyticalMethod::default().compute(&s);
        assert!(numerical.total < analytical.total);
        assert!((analytical.total - numerical.total) / analytical.total < 1e-3);
    }
}
