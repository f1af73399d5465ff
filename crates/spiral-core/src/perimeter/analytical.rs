use tracing::debug;

use super::quadrature::{integrate, QuadratureConfig, QuadratureResult};
use super::{PerimeterMethod, PerimeterResult};
use crate::spiral::{DoubleConicalSpiral, Helix};

/// Integrates the arc-length element over `[0, h]` for each helix.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticalMethod {
    pub quadrature: QuadratureConfig,
}

impl AnalyticalMethod {
    pub fn new(quadrature: QuadratureConfig) -> Self {
        Self { quadrature }
    }

    /// Length of a single helix with its integration error bound.
    pub fn helix_length(&self, spiral: &DoubleConicalSpiral, which: Helix) -> QuadratureResult {
        let result = integrate(
            |z| spiral.arc_length_integrand(z, which),
            0.0,
            spiral.height(),
            &self.quadrature,
        );
        debug!(
            helix = which.name(),
            length = result.value,
            error = result.error,
            panels = result.subdivisions,
            "integrated helix length"
        );
        result
    }
}

impl PerimeterMethod for AnalyticalMethod {
    fn name(&self) -> &'static str {
        "analytical"
    }

    fn compute(&self, spiral: &DoubleConicalSpiral) -> PerimeterResult {
        let outer = self.helix_length(spiral, Helix::Outer);
        let inner = self.helix_length(spiral, Helix::Inner);
        let error = outer.error.hypot(inner.error);
        PerimeterResult::new(outer.value, inner.value).with_error(error)
    }
}
