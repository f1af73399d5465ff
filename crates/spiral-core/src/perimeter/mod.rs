//! Helix length estimators and their comparison.
//!
//! Three independent strategies share the [`PerimeterMethod`] capability:
//! - [`AnalyticalMethod`]: adaptive quadrature of the arc-length element
//! - [`NumericalMethod`]: polyline through evenly spaced samples
//! - [`CircularMethod`]: one flat circle per whole turn
//!
//! The analytical value serves as the reference; differences between the
//! three are reported, never used to reject a result.

pub mod analytical;
pub mod circular;
pub mod numerical;
pub mod quadrature;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

pub use analytical::AnalyticalMethod;
pub use circular::{CircularMethod, CircularResult};
pub use numerical::NumericalMethod;

use crate::spiral::DoubleConicalSpiral;

/// Lengths of both helices as estimated by one method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerimeterResult {
    pub outer: f64,
    pub inner: f64,
    pub total: f64,
    /// Integration error bound; only the analytical method reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<f64>,
}

impl PerimeterResult {
    pub fn new(outer: f64, inner: f64) -> Self {
        Self {
            outer,
            inner,
            total: outer + inner,
            error: None,
        }
    }

    pub fn with_error(mut self, error: f64) -> Self {
        self.error = Some(error);
        self
    }
}

/// A strategy for estimating the combined helix length.
pub trait PerimeterMethod {
    /// Short label used in logs and reports.
    fn name(&self) -> &'static str;

    fn compute(&self, spiral: &DoubleConicalSpiral) -> PerimeterResult;
}

/// Pairwise absolute differences between method totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MethodDifferences {
    pub analytical_vs_numerical: f64,
    pub analytical_vs_circular: f64,
    pub numerical_vs_circular: f64,
}

/// Request parameters echoed alongside the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonParameters {
    pub numerical_points: usize,
    /// Recorded only; the circular slice count always follows the turn count.
    pub circular_slices: usize,
}

/// Which approximation lands closer to the analytical total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BestMatch {
    Numerical,
    Circular,
}

impl BestMatch {
    pub fn label(&self) -> &'static str {
        match self {
            BestMatch::Numerical => "Numerical",
            BestMatch::Circular => "Circular",
        }
    }
}

/// All three estimates plus their differences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub analytical: PerimeterResult,
    pub numerical: PerimeterResult,
    pub circular_approximation: CircularResult,
    pub differences: MethodDifferences,
    pub parameters: ComparisonParameters,
}

impl ComparisonResult {
    /// Ties go to the circular approximation.
    pub fn best_match(&self) -> BestMatch {
        if self.differences.analytical_vs_numerical < self.differences.analytical_vs_circular {
            BestMatch::Numerical
        } else {
            BestMatch::Circular
        }
    }
}

impl DoubleConicalSpiral {
    /// Analytical length via adaptive quadrature.
    pub fn calculate_perimeter_analytical(&self) -> PerimeterResult {
        AnalyticalMethod::default().compute(self)
    }

    /// Polyline length through `num_points` evenly spaced samples.
    pub fn calculate_perimeter_numerical(&self, num_points: usize) -> PerimeterResult {
        NumericalMethod::new(num_points).compute(self)
    }

    /// Flat-circle approximation, one circle per whole turn.
    pub fn calculate_perimeter_xy_plane_circles(&self) -> CircularResult {
        CircularMethod.evaluate(self)
    }

    /// Run all three methods and report their pairwise differences.
    ///
    /// `num_slices_circular` is recorded in the result but does not change the
    /// circular slice count, which always follows the spiral's turn count.
    #[instrument(skip(self))]
    pub fn compare_all_methods(
        &self,
        num_points_numerical: usize,
        num_slices_circular: usize,
    ) -> ComparisonResult {
        let analytical = self.calculate_perimeter_analytical();
        let numerical = self.calculate_perimeter_numerical(num_points_numerical);
        let circular = self.calculate_perimeter_xy_plane_circles();

        let differences = MethodDifferences {
            analytical_vs_numerical: (analytical.total - numerical.total).abs(),
            analytical_vs_circular: (analytical.total - circular.lengths.total).abs(),
            numerical_vs_circular: (numerical.total - circular.lengths.total).abs(),
        };
        debug!(
            analytical = analytical.total,
            numerical = numerical.total,
            circular = circular.lengths.total,
            turns = circular.turns,
            "compared perimeter methods"
        );

        ComparisonResult {
            analytical,
            numerical,
            circular_approximation: circular,
            differences,
            parameters: ComparisonParameters {
                numerical_points: num_points_numerical,
                circular_slices: num_slices_circular,
            },
        }
    }
}
