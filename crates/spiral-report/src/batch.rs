//! Per-configuration analysis with failures isolated to their configuration.

use serde::Serialize;
use tracing::{info, instrument, warn};

use spiral_config::{ParameterSet, SpiralParams};
use spiral_core::{ComparisonResult, DoubleConicalSpiral, NetStats, Ring, SpiralError};

/// Samples used by the numerical method in batch runs.
pub const NUMERICAL_POINTS: usize = 1000;

/// Slice request recorded with each comparison.
pub const CIRCULAR_SLICES: usize = 100;

/// Everything computed for one configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigAnalysis {
    pub params: SpiralParams,
    /// `n*h/(2π)`, the turn count actually covered.
    pub effective_turns: f64,
    pub comparison: ComparisonResult,
    pub rings: Vec<Ring>,
    pub net: NetStats,
}

impl ConfigAnalysis {
    pub fn structural_length(&self) -> f64 {
        self.params.structural_length()
    }

    /// Analytical helix length plus structural lines.
    pub fn total_material(&self) -> f64 {
        self.comparison.analytical.total + self.structural_length()
    }
}

/// Outcome of one configuration in a batch.
#[derive(Debug, Clone)]
pub struct ConfigOutcome {
    pub name: String,
    pub short_name: String,
    pub result: Result<ConfigAnalysis, SpiralError>,
}

/// Analyze a single parameter set.
#[instrument(skip(set), fields(name = %set.name))]
pub fn analyze_configuration(set: &ParameterSet) -> Result<ConfigAnalysis, SpiralError> {
    let spiral = DoubleConicalSpiral::new(set.params.spiral.clone())?;
    let comparison = spiral.compare_all_methods(NUMERICAL_POINTS, CIRCULAR_SLICES);
    let rings = spiral.get_xy_circles_for_visualization(None)?;
    let net = spiral.net_layout().net_stats(&rings)?;
    info!(
        analytical = comparison.analytical.total,
        net = net.total_length,
        rings = rings.len(),
        "analyzed configuration"
    );
    Ok(ConfigAnalysis {
        params: set.params.clone(),
        effective_turns: spiral.effective_turns(),
        comparison,
        rings,
        net,
    })
}

/// Analyze every parameter set in order; one failure never stops the rest.
pub fn analyze_all(sets: &[ParameterSet]) -> Vec<ConfigOutcome> {
    sets.iter()
        .map(|set| {
            let result = analyze_configuration(set);
            if let Err(err) = &result {
                warn!(name = %set.name, error = %err, "configuration rejected");
            }
            ConfigOutcome {
                name: set.name.clone(),
                short_name: set.short_name().to_string(),
                result,
            }
        })
        .collect()
}
