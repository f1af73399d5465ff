use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use spiral_core::SpiralConfig;

/// Parameters of one named configuration.
///
/// Any spiral field left out of the file takes its constructor default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpiralParams {
    #[serde(flatten)]
    pub spiral: SpiralConfig,
    /// Structural lines per unit height; the structural length is
    /// `height * struct_lines`.
    #[serde(default)]
    pub struct_lines: f64,
}

impl SpiralParams {
    pub fn structural_length(&self) -> f64 {
        self.spiral.height * self.struct_lines
    }
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            spiral: SpiralConfig::default(),
            struct_lines: 0.0,
        }
    }
}

/// A named parameter set as listed in a parameter file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub name: String,
    #[serde(default)]
    pub params: SpiralParams,
}

impl ParameterSet {
    pub fn new(name: impl Into<String>, params: SpiralParams) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Name with any leading `"N."` ordinal stripped, for table rows.
    pub fn short_name(&self) -> &str {
        match self.name.split_once('.') {
            Some((prefix, rest)) if is_ordinal(prefix) => rest.trim(),
            _ => self.name.trim(),
        }
    }
}

fn is_ordinal(prefix: &str) -> bool {
    let prefix = prefix.trim();
    !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_digit())
}

/// Built-in configurations used when no parameter file is available.
pub fn default_parameter_sets() -> Vec<ParameterSet> {
    let aligned = SpiralParams {
        spiral: SpiralConfig {
            outer_radius: 15.0,
            inner_radius: 5.0,
            height: 20.0,
            num_turns: 4.0,
            phase_offset: 0.0,
            target_spacing: 1.0,
            arc_span_deg: 180.0,
            arc_density: 50,
        },
        struct_lines: 1.0,
    };
    let opposite = SpiralParams {
        spiral: SpiralConfig {
            phase_offset: PI,
            ..aligned.spiral.clone()
        },
        ..aligned.clone()
    };
    vec![
        ParameterSet::new("1. Aligned Spirals (0° phase offset)", aligned),
        ParameterSet::new("2. Opposite Spirals (180° phase offset)", opposite),
    ]
}
