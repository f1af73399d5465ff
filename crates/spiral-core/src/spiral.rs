//! Parametric model of two helices wound on a cone.
//!
//! Both helices share the cone's height and angular frequency; they differ in
//! base radius and in the inner helix's phase lead. Radius tapers linearly
//! from the base radius at `z = 0` to zero at `z = height`.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::SpiralError;
use crate::geometry::point::Point3d;
use crate::net::NetLayout;
use crate::rings::Ring;

/// Most flat slices a spiral may be cut into.
pub const MAX_SLICES: usize = 100_000;

/// Selects one of the two helices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Helix {
    Outer,
    Inner,
}

impl Helix {
    pub const BOTH: [Helix; 2] = [Helix::Outer, Helix::Inner];

    pub fn name(&self) -> &'static str {
        match self {
            Helix::Outer => "outer",
            Helix::Inner => "inner",
        }
    }
}

/// Raw spiral parameters, as supplied by a caller or a parameter file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralConfig {
    /// Base radius of the outer helix.
    pub outer_radius: f64,
    /// Base radius of the inner helix.
    pub inner_radius: f64,
    /// Cone height.
    pub height: f64,
    /// Full rotations over the height.
    pub num_turns: f64,
    /// Angular lead of the inner helix (radians).
    pub phase_offset: f64,
    /// Desired spacing between adjacent net anchor points.
    pub target_spacing: f64,
    /// Angular width of each anchor's fan of struts (degrees).
    pub arc_span_deg: f64,
    /// Struts per anchor point.
    pub arc_density: usize,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            outer_radius: 15.0,
            inner_radius: 5.0,
            height: 20.0,
            num_turns: 5.0,
            phase_offset: 0.0,
            target_spacing: 0.3,
            arc_span_deg: 30.0,
            arc_density: 5,
        }
    }
}

impl SpiralConfig {
    /// Check every field; returns the first violation found, or the net
    /// layout the fields describe.
    pub fn validate(&self) -> Result<NetLayout, SpiralError> {
        let finite = [
            ("outer_radius", self.outer_radius),
            ("inner_radius", self.inner_radius),
            ("height", self.height),
            ("num_turns", self.num_turns),
            ("phase_offset", self.phase_offset),
            ("target_spacing", self.target_spacing),
            ("arc_span_deg", self.arc_span_deg),
        ];
        if let Some((field, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SpiralError::NonFinite { field: *field });
        }
        if self.height <= 0.0 {
            return Err(SpiralError::NonPositiveHeight {
                height: self.height,
            });
        }
        if self.outer_radius < 0.0 {
            return Err(SpiralError::NegativeRadius {
                field: "outer_radius",
                value: self.outer_radius,
            });
        }
        if self.inner_radius < 0.0 {
            return Err(SpiralError::NegativeRadius {
                field: "inner_radius",
                value: self.inner_radius,
            });
        }
        if self.num_turns < 0.0 {
            return Err(SpiralError::NegativeTurns {
                turns: self.num_turns,
            });
        }
        let slices = self.num_turns.round_ties_even();
        if slices > MAX_SLICES as f64 {
            return Err(SpiralError::ExcessiveSubdivision {
                quantity: "slice",
                count: slices,
                limit: MAX_SLICES,
            });
        }
        let layout = NetLayout::new(self.target_spacing, self.arc_span_deg, self.arc_density)?;
        // Rings only shrink with height, so the base ring bounds them all.
        layout.anchor_count(&Ring::new(self.outer_radius, self.inner_radius))?;
        Ok(layout)
    }
}

/// Coordinates of one helix sampled at an ordered set of heights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HelixSamples {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl HelixSamples {
    pub fn points(&self) -> impl Iterator<Item = Point3d> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((&x, &y), &z)| Point3d::new(x, y, z))
    }
}

/// A validated double conical spiral.
#[derive(Debug, Clone, Serialize)]
pub struct DoubleConicalSpiral {
    config: SpiralConfig,
    /// Angular frequency (radians per unit height).
    n: f64,
    layout: NetLayout,
}

impl DoubleConicalSpiral {
    pub fn new(config: SpiralConfig) -> Result<Self, SpiralError> {
        let layout = config.validate()?;
        if config.outer_radius <= config.inner_radius {
            warn!(
                outer = config.outer_radius,
                inner = config.inner_radius,
                "outer radius does not exceed inner radius"
            );
        }
        Ok(Self {
            n: config.num_turns * TAU / config.height,
            layout,
            config,
        })
    }

    pub fn config(&self) -> &SpiralConfig {
        &self.config
    }

    pub fn height(&self) -> f64 {
        self.config.height
    }

    pub fn phase_offset(&self) -> f64 {
        self.config.phase_offset
    }

    /// Angular frequency `num_turns * 2π / height`.
    pub fn angular_frequency(&self) -> f64 {
        self.n
    }

    pub fn net_layout(&self) -> &NetLayout {
        &self.layout
    }

    pub fn base_radius(&self, which: Helix) -> f64 {
        match which {
            Helix::Outer => self.config.outer_radius,
            Helix::Inner => self.config.inner_radius,
        }
    }

    /// Radius at height `z`: `R0 * (1 - z/h)`.
    pub fn radius(&self, z: f64, which: Helix) -> f64 {
        self.base_radius(which) * (1.0 - z / self.config.height)
    }

    /// Angular position at height `z`.
    pub fn theta(&self, z: f64, which: Helix) -> f64 {
        let base = self.n * z;
        match which {
            Helix::Outer => base,
            Helix::Inner => base + self.config.phase_offset,
        }
    }

    pub fn point(&self, z: f64, which: Helix) -> Point3d {
        Point3d::from_cylindrical(self.radius(z, which), self.theta(z, which), z)
    }

    /// Evaluate the helix at every height in `z_values`, preserving order.
    pub fn coordinates(&self, z_values: &[f64], which: Helix) -> HelixSamples {
        let mut samples = HelixSamples {
            x: Vec::with_capacity(z_values.len()),
            y: Vec::with_capacity(z_values.len()),
            z: z_values.to_vec(),
        };
        for &z in z_values {
            let p = self.point(z, which);
            samples.x.push(p.x);
            samples.y.push(p.y);
        }
        samples
    }

    /// Arc-length element `sqrt((dR/dz)^2 + (R(z) dθ/dz)^2 + 1)`.
    pub fn arc_length_integrand(&self, z: f64, which: Helix) -> f64 {
        let dr_dz = -self.base_radius(which) / self.config.height;
        let r = self.radius(z, which);
        let tangential = r * self.n;
        (dr_dz * dr_dz + tangential * tangential + 1.0).sqrt()
    }

    /// Rotations actually covered over the height, `n*h/(2π)`.
    pub fn effective_turns(&self) -> f64 {
        self.n * self.config.height / TAU
    }

    /// Whole turns used for flat-circle slicing; never less than one.
    ///
    /// Halves round to the nearest even count.
    pub fn slice_count(&self) -> usize {
        (self.effective_turns().round_ties_even() as usize).max(1)
    }

    /// Midpoint heights of `slices` equal slices of the cone, bottom first.
    pub fn slice_midpoints(&self, slices: usize) -> Vec<f64> {
        let slices = slices.max(1);
        let half = self.config.height / (2.0 * slices as f64);
        (0..slices).map(|k| (2 * k + 1) as f64 * half).collect()
    }
}
