use thiserror::Error;

/// Configuration errors raised when building a spiral or a net layout.
///
/// Every variant is fatal for the configuration it belongs to. Once a spiral
/// is built, only rings supplied from outside it can still fail the net.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpiralError {
    #[error("height must be positive (got {height})")]
    NonPositiveHeight { height: f64 },

    #[error("target spacing must be positive (got {spacing})")]
    NonPositiveSpacing { spacing: f64 },

    #[error("arc density must be at least 1")]
    ZeroArcDensity,

    #[error("{field} must not be negative (got {value})")]
    NegativeRadius { field: &'static str, value: f64 },

    #[error("number of turns must not be negative (got {turns})")]
    NegativeTurns { turns: f64 },

    #[error("{quantity} count {count} exceeds the limit of {limit}")]
    ExcessiveSubdivision {
        quantity: &'static str,
        count: f64,
        limit: usize,
    },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
}
