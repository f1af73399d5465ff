pub mod geometry;
pub mod spiral;
pub mod perimeter;
pub mod rings;
pub mod net;
pub mod error;

// Re-export the main entry points at crate root for convenience.
pub use error::SpiralError;
pub use net::{NetLayout, NetStats};
pub use perimeter::{
    AnalyticalMethod, BestMatch, CircularMethod, CircularResult, ComparisonResult, NumericalMethod,
    PerimeterMethod, PerimeterResult,
};
pub use rings::Ring;
pub use spiral::{DoubleConicalSpiral, Helix, SpiralConfig};

/// Evenly spaced samples over `[start, stop]`, endpoint included.
///
/// A single sample sits at `start`; zero samples yields an empty vector.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            (0..num)
                .map(|i| if i == num - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_endpoints() {
        let v = linspace(0.0, 20.0, 5);
        assert_eq!(v, vec![0.0, 5.0, 10.0, 15.0, 20.0]);
    }

    #[test]
    fn test_linspace_single_sample() {
        assert_eq!(linspace(-1.5, 1.5, 1), vec![-1.5]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }
}
