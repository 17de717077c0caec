use crate::algorithms::linspace;
use crate::errors::{AirfoilError, Result};
use serde::{Deserialize, Serialize};

/// A regular lattice of sample points over a rectangular domain. Field arrays sampled on the grid
/// have shape `(y_samples, x_samples)`, with row `r` at `y = ys()[r]` and column `c` at
/// `x = xs()[c]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridBounds")]
pub struct FieldGrid {
    x_min: f64,
    x_max: f64,
    x_samples: usize,
    y_min: f64,
    y_max: f64,
    y_samples: usize,
}

/// Unvalidated grid description as it appears in configuration files
#[derive(Deserialize)]
struct GridBounds {
    x_min: f64,
    x_max: f64,
    x_samples: usize,
    y_min: f64,
    y_max: f64,
    y_samples: usize,
}

impl TryFrom<GridBounds> for FieldGrid {
    type Error = AirfoilError;

    fn try_from(b: GridBounds) -> Result<Self> {
        FieldGrid::new(b.x_min, b.x_max, b.x_samples, b.y_min, b.y_max, b.y_samples)
    }
}

impl Default for FieldGrid {
    fn default() -> Self {
        FieldGrid {
            x_min: -0.2,
            x_max: 1.2,
            x_samples: 150,
            y_min: -0.5,
            y_max: 0.5,
            y_samples: 100,
        }
    }
}

impl FieldGrid {
    pub fn new(
        x_min: f64,
        x_max: f64,
        x_samples: usize,
        y_min: f64,
        y_max: f64,
        y_samples: usize,
    ) -> Result<FieldGrid> {
        check_axis("x", x_min, x_max, x_samples)?;
        check_axis("y", y_min, y_max, y_samples)?;

        Ok(FieldGrid {
            x_min,
            x_max,
            x_samples,
            y_min,
            y_max,
            y_samples,
        })
    }

    pub fn xs(&self) -> Vec<f64> {
        linspace(self.x_min, self.x_max, self.x_samples)
    }

    pub fn ys(&self) -> Vec<f64> {
        linspace(self.y_min, self.y_max, self.y_samples)
    }

    /// (rows, columns) of every field sampled on this grid
    pub fn shape(&self) -> (usize, usize) {
        (self.y_samples, self.x_samples)
    }
}

fn check_axis(axis: &'static str, lo: f64, hi: f64, samples: usize) -> Result<()> {
    if samples < 2 {
        return Err(AirfoilError::invalid(
            axis,
            format!("{} samples given, at least 2 are needed", samples),
        ));
    }
    if !(lo.is_finite() && hi.is_finite()) {
        return Err(AirfoilError::invalid(axis, "bounds must be finite"));
    }
    if lo > hi {
        return Err(AirfoilError::invalid(
            axis,
            format!("lower bound {} exceeds upper bound {}", lo, hi),
        ));
    }
    Ok(())
}
