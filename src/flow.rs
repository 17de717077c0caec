use crate::errors::Result;
use crate::geometry::PointSequence;
use crate::serialize::{matrix_as_rows, optional_matrix_as_rows};
use ncollide2d::na::{DMatrix, Vector2};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod grid;
pub mod mask;
pub mod models;

pub use grid::FieldGrid;
use mask::{check_tolerance, occupancy_mask, MaskStrategy, DEFAULT_TOLERANCE};
use models::FieldModel;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub model: FieldModel,
    pub mask_tolerance: f64,
    pub mask_strategy: MaskStrategy,
}

impl Default for FlowConfig {
    fn default() -> Self {
        FlowConfig {
            model: FieldModel::default(),
            mask_tolerance: DEFAULT_TOLERANCE,
            mask_strategy: MaskStrategy::default(),
        }
    }
}

impl FlowConfig {
    pub fn validate(&self) -> Result<()> {
        check_tolerance(self.mask_tolerance)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PressureField {
    Single(#[serde(serialize_with = "matrix_as_rows")] DMatrix<f64>),
    DualLobe {
        #[serde(serialize_with = "matrix_as_rows")]
        high: DMatrix<f64>,
        #[serde(serialize_with = "matrix_as_rows")]
        low: DMatrix<f64>,
    },
}

impl PressureField {
    /// A single scalar field: the bump itself, or the high lobe minus the low lobe
    pub fn scalar(&self) -> DMatrix<f64> {
        match self {
            PressureField::Single(p) => p.clone(),
            PressureField::DualLobe { high, low } => high - low,
        }
    }
}

/// Velocity and pressure sampled on a grid. When an airfoil was supplied, `mask` marks the grid
/// points it occupies; the velocity arrays still hold the model values there, so consumers must
/// skip masked points rather than read them as zero flow. `velocity_at` does this.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowField {
    pub grid: FieldGrid,

    #[serde(serialize_with = "matrix_as_rows")]
    pub vx: DMatrix<f64>,

    #[serde(serialize_with = "matrix_as_rows")]
    pub vy: DMatrix<f64>,

    pub pressure: PressureField,

    #[serde(serialize_with = "optional_matrix_as_rows")]
    pub mask: Option<DMatrix<bool>>,
}

impl FlowField {
    pub fn shape(&self) -> (usize, usize) {
        self.vx.shape()
    }

    pub fn is_masked(&self, row: usize, col: usize) -> bool {
        self.mask.as_ref().map_or(false, |m| m[(row, col)])
    }

    /// The velocity at a grid point, or None where the airfoil occupies the point
    pub fn velocity_at(&self, row: usize, col: usize) -> Option<Vector2<f64>> {
        if self.is_masked(row, col) {
            None
        } else {
            Some(Vector2::new(self.vx[(row, col)], self.vy[(row, col)]))
        }
    }
}

/// Samples the configured model over the grid with freestream speed `freestream`, masking the
/// grid points occupied by `airfoil` when one is given.
pub fn synthesize(
    grid: &FieldGrid,
    freestream: f64,
    airfoil: Option<&PointSequence>,
    config: &FlowConfig,
) -> Result<FlowField> {
    config.validate()?;

    let xs = grid.xs();
    let ys = grid.ys();
    let (rows, cols) = grid.shape();

    let samples: Vec<_> = ys
        .iter()
        .flat_map(|y| xs.iter().map(move |x| (*x, *y)))
        .map(|(x, y)| config.model.sample(x, y, freestream))
        .collect();

    let vx = DMatrix::from_fn(rows, cols, |r, c| samples[r * cols + c].vx);
    let vy = DMatrix::from_fn(rows, cols, |r, c| samples[r * cols + c].vy);
    let pressure = config.model.pressure_field(&xs, &ys);

    let mask = airfoil
        .map(|a| occupancy_mask(grid, a, config.mask_tolerance, config.mask_strategy))
        .transpose()?;

    debug!(rows, cols, freestream, masked = mask.is_some(), "synthesized flow field");

    Ok(FlowField {
        grid: *grid,
        vx,
        vy,
        pressure,
        mask,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::models::DualLobeModel;
    use approx::assert_relative_eq;
    use ncollide2d::na::Point2;

    fn bump_field(airfoil: Option<&PointSequence>) -> FlowField {
        synthesize(&FieldGrid::default(), 30.0, airfoil, &FlowConfig::default()).unwrap()
    }

    #[test]
    fn test_uniform_streamwise_velocity() {
        let field = bump_field(None);
        assert_eq!((100, 150), field.shape());
        assert_eq!((100, 150), field.vy.shape());
        assert!(field.vx.iter().all(|v| *v == 30.0));
        assert!(field.mask.is_none());
    }

    #[test]
    fn test_bump_peak_on_grid() {
        let grid = FieldGrid::new(0.0, 1.0, 11, -0.5, 0.5, 11).unwrap();
        let field = synthesize(&grid, 10.0, None, &FlowConfig::default()).unwrap();
        let pressure = field.pressure.scalar();

        assert_eq!(1.0, pressure[(5, 5)]);
        assert_relative_eq!(-5.0, field.vy[(5, 5)], epsilon = 1e-12);
        assert!(pressure[(0, 0)] < 1e-3);
        assert!(pressure.iter().all(|p| *p <= 1.0 && *p > 0.0));
    }

    #[test]
    fn test_masked_points_have_no_velocity() {
        let airfoil = PointSequence::new(vec![Point2::new(0.5, 0.0)]);
        let field = bump_field(Some(&airfoil));
        let mask = field.mask.as_ref().unwrap();
        let (rows, cols) = field.shape();

        let mut masked = 0;
        for r in 0..rows {
            for c in 0..cols {
                match field.velocity_at(r, c) {
                    None => {
                        assert!(mask[(r, c)]);
                        masked += 1;
                    }
                    Some(v) => assert_eq!(30.0, v.x),
                }
            }
        }
        assert!(masked > 0);

        // The model values are kept underneath the mask
        assert!(field.vx.iter().all(|v| *v == 30.0));
    }

    #[test]
    fn test_dual_lobe_field() {
        let grid = FieldGrid::new(0.0, 1.0, 11, -0.05, 0.05, 3).unwrap();
        let config = FlowConfig {
            model: FieldModel::DualLobe(DualLobeModel::default()),
            ..FlowConfig::default()
        };
        let field = synthesize(&grid, 20.0, None, &config).unwrap();

        assert!(field.vy.iter().all(|v| *v == 0.0));
        assert!(field.vx.iter().all(|v| *v == 20.0));
        match &field.pressure {
            PressureField::DualLobe { high, low } => {
                assert_eq!(1.0, high[(2, 5)]);
                assert_eq!(1.0, low[(0, 5)]);
                assert_relative_eq!(high[(1, 3)], low[(1, 3)], epsilon = 1e-15);
            }
            PressureField::Single(_) => panic!("expected two lobes"),
        }

        let scalar = field.pressure.scalar();
        assert!(scalar[(2, 5)] > 0.0);
        assert!(scalar[(0, 5)] < 0.0);
    }

    #[test]
    fn test_collapsed_grid_is_valid() {
        let grid = FieldGrid::new(0.5, 0.5, 2, 0.0, 0.0, 2).unwrap();
        let field = synthesize(&grid, 1.0, None, &FlowConfig::default()).unwrap();
        assert!(field.pressure.scalar().iter().all(|p| *p == 1.0));
    }

    #[test]
    fn test_serialized_layout() {
        let grid = FieldGrid::new(0.0, 1.0, 3, 0.0, 1.0, 2).unwrap();
        let airfoil = PointSequence::new(vec![Point2::new(0.0, 0.0)]);
        let field = synthesize(&grid, 1.0, Some(&airfoil), &FlowConfig::default()).unwrap();
        let value = serde_json::to_value(&field).unwrap();

        assert_eq!(2, value["vx"].as_array().unwrap().len());
        assert_eq!(3, value["vx"][0].as_array().unwrap().len());
        assert_eq!(true, value["mask"][0][0]);
        assert_eq!(false, value["mask"][1][2]);
        assert!(value["pressure"]["single"].is_array());
    }

    #[test]
    fn test_nan_tolerance_is_rejected() {
        let config = FlowConfig {
            mask_tolerance: f64::NAN,
            ..FlowConfig::default()
        };
        let airfoil = PointSequence::new(vec![Point2::new(0.5, 0.0)]);
        let result = synthesize(&FieldGrid::default(), 30.0, Some(&airfoil), &config);
        assert!(matches!(
            result,
            Err(crate::AirfoilError::InvalidParameter {
                name: "mask_tolerance",
                ..
            })
        ));
        assert!(synthesize(&FieldGrid::default(), 30.0, None, &config).is_err());
    }
}
