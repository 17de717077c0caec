//! Closed-form perturbation models for the synthetic flow field. These are visual approximations
//! shaped like the flow around a section, not solutions of any flow equations. Their centers are
//! fixed configuration values and do not follow the airfoil geometry.

use crate::flow::PressureField;
use ncollide2d::na::DMatrix;
use serde::Deserialize;

/// The velocity of a model at a single point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub vx: f64,
    pub vy: f64,
}

/// A single gaussian low pressure bump with a matching downward velocity component
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct BumpModel {
    pub center_x: f64,
    pub center_y: f64,
    pub spread: f64,
    /// Peak downward velocity as a fraction of the freestream speed
    pub downwash: f64,
}

impl Default for BumpModel {
    fn default() -> Self {
        BumpModel {
            center_x: 0.5,
            center_y: 0.0,
            spread: 20.0,
            downwash: 0.5,
        }
    }
}

impl BumpModel {
    pub fn pressure(&self, x: f64, y: f64) -> f64 {
        gaussian(self.spread, x - self.center_x, y - self.center_y)
    }

    pub fn sample(&self, x: f64, y: f64, freestream: f64) -> Sample {
        Sample {
            vx: freestream,
            vy: -self.downwash * freestream * self.pressure(x, y),
        }
    }
}

/// Two gaussian pressure lobes, one above and one below a fixed chordwise station, over a uniform
/// freestream
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DualLobeModel {
    pub center_x: f64,
    /// Vertical distance of each lobe center from `y = 0`
    pub offset: f64,
    pub spread: f64,
}

impl Default for DualLobeModel {
    fn default() -> Self {
        DualLobeModel {
            center_x: 0.5,
            offset: 0.05,
            spread: 50.0,
        }
    }
}

impl DualLobeModel {
    /// The lobe centered above the chord line
    pub fn high(&self, x: f64, y: f64) -> f64 {
        gaussian(self.spread, x - self.center_x, y - self.offset)
    }

    /// The lobe centered below the chord line
    pub fn low(&self, x: f64, y: f64) -> f64 {
        gaussian(self.spread, x - self.center_x, y + self.offset)
    }

    pub fn sample(&self, x: f64, y: f64, freestream: f64) -> Sample {
        Sample {
            vx: freestream,
            vy: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum FieldModel {
    Bump(BumpModel),
    DualLobe(DualLobeModel),
}

impl Default for FieldModel {
    fn default() -> Self {
        FieldModel::Bump(BumpModel::default())
    }
}

impl FieldModel {
    pub fn sample(&self, x: f64, y: f64, freestream: f64) -> Sample {
        match self {
            FieldModel::Bump(m) => m.sample(x, y, freestream),
            FieldModel::DualLobe(m) => m.sample(x, y, freestream),
        }
    }

    /// Evaluates the model's pressure over the lattice `xs` by `ys`, rows along y
    pub fn pressure_field(&self, xs: &[f64], ys: &[f64]) -> PressureField {
        let lattice = |f: &dyn Fn(f64, f64) -> f64| {
            DMatrix::from_fn(ys.len(), xs.len(), |r, c| f(xs[c], ys[r]))
        };

        match self {
            FieldModel::Bump(m) => PressureField::Single(lattice(&|x, y| m.pressure(x, y))),
            FieldModel::DualLobe(m) => PressureField::DualLobe {
                high: lattice(&|x, y| m.high(x, y)),
                low: lattice(&|x, y| m.low(x, y)),
            },
        }
    }
}

fn gaussian(spread: f64, dx: f64, dy: f64) -> f64 {
    (-spread * (dx * dx + dy * dy)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test]
    fn test_bump_peak() {
        let bump = BumpModel::default();
        assert_eq!(1.0, bump.pressure(0.5, 0.0));

        let s = bump.sample(0.5, 0.0, 30.0);
        assert_eq!(30.0, s.vx);
        assert_relative_eq!(-15.0, s.vy, epsilon = 1e-12);
    }

    #[test_case(0.1)]
    #[test_case(0.5)]
    #[test_case(1.0)]
    #[test_case(3.0)]
    fn test_bump_decays(distance: f64) {
        let bump = BumpModel::default();
        let near = bump.pressure(0.5 + distance * 0.1, 0.0);
        let far = bump.pressure(0.5 + distance, distance);
        assert!(far < near);
        assert_relative_eq!((-40.0 * distance * distance).exp(), far, max_relative = 1e-12);
    }

    #[test]
    fn test_bump_underflows_to_zero() {
        let bump = BumpModel::default();
        assert_eq!(0.0, bump.pressure(10.5, 10.0));
    }

    #[test]
    fn test_bump_vanishes_far_away() {
        let bump = BumpModel::default();
        assert!(bump.pressure(100.0, -100.0) < 1e-300);
        assert_relative_eq!(0.0, bump.sample(50.0, 50.0, 30.0).vy, epsilon = 1e-12);
    }

    #[test]
    fn test_dual_lobe_peaks() {
        let m = DualLobeModel::default();
        assert_eq!(1.0, m.high(0.5, 0.05));
        assert_eq!(1.0, m.low(0.5, -0.05));
        assert_relative_eq!(m.high(0.3, 0.2), m.low(0.3, -0.2), epsilon = 1e-15);

        let s = m.sample(0.5, 0.05, 12.0);
        assert_eq!(12.0, s.vx);
        assert_eq!(0.0, s.vy);
    }

    #[test]
    fn test_model_from_json() {
        let m: FieldModel =
            serde_json::from_str(r#"{"model": "dual_lobe", "spread": 40.0}"#).unwrap();
        assert_eq!(
            FieldModel::DualLobe(DualLobeModel {
                spread: 40.0,
                ..DualLobeModel::default()
            }),
            m
        );

        let m: FieldModel = serde_json::from_str(r#"{"model": "bump"}"#).unwrap();
        assert_eq!(FieldModel::default(), m);
    }

    #[test]
    fn test_pressure_field_matches_model() {
        let xs = [0.0, 0.5, 1.0];
        let ys = [-0.05, 0.05];

        let bump = BumpModel::default();
        match FieldModel::Bump(bump).pressure_field(&xs, &ys) {
            PressureField::Single(p) => {
                assert_eq!((2, 3), p.shape());
                assert_eq!(bump.pressure(1.0, 0.05), p[(1, 2)]);
            }
            other => panic!("bump gave {:?}", other),
        }

        let lobes = DualLobeModel::default();
        match FieldModel::DualLobe(lobes).pressure_field(&xs, &ys) {
            PressureField::DualLobe { high, low } => {
                assert_eq!(1.0, high[(1, 1)]);
                assert_eq!(1.0, low[(0, 1)]);
                assert_eq!(lobes.low(0.0, 0.05), low[(1, 0)]);
            }
            other => panic!("dual lobe gave {:?}", other),
        }
    }
}
