use crate::algorithms::interpolate;
use crate::errors::{AirfoilError, Result};
use crate::geometry::PointSequence;
use crate::serialize::point_as_pair;
use ncollide2d::na::Point2;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Fraction of the x extent by which the front and back markers are inset from the extremes
const EDGE_INSET: f64 = 0.05;

/// Qualitative center of gravity position along the chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CgPosition {
    Front,
    #[default]
    Middle,
    Back,
}

impl CgPosition {
    /// The x coordinate this position selects within `[x_min, x_max]`
    pub fn station(&self, x_min: f64, x_max: f64) -> f64 {
        match self {
            CgPosition::Front => x_min + EDGE_INSET * (x_max - x_min),
            CgPosition::Middle => 0.5 * (x_min + x_max),
            CgPosition::Back => x_max - EDGE_INSET * (x_max - x_min),
        }
    }
}

impl FromStr for CgPosition {
    type Err = AirfoilError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "front" => Ok(CgPosition::Front),
            "middle" => Ok(CgPosition::Middle),
            "back" => Ok(CgPosition::Back),
            _ => Err(AirfoilError::invalid(
                "cg_position",
                format!("'{}' is not one of front, middle, back", s),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceMarker {
    #[serde(serialize_with = "point_as_pair")]
    pub point: Point2<f64>,
    pub position: CgPosition,
}

/// Places the marker at the selected x station, with y interpolated on the upper surface of the
/// outline. Fails with `DegenerateGeometry` if the outline has no extent in x.
pub fn resolve(points: &PointSequence, position: CgPosition) -> Result<ReferenceMarker> {
    if let Some(p) = points.iter().find(|p| !(p.x.is_finite() && p.y.is_finite())) {
        return Err(AirfoilError::DegenerateGeometry(format!(
            "the outline has a non-finite point ({}, {})",
            p.x, p.y
        )));
    }

    let (x_min, x_max) = points
        .x_bounds()
        .ok_or_else(|| AirfoilError::DegenerateGeometry("the outline has no points".into()))?;

    if x_max <= x_min {
        return Err(AirfoilError::DegenerateGeometry(format!(
            "the outline has no extent in x (x = {})",
            x_min
        )));
    }

    let x = position.station(x_min, x_max);
    let (xs, ys) = upper_surface(points.points());
    let y = interpolate(&xs, &ys, x)
        .ok_or_else(|| AirfoilError::DegenerateGeometry("no upper surface points".into()))?;

    Ok(ReferenceMarker {
        point: Point2::new(x, y),
        position,
    })
}

/// Splits a closed outline at its first minimum-x and first maximum-x points into two chains and
/// returns the chain with the greater mean y, sorted by increasing x. Once an outline has been
/// rotated neither chain is guaranteed to be monotonic in x, so the sort is what makes the
/// interpolation single valued.
fn upper_surface(points: &[Point2<f64>]) -> (Vec<f64>, Vec<f64>) {
    let n = points.len();
    let mut i_min = 0;
    let mut i_max = 0;
    for (i, p) in points.iter().enumerate() {
        if p.x < points[i_min].x {
            i_min = i;
        }
        if p.x > points[i_max].x {
            i_max = i;
        }
    }

    let chain = |from: usize, to: usize| -> Vec<Point2<f64>> {
        let count = (to + n - from) % n + 1;
        (0..count).map(|k| points[(from + k) % n]).collect()
    };

    let a = chain(i_min, i_max);
    let b = chain(i_max, i_min);
    let mut upper = if mean_y(&a) >= mean_y(&b) { a } else { b };
    upper.sort_by(|p, q| p.x.total_cmp(&q.x));

    upper.iter().map(|p| (p.x, p.y)).unzip()
}

fn mean_y(points: &[Point2<f64>]) -> f64 {
    points.iter().map(|p| p.y).sum::<f64>() / points.len() as f64
}
