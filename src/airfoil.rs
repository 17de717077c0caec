use crate::geometry::PointSequence;
use crate::serialize::points_as_pairs;
use ncollide2d::na::Point2;
use serde::Serialize;

pub mod catalog;
pub mod generate;
pub mod load;
pub mod reference;

pub struct CamberStation {
    pub camber: Point2<f64>,
    pub upper: Point2<f64>,
    pub lower: Point2<f64>,
}

impl CamberStation {
    pub fn new(camber: Point2<f64>, upper: Point2<f64>, lower: Point2<f64>) -> CamberStation {
        CamberStation {
            camber,
            upper,
            lower,
        }
    }
}

/// A generated airfoil section, with its mean camber line and upper and lower surfaces all
/// sampled at the same chordwise stations from the leading edge to the trailing edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airfoil {
    #[serde(serialize_with = "points_as_pairs")]
    pub camber: Vec<Point2<f64>>,

    #[serde(serialize_with = "points_as_pairs")]
    pub upper: Vec<Point2<f64>>,

    #[serde(serialize_with = "points_as_pairs")]
    pub lower: Vec<Point2<f64>>,
}

impl Airfoil {
    pub fn from_stations(stations: &[CamberStation]) -> Airfoil {
        Airfoil {
            camber: stations.iter().map(|s| s.camber).collect(),
            upper: stations.iter().map(|s| s.upper).collect(),
            lower: stations.iter().map(|s| s.lower).collect(),
        }
    }

    /// The closed outline: the upper surface from leading to trailing edge followed by the lower
    /// surface from trailing to leading edge.
    pub fn to_outer_contour(&self) -> PointSequence {
        let mut result = self.upper.to_vec();
        let mut lower = self.lower.to_vec();
        lower.reverse();
        result.append(&mut lower);
        PointSequence::new(result)
    }

    /// The largest camber line height and the chordwise position where it occurs
    pub fn max_camber(&self) -> Option<Point2<f64>> {
        self.camber
            .iter()
            .copied()
            .max_by(|a, b| a.y.total_cmp(&b.y))
    }
}
