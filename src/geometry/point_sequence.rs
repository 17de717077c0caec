use crate::serialize::points_as_pairs;
use itertools::{Itertools, MinMaxResult};
use ncollide2d::na::Point2;
use serde::{Serialize, Serializer};

/// An ordered sequence of 2D points describing an airfoil outline. Generated outlines run along
/// the upper surface from the leading to the trailing edge and then back along the lower surface,
/// so that drawing the points as a single polyline shows the whole section.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSequence {
    points: Vec<Point2<f64>>,
}

impl Serialize for PointSequence {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        points_as_pairs(&self.points, s)
    }
}

impl PointSequence {
    pub fn new(points: Vec<Point2<f64>>) -> PointSequence {
        PointSequence { points }
    }

    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point2<f64>> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<Point2<f64>> {
        self.points
    }

    /// Returns the smallest and largest x coordinate, or None for an empty sequence
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        bounds(self.points.iter().map(|p| p.x))
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    match values.minmax_by(|a, b| a.total_cmp(b)) {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
    }
}

impl FromIterator<Point2<f64>> for PointSequence {
    fn from_iter<I: IntoIterator<Item = Point2<f64>>>(iter: I) -> Self {
        PointSequence::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PointSequence {
    type Item = &'a Point2<f64>;
    type IntoIter = std::slice::Iter<'a, Point2<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
