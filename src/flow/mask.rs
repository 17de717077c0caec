use crate::errors::{AirfoilError, Result};
use crate::flow::grid::FieldGrid;
use crate::geometry::PointSequence;
use ncollide2d::bounding_volume::AABB;
use ncollide2d::na::{DMatrix, Point2, Vector2};
use ncollide2d::partitioning::{VisitStatus, Visitor, BVH, BVT};
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_TOLERANCE: f64 = 0.02;

/// How the occupancy test between grid points and airfoil points is carried out. Both strategies
/// produce the same mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskStrategy {
    /// Tests every grid point against every airfoil point. Fine for grids of some tens of
    /// thousands of points and outlines of a few hundred.
    #[default]
    Naive,

    /// Queries a bounding volume tree of the tolerance boxes around each airfoil point
    Indexed,
}

/// Marks every grid point that has an airfoil point within `tolerance` in both x and y. The mask
/// has the grid's shape, rows along y. The tolerance must be finite and positive.
pub fn occupancy_mask(
    grid: &FieldGrid,
    airfoil: &PointSequence,
    tolerance: f64,
    strategy: MaskStrategy,
) -> Result<DMatrix<bool>> {
    check_tolerance(tolerance)?;

    let xs = grid.xs();
    let ys = grid.ys();
    let (rows, cols) = grid.shape();

    let mask = if airfoil.is_empty() {
        DMatrix::from_element(rows, cols, false)
    } else {
        match strategy {
            MaskStrategy::Naive => DMatrix::from_fn(rows, cols, |r, c| {
                let p = Point2::new(xs[c], ys[r]);
                airfoil.iter().any(|a| within_box(a, &p, tolerance))
            }),
            MaskStrategy::Indexed => {
                let tree = tolerance_tree(airfoil, tolerance);
                DMatrix::from_fn(rows, cols, |r, c| {
                    let p = Point2::new(xs[c], ys[r]);
                    let mut visitor = OccupancyVisitor::new(&p, airfoil.points(), tolerance);
                    tree.visit(&mut visitor);
                    visitor.found
                })
            }
        }
    };

    debug!(
        occupied = mask.iter().filter(|m| **m).count(),
        grid_points = rows * cols,
        airfoil_points = airfoil.len(),
        ?strategy,
        "computed occupancy mask"
    );

    Ok(mask)
}

pub(crate) fn check_tolerance(tolerance: f64) -> Result<()> {
    if tolerance.is_finite() && tolerance > 0.0 {
        Ok(())
    } else {
        Err(AirfoilError::invalid(
            "mask_tolerance",
            format!("{} is not a finite positive value", tolerance),
        ))
    }
}

fn within_box(a: &Point2<f64>, p: &Point2<f64>, tolerance: f64) -> bool {
    (p.x - a.x).abs() < tolerance && (p.y - a.y).abs() < tolerance
}

/// Builds a balanced tree of the boxes around each airfoil point. The boxes are slightly loosened
/// so that pruning never rejects a point that `within_box` would accept; the exact test is only
/// made at the leaves.
fn tolerance_tree(airfoil: &PointSequence, tolerance: f64) -> BVT<usize, AABB<f64>> {
    let half = tolerance * (1.0 + 1e-9) + f64::EPSILON;
    let extent = Vector2::new(half, half);
    let leaves: Vec<(usize, AABB<f64>)> = airfoil
        .iter()
        .enumerate()
        .map(|(i, p)| (i, AABB::new(p - extent, p + extent)))
        .collect();

    BVT::new_balanced(leaves)
}

struct OccupancyVisitor<'a> {
    point: &'a Point2<f64>,
    airfoil: &'a [Point2<f64>],
    tolerance: f64,
    found: bool,
}

impl<'a> OccupancyVisitor<'a> {
    fn new(point: &'a Point2<f64>, airfoil: &'a [Point2<f64>], tolerance: f64) -> Self {
        OccupancyVisitor {
            point,
            airfoil,
            tolerance,
            found: false,
        }
    }
}

impl<'a> Visitor<usize, AABB<f64>> for OccupancyVisitor<'a> {
    fn visit(&mut self, bv: &AABB<f64>, data: Option<&usize>) -> VisitStatus {
        let p = self.point;
        let inside = p.x >= bv.mins.x && p.x <= bv.maxs.x && p.y >= bv.mins.y && p.y <= bv.maxs.y;
        if !inside {
            return VisitStatus::Stop;
        }

        if let Some(i) = data {
            if within_box(&self.airfoil[*i], p, self.tolerance) {
                self.found = true;
                return VisitStatus::ExitEarly;
            }
        }

        VisitStatus::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use test_case::test_case;

    fn single_point() -> PointSequence {
        PointSequence::new(vec![Point2::new(0.5, 0.0)])
    }

    fn index_of(values: &[f64], v: f64) -> usize {
        values
            .iter()
            .enumerate()
            .min_by(|a, b| (a.1 - v).abs().total_cmp(&(b.1 - v).abs()))
            .unwrap()
            .0
    }

    #[test_case(MaskStrategy::Naive)]
    #[test_case(MaskStrategy::Indexed)]
    fn test_single_point_box(strategy: MaskStrategy) {
        let grid = FieldGrid::default();
        let mask = occupancy_mask(&grid, &single_point(), DEFAULT_TOLERANCE, strategy).unwrap();
        let xs = grid.xs();
        let ys = grid.ys();

        for r in 0..ys.len() {
            for c in 0..xs.len() {
                let expected = (xs[c] - 0.5).abs() < 0.02 && ys[r].abs() < 0.02;
                assert_eq!(expected, mask[(r, c)], "row {} col {}", r, c);
            }
        }

        assert!(mask.iter().any(|m| *m));
        assert!(!mask[(index_of(&ys, 0.4), index_of(&xs, 0.9))]);
    }

    #[test_case(MaskStrategy::Naive)]
    #[test_case(MaskStrategy::Indexed)]
    fn test_empty_airfoil_masks_nothing(strategy: MaskStrategy) {
        let grid = FieldGrid::default();
        let mask = occupancy_mask(&grid, &PointSequence::new(Vec::new()), 0.02, strategy).unwrap();
        assert_eq!((100, 150), mask.shape());
        assert!(mask.iter().all(|m| !*m));
    }

    #[test]
    fn test_strategies_agree() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let grid = FieldGrid::new(
                rng.gen_range(-1.0..0.0),
                rng.gen_range(0.5..2.0),
                rng.gen_range(2..60),
                rng.gen_range(-1.0..0.0),
                rng.gen_range(0.0..1.0),
                rng.gen_range(2..60),
            )
            .unwrap();
            let count: usize = rng.gen_range(1..300);
            let airfoil: PointSequence = (0..count)
                .map(|_| Point2::new(rng.gen_range(-0.5..1.5), rng.gen_range(-0.5..0.5)))
                .collect();
            let tolerance = rng.gen_range(0.001..0.1);

            let mask = |strategy| occupancy_mask(&grid, &airfoil, tolerance, strategy).unwrap();
            let naive = mask(MaskStrategy::Naive);
            let indexed = mask(MaskStrategy::Indexed);
            assert_eq!(naive, indexed);
        }
    }

    #[test]
    fn test_grid_points_on_airfoil_points() {
        // Grid spacing of 0.1 with airfoil points placed exactly on lattice points
        let grid = FieldGrid::new(0.0, 1.0, 11, 0.0, 1.0, 11).unwrap();
        let xs = grid.xs();
        let ys = grid.ys();
        let airfoil =
            PointSequence::new(vec![Point2::new(xs[3], ys[4]), Point2::new(xs[7], ys[2])]);

        for strategy in [MaskStrategy::Naive, MaskStrategy::Indexed] {
            let mask = occupancy_mask(&grid, &airfoil, 0.02, strategy).unwrap();
            assert_eq!(2, mask.iter().filter(|m| **m).count());
            assert!(mask[(4, 3)]);
            assert!(mask[(2, 7)]);
        }
    }

    #[test_case(f64::NAN, MaskStrategy::Naive)]
    #[test_case(f64::INFINITY, MaskStrategy::Indexed)]
    #[test_case(0.0, MaskStrategy::Naive)]
    #[test_case(-0.02, MaskStrategy::Indexed)]
    fn test_invalid_tolerance(tolerance: f64, strategy: MaskStrategy) {
        let result = occupancy_mask(&FieldGrid::default(), &single_point(), tolerance, strategy);
        assert!(matches!(
            result,
            Err(AirfoilError::InvalidParameter {
                name: "mask_tolerance",
                ..
            })
        ));
    }
}
