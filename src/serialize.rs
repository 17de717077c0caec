//! Serde adapters for the nalgebra types used in the public output structures. The renderer
//! consumes points as `[x, y]` pairs and fields as row-major nested arrays (row = y sample).

use ncollide2d::na::{DMatrix, Point2, Scalar};
use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;

pub fn point_as_pair<S: Serializer>(point: &Point2<f64>, s: S) -> Result<S::Ok, S::Error> {
    [point.x, point.y].serialize(s)
}

#[allow(clippy::ptr_arg)]
pub fn points_as_pairs<S: Serializer>(points: &Vec<Point2<f64>>, s: S) -> Result<S::Ok, S::Error> {
    let mut seq = s.serialize_seq(Some(points.len()))?;
    for p in points.iter() {
        seq.serialize_element(&[p.x, p.y])?;
    }
    seq.end()
}

pub fn matrix_as_rows<S, T>(m: &DMatrix<T>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Scalar + Serialize,
{
    let mut seq = s.serialize_seq(Some(m.nrows()))?;
    for r in 0..m.nrows() {
        let row: Vec<&T> = (0..m.ncols()).map(|c| &m[(r, c)]).collect();
        seq.serialize_element(&row)?;
    }
    seq.end()
}

pub fn optional_matrix_as_rows<S, T>(m: &Option<DMatrix<T>>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Scalar + Serialize,
{
    match m {
        Some(m) => matrix_as_rows(m, s),
        None => s.serialize_none(),
    }
}
