use crate::geometry::PointSequence;
use ncollide2d::na::{Point2, Rotation2};
use rayon::prelude::*;

/// The pitch attitude of an airfoil section: an angle of attack in degrees and the x position of
/// the pitch point on the chord line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attitude {
    pub angle_of_attack_degrees: f64,
    pub reference_x: f64,
}

impl Attitude {
    pub fn new(angle_of_attack_degrees: f64, reference_x: f64) -> Attitude {
        Attitude {
            angle_of_attack_degrees,
            reference_x,
        }
    }

    /// An attitude pitching about the quarter chord of a section with the given chord length
    pub fn quarter_chord(angle_of_attack_degrees: f64, chord: f64) -> Attitude {
        Attitude::new(angle_of_attack_degrees, 0.25 * chord)
    }

    pub fn apply(&self, points: &PointSequence) -> PointSequence {
        rotate(points, self.angle_of_attack_degrees, self.reference_x)
    }
}

/// Rotates every point about `(reference_x, 0)` by `angle_deg`. A positive angle rotates counter
/// clockwise. An angle of exactly zero returns an unmodified copy.
pub fn rotate(points: &PointSequence, angle_deg: f64, reference_x: f64) -> PointSequence {
    if angle_deg == 0.0 {
        return points.clone();
    }

    let pivot = Point2::new(reference_x, 0.0);
    let rotation = Rotation2::new(angle_deg.to_radians());
    points.iter().map(|p| pivot + rotation * (p - pivot)).collect()
}

/// Precomputes the rotated outline for each angle, in the order the angles were given
pub fn sweep(points: &PointSequence, angles_deg: &[f64], reference_x: f64) -> Vec<PointSequence> {
    angles_deg
        .par_iter()
        .map(|a| rotate(points, *a, reference_x))
        .collect()
}
