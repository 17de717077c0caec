pub mod point_sequence;
pub mod transform;

pub use point_sequence::PointSequence;
