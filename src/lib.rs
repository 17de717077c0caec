//! Parametric airfoil sections and a synthetic flow field for visualizing them.
//!
//! The crate generates NACA 4-digit outlines (or reads tabulated ones), pitches them to an angle
//! of attack, places a center of gravity marker on the section, and samples a closed-form
//! velocity and pressure field over a grid for a renderer to draw. The field is a hand-tuned
//! visual approximation and not the result of a flow solver.

pub mod airfoil;
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod flow;
pub mod geometry;
pub mod scene;
pub mod serialize;
pub mod wind;

pub use errors::{AirfoilError, Result};
