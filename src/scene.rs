use crate::airfoil::catalog::AirfoilSource;
use crate::airfoil::generate::{AirfoilGenerator, Naca4Digit};
use crate::airfoil::load::load;
use crate::airfoil::reference::{resolve, ReferenceMarker};
use crate::airfoil::Airfoil;
use crate::config::{AirfoilSelection, SceneConfig};
use crate::errors::Result;
use crate::flow::{synthesize, FlowField};
use crate::geometry::PointSequence;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Everything handed to a renderer for one configuration: the section outline at its attitude,
/// the center of gravity marker, and the synthetic flow field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    /// Unrotated generated surfaces, absent for tabulated sections
    pub airfoil: Option<Airfoil>,
    pub outline: PointSequence,
    pub marker: ReferenceMarker,
    pub field: FlowField,
}

impl Scene {
    /// Builds the scene described by `config`. Catalog sections stored as coordinate tables are
    /// looked up in `data_dir`.
    pub fn build(config: &SceneConfig, data_dir: &Path) -> Result<Scene> {
        config.validate()?;

        let (airfoil, contour) = match &config.airfoil {
            AirfoilSelection::Code(code) => generated(Naca4Digit::from_code(code)?, config),
            AirfoilSelection::Catalog(entry) => match entry.source()? {
                AirfoilSource::Naca4(naca) => generated(naca, config),
                AirfoilSource::Tabulated(file) => (None, load(data_dir.join(file))?),
            },
            AirfoilSelection::Table(path) => (None, load(path)?),
        };
        debug!(points = contour.len(), "resolved section outline");

        let attitude = config.attitude();
        let outline = attitude.apply(&contour);
        debug!(
            angle = attitude.angle_of_attack_degrees,
            pivot = attitude.reference_x,
            "rotated outline"
        );

        let marker = resolve(&outline, config.cg_position)?;
        debug!(x = marker.point.x, y = marker.point.y, "resolved reference marker");

        let mask_with = config.mask_airfoil.then_some(&outline);
        let field = synthesize(&config.grid, config.freestream, mask_with, &config.flow)?;

        Ok(Scene {
            airfoil,
            outline,
            marker,
            field,
        })
    }
}

fn generated(naca: Naca4Digit, config: &SceneConfig) -> (Option<Airfoil>, PointSequence) {
    let airfoil = naca
        .with_chord(config.geometry.chord)
        .generate(config.geometry.samples, config.geometry.spacing);
    let contour = airfoil.to_outer_contour();
    (Some(airfoil), contour)
}
