use crate::airfoil::catalog::AirfoilCatalog;
use crate::airfoil::generate::GeometryConfig;
use crate::airfoil::reference::CgPosition;
use crate::errors::{AirfoilError, Result};
use crate::flow::{FieldGrid, FlowConfig};
use crate::geometry::transform::Attitude;
use serde::Deserialize;
use std::path::PathBuf;

/// Which section a scene is built from
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirfoilSelection {
    /// A 4-digit designator such as "2412"
    Code(String),
    Catalog(AirfoilCatalog),
    /// A coordinate table on disk
    Table(PathBuf),
}

impl Default for AirfoilSelection {
    fn default() -> Self {
        AirfoilSelection::Catalog(AirfoilCatalog::Naca2412)
    }
}

/// Everything needed to build a scene. Values are read once at the boundary and passed down
/// explicitly; nothing in the library reads ambient state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub airfoil: AirfoilSelection,
    pub geometry: GeometryConfig,
    pub angle_of_attack: f64,
    /// Pitch point x coordinate, the quarter chord when absent
    pub pivot: Option<f64>,
    pub freestream: f64,
    pub cg_position: CgPosition,
    pub grid: FieldGrid,
    pub flow: FlowConfig,
    /// Whether grid points occupied by the section are masked in the field
    pub mask_airfoil: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            airfoil: AirfoilSelection::default(),
            geometry: GeometryConfig::default(),
            angle_of_attack: 5.0,
            pivot: None,
            freestream: 30.0,
            cg_position: CgPosition::default(),
            grid: FieldGrid::default(),
            flow: FlowConfig::default(),
            mask_airfoil: true,
        }
    }
}

impl SceneConfig {
    pub fn from_json(text: &str) -> Result<SceneConfig> {
        let config: SceneConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn attitude(&self) -> Attitude {
        match self.pivot {
            Some(x) => Attitude::new(self.angle_of_attack, x),
            None => Attitude::quarter_chord(self.angle_of_attack, self.geometry.chord),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.geometry.validate()?;
        if !self.angle_of_attack.is_finite() {
            return Err(AirfoilError::invalid("angle_of_attack", "must be finite"));
        }
        if !self.freestream.is_finite() {
            return Err(AirfoilError::invalid("freestream", "must be finite"));
        }
        if let Some(x) = self.pivot {
            if !x.is_finite() {
                return Err(AirfoilError::invalid("pivot", "must be finite"));
            }
        }
        self.flow.validate()
    }
}
