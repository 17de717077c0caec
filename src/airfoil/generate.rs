use crate::airfoil::{Airfoil, CamberStation};
use crate::algorithms::{cosine_space, linspace};
use crate::errors::{AirfoilError, Result};
use crate::geometry::PointSequence;
use ncollide2d::na::Point2;
use serde::Deserialize;
use tracing::debug;

pub const MAX_CAMBER_LIMIT: f64 = 0.095;
pub const MAX_THICKNESS_LIMIT: f64 = 0.4;

/// An AirfoilGenerator is an entity which can generate the x, y position of the mean camber line,
/// its slope, and the half thickness of the section at fractions of the chord. This provides the
/// information necessary for a generator to compute the airfoil surfaces.
pub trait AirfoilGenerator {
    fn chord(&self) -> f64;

    /// Return a 2D point with the position of the camber line at a fraction from 0.0 to 1.0
    fn camber_line(&self, x: f64) -> Point2<f64>;

    /// Return the slope of the camber line at a fraction from 0.0 to 1.0
    fn camber_slope(&self, x: f64) -> f64;

    /// Return the thickness measured from the camber line to either surface at a fraction from
    /// 0.0 to 1.0
    fn half_thickness(&self, x: f64) -> f64;

    /// Offsets the half thickness perpendicular to the camber line to find both surface points
    fn station_at(&self, x: f64) -> CamberStation {
        let camber = self.camber_line(x);
        let theta = self.camber_slope(x).atan();
        let yt = self.half_thickness(x);
        let (sin, cos) = theta.sin_cos();

        CamberStation::new(
            camber,
            Point2::new(camber.x - yt * sin, camber.y + yt * cos),
            Point2::new(camber.x + yt * sin, camber.y - yt * cos),
        )
    }

    /// Generates the section at `samples` stations distributed along the chord
    fn generate(&self, samples: usize, spacing: Spacing) -> Airfoil {
        let fractions = match spacing {
            Spacing::Linear => linspace(0.0, 1.0, samples),
            Spacing::Cosine => cosine_space(0.0, 1.0, samples),
        };

        let stations: Vec<CamberStation> = fractions.iter().map(|x| self.station_at(*x)).collect();
        Airfoil::from_stations(&stations)
    }
}

/// The chordwise distribution of the generated stations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spacing {
    #[default]
    Linear,

    /// Clusters stations towards the leading and trailing edges, where curvature is highest
    Cosine,
}

/// Sampling configuration for the generated geometry
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    pub chord: f64,
    pub samples: usize,
    pub spacing: Spacing,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        GeometryConfig {
            chord: 1.0,
            samples: 200,
            spacing: Spacing::Linear,
        }
    }
}

impl GeometryConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.chord.is_finite() && self.chord > 0.0) {
            return Err(AirfoilError::invalid("chord", "must be a positive length"));
        }
        if self.samples < 2 {
            return Err(AirfoilError::invalid("samples", "at least 2 stations are needed"));
        }
        Ok(())
    }
}

/// The three shape parameters of a 4-digit section, each a fraction of the chord
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParameters {
    max_camber: f64,
    camber_position: f64,
    max_thickness: f64,
}

impl ShapeParameters {
    /// Validates and creates the shape parameters.
    ///
    /// # Arguments
    ///
    /// * `max_camber` - The max camber as a fraction, for example on a NACA 2412 this value should
    /// be set to 0.02. Must be within [0, 0.095].
    ///
    /// * `camber_position` - The location of the max camber as a fraction of chord length. For
    /// example on a NACA 2412 this values should be 0.4. Must be strictly between 0 and 1 unless
    /// the section is symmetric.
    ///
    /// * `max_thickness` - the maximum thickness of the airfoil as a fraction of the chord
    /// length. For instance, on a NACA 2412 it should be 0.12. Must be within (0, 0.4].
    pub fn new(max_camber: f64, camber_position: f64, max_thickness: f64) -> Result<Self> {
        // Comparisons against NaN are false, so this also rejects non-finite values
        let thickness_in_range = max_thickness > 0.0 && max_thickness <= MAX_THICKNESS_LIMIT;
        if !thickness_in_range {
            return Err(AirfoilError::invalid(
                "max_thickness",
                format!("{} is outside (0, {}]", max_thickness, MAX_THICKNESS_LIMIT),
            ));
        }

        if !(max_camber.is_finite() && (0.0..=MAX_CAMBER_LIMIT).contains(&max_camber)) {
            return Err(AirfoilError::invalid(
                "max_camber",
                format!("{} is outside [0, {}]", max_camber, MAX_CAMBER_LIMIT),
            ));
        }

        if max_camber > 0.0 {
            if !(camber_position > 0.0 && camber_position < 1.0) {
                return Err(AirfoilError::invalid(
                    "camber_position",
                    format!("{} is outside (0, 1) for a cambered section", camber_position),
                ));
            }
        } else if !(camber_position.is_finite() && (0.0..=1.0).contains(&camber_position)) {
            return Err(AirfoilError::invalid(
                "camber_position",
                format!("{} is outside [0, 1]", camber_position),
            ));
        }

        Ok(ShapeParameters {
            max_camber,
            camber_position,
            max_thickness,
        })
    }

    pub fn symmetric(max_thickness: f64) -> Result<Self> {
        Self::new(0.0, 0.0, max_thickness)
    }

    pub fn max_camber(&self) -> f64 {
        self.max_camber
    }

    pub fn camber_position(&self) -> f64 {
        self.camber_position
    }

    pub fn max_thickness(&self) -> f64 {
        self.max_thickness
    }

    pub fn is_symmetric(&self) -> bool {
        self.max_camber == 0.0 || self.camber_position == 0.0
    }
}

/// A generator for a NACA 4-digit airfoil of the form MPTT, where M is the maximum camber P is the
/// location of the maximum camber, and TT is the maximum thickness of the airfoil as a fraction of
/// the chord.  For example, a NACA 2412 airfoil has a 2% camber at 40% of the chord and a max
/// thickness which is 12% of the chord length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Naca4Digit {
    shape: ShapeParameters,
    chord_len: f64,
}

impl Naca4Digit {
    pub fn new(shape: ShapeParameters, chord_len: f64) -> Naca4Digit {
        Naca4Digit { shape, chord_len }
    }

    /// Parses a designator such as "2412" or "NACA 0012" into a unit chord generator
    pub fn from_code(code: &str) -> Result<Naca4Digit> {
        Ok(Naca4Digit::new(parse_code(code)?, 1.0))
    }

    pub fn shape(&self) -> &ShapeParameters {
        &self.shape
    }

    /// Returns a copy of this section scaled to a different chord length
    pub fn with_chord(&self, chord_len: f64) -> Naca4Digit {
        Naca4Digit::new(self.shape, chord_len)
    }
}

fn parse_code(code: &str) -> Result<ShapeParameters> {
    let trimmed = code.trim();
    let digits = match trimmed.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("naca") => trimmed[4..].trim_start(),
        _ => trimmed,
    };

    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AirfoilError::invalid(
            "code",
            format!("'{}' is not a 4-digit NACA designator", code),
        ));
    }

    let value = |range: std::ops::Range<usize>| -> f64 {
        digits[range]
            .bytes()
            .fold(0.0, |acc, b| acc * 10.0 + f64::from(b - b'0'))
    };

    ShapeParameters::new(value(0..1) / 100.0, value(1..2) / 10.0, value(2..4) / 100.0)
}

impl AirfoilGenerator for Naca4Digit {
    fn chord(&self) -> f64 {
        self.chord_len
    }

    fn camber_line(&self, x: f64) -> Point2<f64> {
        let m = self.shape.max_camber;
        let p = self.shape.camber_position;
        let y = if self.shape.is_symmetric() {
            0.0
        } else if x < p {
            (m / p.powi(2)) * (2.0 * p * x - x.powi(2))
        } else {
            (m / (1.0 - p).powi(2)) * ((1.0 - 2.0 * p) + 2.0 * p * x - x.powi(2))
        };

        Point2::new(x * self.chord_len, y * self.chord_len)
    }

    fn camber_slope(&self, x: f64) -> f64 {
        let m = self.shape.max_camber;
        let p = self.shape.camber_position;
        if self.shape.is_symmetric() {
            0.0
        } else if x < p {
            (2.0 * m / p.powi(2)) * (p - x)
        } else {
            (2.0 * m / (1.0 - p).powi(2)) * (p - x)
        }
    }

    fn half_thickness(&self, x: f64) -> f64 {
        5.0 * self.shape.max_thickness
            * self.chord_len
            * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
                - 0.1015 * x.powi(4))
    }
}

/// Generates the closed outline of a 4-digit section with the given sampling
pub fn generate(shape: ShapeParameters, config: &GeometryConfig) -> Result<PointSequence> {
    config.validate()?;
    let airfoil = Naca4Digit::new(shape, config.chord).generate(config.samples, config.spacing);
    debug!(
        camber = shape.max_camber,
        position = shape.camber_position,
        thickness = shape.max_thickness,
        stations = config.samples,
        "generated 4-digit section"
    );

    Ok(airfoil.to_outer_contour())
}
