use crate::airfoil::generate::{Naca4Digit, ShapeParameters};
use crate::errors::{AirfoilError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The named sections offered for selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirfoilCatalog {
    Naca2412,
    Naca4412,
    Naca0012,
    Naca4415,
    ClarkY,
    NasaSc20714,
    Naca63215,
    Naca64212,
    Eppler387,
    Mh32,
}

/// Where the coordinates of a catalog section come from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AirfoilSource {
    /// Generated from the closed-form 4-digit definition
    Naca4(Naca4Digit),

    /// Read from a coordinate table with this file name
    Tabulated(&'static str),
}

impl AirfoilCatalog {
    pub const ALL: [AirfoilCatalog; 10] = [
        AirfoilCatalog::Naca2412,
        AirfoilCatalog::Naca4412,
        AirfoilCatalog::Naca0012,
        AirfoilCatalog::Naca4415,
        AirfoilCatalog::ClarkY,
        AirfoilCatalog::NasaSc20714,
        AirfoilCatalog::Naca63215,
        AirfoilCatalog::Naca64212,
        AirfoilCatalog::Eppler387,
        AirfoilCatalog::Mh32,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AirfoilCatalog::Naca2412 => "NACA 2412",
            AirfoilCatalog::Naca4412 => "NACA 4412",
            AirfoilCatalog::Naca0012 => "NACA 0012",
            AirfoilCatalog::Naca4415 => "NACA 4415",
            AirfoilCatalog::ClarkY => "Clark Y",
            AirfoilCatalog::NasaSc20714 => "NASA SC(2)-0714",
            AirfoilCatalog::Naca63215 => "NACA 63-215",
            AirfoilCatalog::Naca64212 => "NACA 64-212",
            AirfoilCatalog::Eppler387 => "Eppler 387",
            AirfoilCatalog::Mh32 => "MH 32",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AirfoilCatalog::Naca2412 => {
                "Classic general-purpose airfoil, used in Cessna 172. \
                 Good balance of lift and drag."
            }
            AirfoilCatalog::Naca4412 => {
                "Higher camber than 2412, more lift at low speeds. Common in older light aircraft."
            }
            AirfoilCatalog::Naca0012 => {
                "Symmetrical, widely used in aerobatic aircraft and horizontal stabilizers."
            }
            AirfoilCatalog::Naca4415 => {
                "Higher thickness, better low-speed lift. Used in some trainer aircraft."
            }
            AirfoilCatalog::ClarkY => {
                "Very common training airfoil, forgiving stall, widely used in small planes."
            }
            AirfoilCatalog::NasaSc20714 => {
                "Supercritical airfoil designed for transonic cruise efficiency (jets)."
            }
            AirfoilCatalog::Naca63215 => {
                "Laminar flow airfoil, designed to reduce drag in gliders and racers."
            }
            AirfoilCatalog::Naca64212 => {
                "Used on the P-51 Mustang, optimized for laminar flow and high efficiency."
            }
            AirfoilCatalog::Eppler387 => {
                "Popular for model airplanes and gliders. High lift, gentle stall."
            }
            AirfoilCatalog::Mh32 => {
                "Modern sailplane airfoil, excellent low drag at high Reynolds numbers."
            }
        }
    }

    pub fn source(&self) -> Result<AirfoilSource> {
        let naca = |m: f64, p: f64, t: f64| -> Result<AirfoilSource> {
            Ok(AirfoilSource::Naca4(Naca4Digit::new(
                ShapeParameters::new(m, p, t)?,
                1.0,
            )))
        };

        match self {
            AirfoilCatalog::Naca2412 => naca(0.02, 0.4, 0.12),
            AirfoilCatalog::Naca4412 => naca(0.04, 0.4, 0.12),
            AirfoilCatalog::Naca0012 => naca(0.0, 0.0, 0.12),
            AirfoilCatalog::Naca4415 => naca(0.04, 0.4, 0.15),
            AirfoilCatalog::ClarkY => Ok(AirfoilSource::Tabulated("clarky.dat")),
            AirfoilCatalog::NasaSc20714 => Ok(AirfoilSource::Tabulated("sc20714.dat")),
            AirfoilCatalog::Naca63215 => Ok(AirfoilSource::Tabulated("naca63215.dat")),
            AirfoilCatalog::Naca64212 => Ok(AirfoilSource::Tabulated("naca64212.dat")),
            AirfoilCatalog::Eppler387 => Ok(AirfoilSource::Tabulated("e387.dat")),
            AirfoilCatalog::Mh32 => Ok(AirfoilSource::Tabulated("mh32.dat")),
        }
    }
}

impl Display for AirfoilCatalog {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AirfoilCatalog {
    type Err = AirfoilError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        AirfoilCatalog::ALL
            .iter()
            .find(|a| a.name().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| {
                AirfoilError::invalid("airfoil", format!("'{}' is not in the catalog", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_names_round_trip() {
        for a in AirfoilCatalog::ALL.iter() {
            assert_eq!(*a, a.name().parse::<AirfoilCatalog>().unwrap());
            assert!(!a.description().is_empty());
        }
    }

    #[test_case("naca 2412", AirfoilCatalog::Naca2412)]
    #[test_case("  Clark Y ", AirfoilCatalog::ClarkY)]
    #[test_case("nasa sc(2)-0714", AirfoilCatalog::NasaSc20714)]
    fn test_parse(name: &str, e: AirfoilCatalog) {
        assert_eq!(e, name.parse::<AirfoilCatalog>().unwrap());
    }

    #[test]
    fn test_unknown_name() {
        assert!("NACA 9999".parse::<AirfoilCatalog>().is_err());
    }

    #[test]
    fn test_four_digit_sections_are_generated() {
        for a in AirfoilCatalog::ALL.iter() {
            let is_naca4 = matches!(a.source().unwrap(), AirfoilSource::Naca4(_));
            let expected = matches!(
                a,
                AirfoilCatalog::Naca2412
                    | AirfoilCatalog::Naca4412
                    | AirfoilCatalog::Naca0012
                    | AirfoilCatalog::Naca4415
            );
            assert_eq!(expected, is_naca4, "{}", a);
        }
    }

    #[test]
    fn test_source_matches_designator() {
        match AirfoilCatalog::Naca4415.source().unwrap() {
            AirfoilSource::Naca4(naca) => {
                assert_eq!(Naca4Digit::from_code("4415").unwrap(), naca)
            }
            AirfoilSource::Tabulated(_) => panic!("expected a generated section"),
        }
    }
}
