
use super::system::UnitSystem;
use super::unit::{MeasurementUnit, UnknownUnitError};

use serde::{Serialize, Deserialize};

use std::fmt::{self, Formatter, Display};
use std::str::FromStr;

/// Units of acceleration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccelerationUnit {
  /// The SI derived unit of acceleration, m/s².
  MetersPerSquaredSecond,
  /// The CGS unit of acceleration, one centimeter per squared
  /// second. Named for Galileo.
  Gal,
  /// Standard gravity, the nominal acceleration due to Earth's
  /// gravity at sea level.
  G,
  /// Feet per squared second.
  FeetPerSquaredSecond,
}

impl MeasurementUnit for AccelerationUnit {
  const ALL: &'static [Self] = &[
    AccelerationUnit::MetersPerSquaredSecond,
    AccelerationUnit::Gal,
    AccelerationUnit::G,
    AccelerationUnit::FeetPerSquaredSecond,
  ];

  fn unit_system(self) -> UnitSystem {
    match self {
      AccelerationUnit::MetersPerSquaredSecond => UnitSystem::Metric,
      AccelerationUnit::Gal => UnitSystem::Metric,
      AccelerationUnit::G => UnitSystem::Metric,
      AccelerationUnit::FeetPerSquaredSecond => UnitSystem::Imperial,
    }
  }

  fn symbol(self) -> &'static str {
    match self {
      AccelerationUnit::MetersPerSquaredSecond => "m/s²",
      AccelerationUnit::Gal => "Gal",
      AccelerationUnit::G => "g",
      AccelerationUnit::FeetPerSquaredSecond => "ft/s²",
    }
  }
}

impl Display for AccelerationUnit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

impl FromStr for AccelerationUnit {
  type Err = UnknownUnitError;

  fn from_str(s: &str) -> Result<Self, UnknownUnitError> {
    match s {
      "m/s²" | "m/s^2" => Ok(AccelerationUnit::MetersPerSquaredSecond),
      "Gal" => Ok(AccelerationUnit::Gal),
      "g" | "g0" => Ok(AccelerationUnit::G),
      "ft/s²" | "ft/s^2" => Ok(AccelerationUnit::FeetPerSquaredSecond),
      _ => Err(UnknownUnitError::new(s)),
    }
  }
}
