
use super::system::UnitSystem;
use super::unit::{MeasurementUnit, UnknownUnitError};

use serde::{Serialize, Deserialize};

use std::fmt::{self, Formatter, Display};
use std::str::FromStr;

/// Units of speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedUnit {
  /// The SI derived unit of speed, m/s.
  MetersPerSecond,
  /// Kilometers per hour, the usual road speed unit in metric
  /// countries.
  KilometersPerHour,
  /// Feet per second.
  FeetPerSecond,
  /// Miles per hour, based on the statute mile.
  MilesPerHour,
  /// The knot, one nautical mile per hour.
  Knot,
}

impl MeasurementUnit for SpeedUnit {
  const ALL: &'static [Self] = &[
    SpeedUnit::MetersPerSecond,
    SpeedUnit::KilometersPerHour,
    SpeedUnit::FeetPerSecond,
    SpeedUnit::MilesPerHour,
    SpeedUnit::Knot,
  ];

  fn unit_system(self) -> UnitSystem {
    match self {
      SpeedUnit::MetersPerSecond => UnitSystem::Metric,
      SpeedUnit::KilometersPerHour => UnitSystem::Metric,
      SpeedUnit::FeetPerSecond => UnitSystem::Imperial,
      SpeedUnit::MilesPerHour => UnitSystem::Imperial,
      SpeedUnit::Knot => UnitSystem::Imperial,
    }
  }

  fn symbol(self) -> &'static str {
    match self {
      SpeedUnit::MetersPerSecond => "m/s",
      SpeedUnit::KilometersPerHour => "km/h",
      SpeedUnit::FeetPerSecond => "ft/s",
      SpeedUnit::MilesPerHour => "mph",
      SpeedUnit::Knot => "kn",
    }
  }
}

impl Display for SpeedUnit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

impl FromStr for SpeedUnit {
  type Err = UnknownUnitError;

  fn from_str(s: &str) -> Result<Self, UnknownUnitError> {
    match s {
      "m/s" => Ok(SpeedUnit::MetersPerSecond),
      "km/h" | "kph" => Ok(SpeedUnit::KilometersPerHour),
      "ft/s" | "fps" => Ok(SpeedUnit::FeetPerSecond),
      "mph" | "mi/h" => Ok(SpeedUnit::MilesPerHour),
      "kn" | "kt" | "knot" => Ok(SpeedUnit::Knot),
      _ => Err(UnknownUnitError::new(s)),
    }
  }
}
