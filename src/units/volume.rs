
use super::system::UnitSystem;
use super::unit::{MeasurementUnit, UnknownUnitError};

use serde::{Serialize, Deserialize};

use std::fmt::{self, Formatter, Display};
use std::str::FromStr;

/// Units of volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeUnit {
  /// One thousandth of a liter.
  Milliliter,
  /// The liter, one cubic decimeter.
  Liter,
  /// The SI derived unit of volume.
  CubicMeter,
  /// The US fluid ounce.
  FluidOunce,
  /// The US liquid pint, 16 fluid ounces.
  Pint,
  /// The US liquid quart, two pints.
  Quart,
  /// The US gallon, four quarts.
  Gallon,
  /// The oil barrel, 42 US gallons.
  Barrel,
}

impl MeasurementUnit for VolumeUnit {
  const ALL: &'static [Self] = &[
    VolumeUnit::Milliliter,
    VolumeUnit::Liter,
    VolumeUnit::CubicMeter,
    VolumeUnit::FluidOunce,
    VolumeUnit::Pint,
    VolumeUnit::Quart,
    VolumeUnit::Gallon,
    VolumeUnit::Barrel,
  ];

  fn unit_system(self) -> UnitSystem {
    match self {
      VolumeUnit::Milliliter => UnitSystem::Metric,
      VolumeUnit::Liter => UnitSystem::Metric,
      VolumeUnit::CubicMeter => UnitSystem::Metric,
      VolumeUnit::FluidOunce => UnitSystem::Imperial,
      VolumeUnit::Pint => UnitSystem::Imperial,
      VolumeUnit::Quart => UnitSystem::Imperial,
      VolumeUnit::Gallon => UnitSystem::Imperial,
      VolumeUnit::Barrel => UnitSystem::Imperial,
    }
  }

  fn symbol(self) -> &'static str {
    match self {
      VolumeUnit::Milliliter => "mL",
      VolumeUnit::Liter => "L",
      VolumeUnit::CubicMeter => "m³",
      VolumeUnit::FluidOunce => "fl oz",
      VolumeUnit::Pint => "pt",
      VolumeUnit::Quart => "qt",
      VolumeUnit::Gallon => "gal",
      VolumeUnit::Barrel => "bbl",
    }
  }
}

impl Display for VolumeUnit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

impl FromStr for VolumeUnit {
  type Err = UnknownUnitError;

  fn from_str(s: &str) -> Result<Self, UnknownUnitError> {
    match s {
      "mL" | "ml" => Ok(VolumeUnit::Milliliter),
      "L" | "l" => Ok(VolumeUnit::Liter),
      "m³" | "m^3" => Ok(VolumeUnit::CubicMeter),
      "fl oz" | "floz" => Ok(VolumeUnit::FluidOunce),
      "pt" => Ok(VolumeUnit::Pint),
      "qt" => Ok(VolumeUnit::Quart),
      "gal" => Ok(VolumeUnit::Gallon),
      "bbl" => Ok(VolumeUnit::Barrel),
      _ => Err(UnknownUnitError::new(s)),
    }
  }
}
