
use super::system::UnitSystem;
use super::unit::{MeasurementUnit, UnknownUnitError};

use serde::{Serialize, Deserialize};

use std::fmt::{self, Formatter, Display};
use std::str::FromStr;

/// Units of weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
  /// One thousandth of a gram.
  Milligram,
  /// The gram.
  Gram,
  /// The SI base unit of mass.
  Kilogram,
  /// The metric ton, equal to one megagram.
  Tonne,
  /// The avoirdupois ounce.
  Ounce,
  /// The avoirdupois pound.
  Pound,
  /// The stone, 14 pounds.
  Stone,
}

impl MeasurementUnit for WeightUnit {
  const ALL: &'static [Self] = &[
    WeightUnit::Milligram,
    WeightUnit::Gram,
    WeightUnit::Kilogram,
    WeightUnit::Tonne,
    WeightUnit::Ounce,
    WeightUnit::Pound,
    WeightUnit::Stone,
  ];

  fn unit_system(self) -> UnitSystem {
    match self {
      WeightUnit::Milligram => UnitSystem::Metric,
      WeightUnit::Gram => UnitSystem::Metric,
      WeightUnit::Kilogram => UnitSystem::Metric,
      WeightUnit::Tonne => UnitSystem::Metric,
      WeightUnit::Ounce => UnitSystem::Imperial,
      WeightUnit::Pound => UnitSystem::Imperial,
      WeightUnit::Stone => UnitSystem::Imperial,
    }
  }

  fn symbol(self) -> &'static str {
    match self {
      WeightUnit::Milligram => "mg",
      WeightUnit::Gram => "g",
      WeightUnit::Kilogram => "kg",
      WeightUnit::Tonne => "t",
      WeightUnit::Ounce => "oz",
      WeightUnit::Pound => "lb",
      WeightUnit::Stone => "st",
    }
  }
}

impl Display for WeightUnit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

impl FromStr for WeightUnit {
  type Err = UnknownUnitError;

  fn from_str(s: &str) -> Result<Self, UnknownUnitError> {
    match s {
      "mg" => Ok(WeightUnit::Milligram),
      "g" => Ok(WeightUnit::Gram),
      "kg" => Ok(WeightUnit::Kilogram),
      "t" | "tonne" => Ok(WeightUnit::Tonne),
      "oz" => Ok(WeightUnit::Ounce),
      "lb" | "lbs" => Ok(WeightUnit::Pound),
      "st" => Ok(WeightUnit::Stone),
      _ => Err(UnknownUnitError::new(s)),
    }
  }
}
