
use super::system::UnitSystem;
use super::unit::{MeasurementUnit, UnknownUnitError};

use serde::{Serialize, Deserialize};

use std::fmt::{self, Formatter, Display};
use std::str::FromStr;

/// Units of temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
  /// The SI base unit of thermodynamic temperature.
  Kelvin,
  /// Degrees Celsius, offset from kelvin by 273.15.
  Celsius,
  /// Degrees Fahrenheit.
  Fahrenheit,
  /// Degrees Rankine, the absolute counterpart to Fahrenheit.
  Rankine,
}

impl MeasurementUnit for TemperatureUnit {
  const ALL: &'static [Self] = &[
    TemperatureUnit::Kelvin,
    TemperatureUnit::Celsius,
    TemperatureUnit::Fahrenheit,
    TemperatureUnit::Rankine,
  ];

  fn unit_system(self) -> UnitSystem {
    match self {
      TemperatureUnit::Kelvin => UnitSystem::Metric,
      TemperatureUnit::Celsius => UnitSystem::Metric,
      TemperatureUnit::Fahrenheit => UnitSystem::Imperial,
      TemperatureUnit::Rankine => UnitSystem::Imperial,
    }
  }

  fn symbol(self) -> &'static str {
    match self {
      TemperatureUnit::Kelvin => "K",
      TemperatureUnit::Celsius => "°C",
      TemperatureUnit::Fahrenheit => "°F",
      TemperatureUnit::Rankine => "°R",
    }
  }
}

impl Display for TemperatureUnit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

impl FromStr for TemperatureUnit {
  type Err = UnknownUnitError;

  fn from_str(s: &str) -> Result<Self, UnknownUnitError> {
    match s {
      "K" | "degK" => Ok(TemperatureUnit::Kelvin),
      "°C" | "degC" | "C" => Ok(TemperatureUnit::Celsius),
      "°F" | "degF" | "F" => Ok(TemperatureUnit::Fahrenheit),
      "°R" | "degR" | "R" => Ok(TemperatureUnit::Rankine),
      _ => Err(UnknownUnitError::new(s)),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::unit::test_utils::{
    assert_classification_is_partition,
    assert_subsets_preserve_declaration_order,
    assert_symbols_roundtrip,
  };

  #[test]
  fn test_unit_system() {
    assert_eq!(TemperatureUnit::Kelvin.unit_system(), UnitSystem::Metric);
    assert_eq!(TemperatureUnit::Celsius.unit_system(), UnitSystem::Metric);
    assert_eq!(TemperatureUnit::Fahrenheit.unit_system(), UnitSystem::Imperial);
    assert_eq!(TemperatureUnit::Rankine.unit_system(), UnitSystem::Imperial);
  }

  #[test]
  fn test_classification_is_partition() {
    assert_classification_is_partition::<TemperatureUnit>();
    assert_subsets_preserve_declaration_order::<TemperatureUnit>();
  }

  #[test]
  fn test_metric_units() {
    assert_eq!(
      TemperatureUnit::metric_units(),
      vec![TemperatureUnit::Kelvin, TemperatureUnit::Celsius],
    );
  }

  #[test]
  fn test_imperial_units() {
    assert_eq!(
      TemperatureUnit::imperial_units(),
      vec![TemperatureUnit::Fahrenheit, TemperatureUnit::Rankine],
    );
  }

  #[test]
  fn test_symbols_roundtrip() {
    assert_symbols_roundtrip::<TemperatureUnit>();
  }

  #[test]
  fn test_parse_deg_aliases() {
    assert_eq!("degC".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Celsius));
    assert_eq!("degF".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Fahrenheit));
    assert_eq!("degR".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Rankine));
    assert_eq!("degK".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Kelvin));
  }

  #[test]
  fn test_parse_failure() {
    assert_eq!("deg".parse::<TemperatureUnit>(), Err(UnknownUnitError::new("deg")));
  }
}
