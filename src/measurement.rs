
//! The [`Measurement`] type, pairing a numeric value with the unit it
//! was measured in.

use crate::number::{Number, ParseNumberError};
use crate::units::unit::{MeasurementUnit, UnknownUnitError};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::fmt::{self, Formatter, Display};
use std::str::FromStr;

/// A numeric value together with the unit it was measured in.
///
/// Two measurements are equal exactly when their units are identical
/// and their values are equal under [`Number`]'s representation-exact
/// equality. The derived [`Hash`](std::hash::Hash) covers the same
/// two fields, so equal measurements always hash equally. For
/// comparison up to a numeric tolerance, see
/// [`Measurement::eq_within`].
///
/// Measurements are plain owned values. Mutating one through
/// [`set_value`](Measurement::set_value) or
/// [`set_unit`](Measurement::set_unit) requires exclusive access, so
/// a shared measurement is immutable in the usual Rust sense.
///
/// # Examples
///
/// ```
/// # use mensura::measurement::Measurement;
/// # use mensura::units::SpeedUnit;
/// let a = Measurement::new(5.0, SpeedUnit::MetersPerSecond);
/// assert_eq!(a, Measurement::new(5.0, SpeedUnit::MetersPerSecond));
/// assert_ne!(a, Measurement::new(5.0, SpeedUnit::KilometersPerHour));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Measurement<U> {
  value: Number,
  unit: U,
}

/// Error parsing a string as a [`Measurement`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseMeasurementError {
  /// The input was not of the form `<value> <unit>`.
  #[error("Expected measurement of the form '<value> <unit>'")]
  InvalidSyntax,
  /// The value part was not a valid number.
  #[error("{0}")]
  InvalidValue(#[from] ParseNumberError),
  /// The unit part was not a recognized unit symbol.
  #[error("{0}")]
  InvalidUnit(#[from] UnknownUnitError),
}

static MEASUREMENT_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^\s*(\S+)\s+(\S.*?)\s*$").unwrap()
});

impl<U: MeasurementUnit> Measurement<U> {
  /// Constructs a new measurement of `value` in `unit`.
  pub fn new(value: impl Into<Number>, unit: U) -> Self {
    Self { value: value.into(), unit }
  }

  pub fn value(&self) -> &Number {
    &self.value
  }

  pub fn unit(&self) -> U {
    self.unit
  }

  /// Replaces the value, keeping the unit.
  pub fn set_value(&mut self, value: impl Into<Number>) {
    self.value = value.into();
  }

  /// Replaces the unit, keeping the value. No conversion of any kind
  /// is performed on the value.
  pub fn set_unit(&mut self, unit: U) {
    self.unit = unit;
  }

  /// Decomposes the measurement into its value and unit.
  pub fn into_parts(self) -> (Number, U) {
    (self.value, self.unit)
  }

  /// Compares two measurements for approximate equality. This is true
  /// precisely when the two units are identical and the absolute
  /// difference of the two values, viewed as `f64`, is at most
  /// `tolerance`.
  ///
  /// The comparison follows IEEE 754 arithmetic with no special
  /// cases. A `NaN` value is never within any tolerance of anything,
  /// and a negative tolerance is accepted but never satisfied, not
  /// even by equal values. Unlike `==`, this comparison is
  /// representation-blind, so an exact integer can be within
  /// tolerance of a float.
  ///
  /// # Examples
  ///
  /// ```
  /// # use mensura::measurement::Measurement;
  /// # use mensura::units::SpeedUnit;
  /// let a = Measurement::new(5.0, SpeedUnit::MetersPerSecond);
  /// let b = Measurement::new(5.05, SpeedUnit::MetersPerSecond);
  /// assert!(a.eq_within(&b, 0.1));
  /// assert!(!a.eq_within(&b, 0.01));
  /// ```
  pub fn eq_within(&self, other: &Measurement<U>, tolerance: f64) -> bool {
    if self.unit != other.unit {
      return false;
    }
    let a = self.value.to_f64().unwrap_or(f64::NAN);
    let b = other.value.to_f64().unwrap_or(f64::NAN);
    (a - b).abs() <= tolerance
  }
}

impl<U: MeasurementUnit> Display for Measurement<U> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.value, self.unit)
  }
}

impl<U: MeasurementUnit> FromStr for Measurement<U> {
  type Err = ParseMeasurementError;

  fn from_str(s: &str) -> Result<Self, ParseMeasurementError> {
    let caps = MEASUREMENT_RE.captures(s).ok_or(ParseMeasurementError::InvalidSyntax)?;
    // Two capture groups are guaranteed by the regex itself.
    let value = caps.get(1).unwrap().as_str().parse::<Number>()?;
    let unit = caps.get(2).unwrap().as_str().parse::<U>()?;
    Ok(Measurement { value, unit })
  }
}

/// Approximate equality with `epsilon` playing the role of the
/// tolerance in [`Measurement::eq_within`]. Measurements in different
/// units are never approximately equal.
impl<U: MeasurementUnit> AbsDiffEq for Measurement<U> {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    <f64 as AbsDiffEq>::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &Measurement<U>, epsilon: f64) -> bool {
    self.eq_within(other, epsilon)
  }
}

impl<U: MeasurementUnit> RelativeEq for Measurement<U> {
  fn default_max_relative() -> f64 {
    <f64 as RelativeEq>::default_max_relative()
  }

  fn relative_eq(&self, other: &Measurement<U>, epsilon: f64, max_relative: f64) -> bool {
    if self.unit != other.unit {
      return false;
    }
    let a = self.value.to_f64().unwrap_or(f64::NAN);
    let b = other.value.to_f64().unwrap_or(f64::NAN);
    a.relative_eq(&b, epsilon, max_relative)
  }
}

impl<U: MeasurementUnit> UlpsEq for Measurement<U> {
  fn default_max_ulps() -> u32 {
    <f64 as UlpsEq>::default_max_ulps()
  }

  fn ulps_eq(&self, other: &Measurement<U>, epsilon: f64, max_ulps: u32) -> bool {
    if self.unit != other.unit {
      return false;
    }
    let a = self.value.to_f64().unwrap_or(f64::NAN);
    let b = other.value.to_f64().unwrap_or(f64::NAN);
    a.ulps_eq(&b, epsilon, max_ulps)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::acceleration::AccelerationUnit;
  use crate::units::speed::SpeedUnit;
  use crate::units::volume::VolumeUnit;
  use crate::units::weight::WeightUnit;

  use approx::{assert_abs_diff_eq, assert_abs_diff_ne};

  use std::collections::HashSet;
  use std::collections::hash_map::DefaultHasher;
  use std::hash::{Hash, Hasher};

  fn hash_of<U: MeasurementUnit>(measurement: &Measurement<U>) -> u64 {
    let mut hasher = DefaultHasher::new();
    measurement.hash(&mut hasher);
    hasher.finish()
  }

  #[test]
  fn test_accessors() {
    let m = Measurement::new(5.0, SpeedUnit::MetersPerSecond);
    assert_eq!(m.value(), &Number::from(5.0));
    assert_eq!(m.unit(), SpeedUnit::MetersPerSecond);
  }

  #[test]
  fn test_set_value() {
    let mut m = Measurement::new(5.0, WeightUnit::Kilogram);
    m.set_value(7);
    assert_eq!(m, Measurement::new(7, WeightUnit::Kilogram));
  }

  #[test]
  fn test_set_unit() {
    let mut m = Measurement::new(5.0, WeightUnit::Kilogram);
    m.set_unit(WeightUnit::Pound);
    assert_eq!(m, Measurement::new(5.0, WeightUnit::Pound));
  }

  #[test]
  fn test_into_parts() {
    let m = Measurement::new(42, VolumeUnit::Barrel);
    assert_eq!(m.into_parts(), (Number::from(42), VolumeUnit::Barrel));
  }

  #[test]
  fn test_eq() {
    let a = Measurement::new(5.0, SpeedUnit::MetersPerSecond);
    assert_eq!(a, Measurement::new(5.0, SpeedUnit::MetersPerSecond));
    assert_ne!(a, Measurement::new(5.0, SpeedUnit::KilometersPerHour));
    assert_ne!(a, Measurement::new(5.5, SpeedUnit::MetersPerSecond));
  }

  #[test]
  fn test_eq_is_repr_sensitive() {
    let integral = Measurement::new(5, WeightUnit::Gram);
    let floating = Measurement::new(5.0, WeightUnit::Gram);
    assert_ne!(integral, floating);
    assert!(integral.eq_within(&floating, 0.0));
  }

  #[test]
  fn test_hash_agrees_with_eq() {
    let a = Measurement::new(5.0, SpeedUnit::MetersPerSecond);
    let b = Measurement::new(5.0, SpeedUnit::MetersPerSecond);
    assert_eq!(hash_of(&a), hash_of(&b));
  }

  #[test]
  fn test_equal_measurements_collapse_in_hash_set() {
    let set: HashSet<Measurement<SpeedUnit>> = [
      Measurement::new(5.0, SpeedUnit::MetersPerSecond),
      Measurement::new(5.0, SpeedUnit::MetersPerSecond),
      Measurement::new(5.0, SpeedUnit::KilometersPerHour),
    ].into_iter().collect();
    assert_eq!(set.len(), 2);
  }

  #[test]
  fn test_eq_within() {
    let a = Measurement::new(5.0, SpeedUnit::MetersPerSecond);
    let b = Measurement::new(5.05, SpeedUnit::MetersPerSecond);
    assert!(a.eq_within(&b, 0.1));
    assert!(!a.eq_within(&b, 0.01));
    assert!(b.eq_within(&a, 0.1));
  }

  #[test]
  fn test_eq_within_requires_same_unit() {
    let a = Measurement::new(5.0, SpeedUnit::MetersPerSecond);
    let b = Measurement::new(5.0, SpeedUnit::KilometersPerHour);
    assert!(!a.eq_within(&b, f64::INFINITY));
  }

  #[test]
  fn test_eq_within_nan() {
    // NaN measurements are exactly equal (bit pattern) but never
    // within tolerance of each other.
    let a = Measurement::new(f64::NAN, SpeedUnit::MetersPerSecond);
    assert_eq!(a, a.clone());
    assert!(!a.eq_within(&a, 1.0));
  }

  #[test]
  fn test_eq_within_negative_tolerance() {
    let a = Measurement::new(5.0, SpeedUnit::MetersPerSecond);
    assert!(!a.eq_within(&a, -0.1));
  }

  #[test]
  fn test_abs_diff_eq() {
    let a = Measurement::new(5.0, SpeedUnit::MetersPerSecond);
    let b = Measurement::new(5.05, SpeedUnit::MetersPerSecond);
    assert_abs_diff_eq!(a, b, epsilon = 0.1);
    assert_abs_diff_ne!(a, b, epsilon = 0.01);
    assert_abs_diff_ne!(a, Measurement::new(5.0, SpeedUnit::KilometersPerHour), epsilon = 0.1);
  }

  #[test]
  fn test_display() {
    assert_eq!(Measurement::new(5.0, SpeedUnit::MetersPerSecond).to_string(), "5.0 m/s");
    assert_eq!(Measurement::new(42, WeightUnit::Kilogram).to_string(), "42 kg");
    assert_eq!(Measurement::new(1.5, VolumeUnit::FluidOunce).to_string(), "1.5 fl oz");
  }

  #[test]
  fn test_parse() {
    assert_eq!(
      "5.0 m/s".parse::<Measurement<SpeedUnit>>().unwrap(),
      Measurement::new(5.0, SpeedUnit::MetersPerSecond),
    );
    assert_eq!(
      "42 kg".parse::<Measurement<WeightUnit>>().unwrap(),
      Measurement::new(42, WeightUnit::Kilogram),
    );
    assert_eq!(
      "9.8 m/s^2".parse::<Measurement<AccelerationUnit>>().unwrap(),
      Measurement::new(9.8, AccelerationUnit::MetersPerSquaredSecond),
    );
  }

  #[test]
  fn test_parse_unit_with_inner_space() {
    assert_eq!(
      "1.5 fl oz".parse::<Measurement<VolumeUnit>>().unwrap(),
      Measurement::new(1.5, VolumeUnit::FluidOunce),
    );
  }

  #[test]
  fn test_parse_with_surrounding_whitespace() {
    assert_eq!(
      "  42 kg ".parse::<Measurement<WeightUnit>>().unwrap(),
      Measurement::new(42, WeightUnit::Kilogram),
    );
  }

  #[test]
  fn test_parse_errors() {
    assert_eq!(
      "5.0".parse::<Measurement<SpeedUnit>>(),
      Err(ParseMeasurementError::InvalidSyntax),
    );
    assert_eq!(
      "xyz kg".parse::<Measurement<WeightUnit>>(),
      Err(ParseMeasurementError::InvalidValue(ParseNumberError {})),
    );
    assert_eq!(
      "5.0 zorps".parse::<Measurement<SpeedUnit>>(),
      Err(ParseMeasurementError::InvalidUnit(UnknownUnitError::new("zorps"))),
    );
  }

  #[test]
  fn test_display_parse_roundtrip() {
    let speeds = [
      Measurement::new(5.0, SpeedUnit::MetersPerSecond),
      Measurement::new(-12, SpeedUnit::MilesPerHour),
    ];
    for m in &speeds {
      assert_eq!(&m.to_string().parse::<Measurement<SpeedUnit>>().unwrap(), m);
    }
    let volume = Measurement::new(1.5, VolumeUnit::FluidOunce);
    assert_eq!(volume.to_string().parse::<Measurement<VolumeUnit>>().unwrap(), volume);
  }

  #[test]
  fn test_serde_json_encoding() {
    let m = Measurement::new(5.0, SpeedUnit::MetersPerSecond);
    assert_eq!(
      serde_json::to_string(&m).unwrap(),
      r#"{"value":{"float":5.0},"unit":"meters_per_second"}"#,
    );
  }

  #[test]
  fn test_serde_roundtrip() {
    let measurements = [
      Measurement::new(5.0, WeightUnit::Kilogram),
      Measurement::new(-3, WeightUnit::Stone),
      Measurement::new(0.25, WeightUnit::Ounce),
    ];
    for m in &measurements {
      let json = serde_json::to_string(m).unwrap();
      let reparsed: Measurement<WeightUnit> = serde_json::from_str(&json).unwrap();
      assert_eq!(&reparsed, m, "Serde roundtrip failed for {}", m);
    }
  }
}
