
use super::system::UnitSystem;

use thiserror::Error;

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

/// Common interface to the closed unit enums in this crate, such as
/// [`SpeedUnit`](super::SpeedUnit) or [`WeightUnit`](super::WeightUnit).
///
/// A unit here is an opaque tag attached to measured values, not a
/// conversion factor. The one piece of semantics every unit carries
/// is its classification into a [`UnitSystem`].
///
/// Implementors are expected to be fieldless `Copy` enums and to
/// write [`unit_system`](MeasurementUnit::unit_system) as an
/// exhaustive `match`, so that adding a variant without classifying
/// it fails to compile rather than silently misclassifying.
pub trait MeasurementUnit:
  Debug + Display + Copy + Eq + Ord + Hash + FromStr<Err = UnknownUnitError> + 'static
{
  /// Every unit of the implementing family, in declaration order.
  const ALL: &'static [Self];

  /// The unit system this unit belongs to.
  fn unit_system(self) -> UnitSystem;

  /// The conventional short symbol for this unit. This is the same
  /// text the family's [`Display`] impl produces, and it always
  /// parses back to the unit via [`FromStr`].
  fn symbol(self) -> &'static str;

  /// Returns true if this unit belongs to the metric system.
  fn is_metric(self) -> bool {
    self.unit_system() == UnitSystem::Metric
  }

  /// Returns true if this unit belongs to the imperial system.
  fn is_imperial(self) -> bool {
    self.unit_system() == UnitSystem::Imperial
  }

  /// The metric units of this family, in declaration order.
  fn metric_units() -> Vec<Self> {
    Self::ALL.iter().copied().filter(|unit| unit.is_metric()).collect()
  }

  /// The imperial units of this family, in declaration order.
  fn imperial_units() -> Vec<Self> {
    Self::ALL.iter().copied().filter(|unit| unit.is_imperial()).collect()
  }
}

/// Error indicating that a string was not a recognized unit symbol.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown unit '{input}'")]
pub struct UnknownUnitError {
  pub input: String,
}

impl UnknownUnitError {
  pub fn new(input: impl Into<String>) -> Self {
    Self { input: input.into() }
  }
}

#[cfg(test)]
pub(crate) mod test_utils {
  use super::*;

  use std::collections::HashSet;

  /// Asserts that the family's variants are distinct and that each is
  /// classified into exactly one unit system, with the convenience
  /// predicates agreeing with [`MeasurementUnit::unit_system`].
  pub(crate) fn assert_classification_is_partition<U: MeasurementUnit>() {
    let distinct: HashSet<U> = U::ALL.iter().copied().collect();
    assert_eq!(distinct.len(), U::ALL.len());

    let metric = U::metric_units();
    let imperial = U::imperial_units();
    assert_eq!(metric.len() + imperial.len(), U::ALL.len());
    for unit in U::ALL {
      assert!(
        metric.contains(unit) ^ imperial.contains(unit),
        "{:?} must land in exactly one unit system", unit,
      );
      assert_eq!(unit.is_metric(), unit.unit_system() == UnitSystem::Metric);
      assert_eq!(unit.is_imperial(), unit.unit_system() == UnitSystem::Imperial);
      assert_ne!(unit.is_metric(), unit.is_imperial());
    }
  }

  /// Asserts that the per-system accessors list units in declaration
  /// order.
  pub(crate) fn assert_subsets_preserve_declaration_order<U: MeasurementUnit>() {
    assert_is_subsequence(&U::metric_units(), U::ALL);
    assert_is_subsequence(&U::imperial_units(), U::ALL);
  }

  /// Asserts that every unit displays as its symbol and that the
  /// symbol parses back to the unit.
  pub(crate) fn assert_symbols_roundtrip<U: MeasurementUnit>() {
    for unit in U::ALL {
      assert_eq!(unit.to_string(), unit.symbol());
      assert_eq!(U::from_str(unit.symbol()), Ok(*unit));
    }
  }

  fn assert_is_subsequence<U: MeasurementUnit>(subset: &[U], all: &[U]) {
    let mut all_iter = all.iter();
    for unit in subset {
      assert!(
        all_iter.any(|candidate| candidate == unit),
        "{:?} out of declaration order", unit,
      );
    }
  }
}
