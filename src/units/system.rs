
//! The [`UnitSystem`] classification enum.

use serde::{Serialize, Deserialize};

use std::fmt::{self, Formatter, Display};

/// The system of measurement a unit belongs to. Every unit in this
/// crate is classified into exactly one system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
  /// The metric system, consisting of the SI units together with the
  /// non-SI units accepted for use alongside them.
  Metric,
  /// The imperial system, extended here to include US customary
  /// units.
  Imperial,
}

impl UnitSystem {
  pub const ALL: [UnitSystem; 2] = [UnitSystem::Metric, UnitSystem::Imperial];
}

impl Display for UnitSystem {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      UnitSystem::Metric => write!(f, "metric"),
      UnitSystem::Imperial => write!(f, "imperial"),
    }
  }
}
