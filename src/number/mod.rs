
//! General-purpose scalar number type for measurement values.

mod repr;

pub use repr::NumberRepr;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num::{BigInt, ToPrimitive, Zero};
use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::fmt::{self, Formatter, Display};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// General-purpose scalar type for measurement values, capable of
/// representing either an exact arbitrary-precision integer or an
/// IEEE 754 double-precision floating-point value. Use
/// [`Number::repr`] to query which representation a given number is
/// currently using.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Number {
  inner: NumberImpl,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum NumberImpl {
  Integer(Box<BigInt>),
  Float(f64),
}

/// Error parsing a string as a [`Number`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Failed to parse number")]
#[non_exhaustive]
pub struct ParseNumberError {}

impl Number {
  /// The representation this number is currently stored in.
  pub fn repr(&self) -> NumberRepr {
    match &self.inner {
      NumberImpl::Integer(_) => NumberRepr::Integer,
      NumberImpl::Float(_) => NumberRepr::Float,
    }
  }

  /// Returns true if this number is stored in an exact
  /// representation.
  pub fn is_exact(&self) -> bool {
    self.repr().is_exact()
  }

  /// Converts this number to a floating-point value, on a best-effort
  /// basis. Integers too large for `f64` overflow to infinity, and
  /// `None` is only produced if the underlying conversion refuses the
  /// value outright.
  pub fn to_f64(&self) -> Option<f64> {
    match &self.inner {
      NumberImpl::Integer(i) => i.to_f64(),
      NumberImpl::Float(f) => Some(*f),
    }
  }
}

/// Two `Number`s are equal precisely when they have the same
/// [`NumberRepr`] and are equal in that representation. Integers
/// compare by mathematical value, while floats compare by bit
/// pattern. In particular, `NaN` is equal to itself, positive and
/// negative zero are distinct, and an integer is never equal to a
/// float, even when both denote the same quantity. For value-based
/// comparison up to a tolerance, use the [`AbsDiffEq`] impl.
///
/// # Examples
///
/// ```
/// # use mensura::number::Number;
/// assert_eq!(Number::from(5), Number::from(5));
/// assert_ne!(Number::from(5), Number::from(5.0));
/// assert_eq!(Number::from(f64::NAN), Number::from(f64::NAN));
/// ```
impl PartialEq for Number {
  fn eq(&self, other: &Number) -> bool {
    match (&self.inner, &other.inner) {
      (NumberImpl::Integer(a), NumberImpl::Integer(b)) => a == b,
      (NumberImpl::Float(a), NumberImpl::Float(b)) => a.to_bits() == b.to_bits(),
      _ => false,
    }
  }
}

impl Eq for Number {}

/// The hash of a `Number` is derived from its representation tag and
/// its value in that representation, so equal numbers always hash
/// equally.
impl Hash for Number {
  fn hash<H: Hasher>(&self, state: &mut H) {
    match &self.inner {
      NumberImpl::Integer(i) => {
        state.write_u8(0);
        i.hash(state);
      }
      NumberImpl::Float(f) => {
        state.write_u8(1);
        state.write_u64(f.to_bits());
      }
    }
  }
}

impl Display for Number {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match &self.inner {
      NumberImpl::Integer(i) => i.fmt(f),
      NumberImpl::Float(d) => {
        if d.fract().is_zero() && d.abs() < u64::MAX as f64 {
          // Print a trailing ".0" so the float re-reads as a float.
          write!(f, "{:.1}", d)
        } else {
          write!(f, "{}", d)
        }
      }
    }
  }
}

impl Default for Number {
  fn default() -> Number {
    Number::from(0)
  }
}

impl From<BigInt> for Number {
  fn from(i: BigInt) -> Number {
    Number { inner: NumberImpl::Integer(Box::new(i)) }
  }
}

impl From<i32> for Number {
  fn from(i: i32) -> Number {
    Number::from(BigInt::from(i))
  }
}

impl From<i64> for Number {
  fn from(i: i64) -> Number {
    Number::from(BigInt::from(i))
  }
}

impl From<u64> for Number {
  fn from(i: u64) -> Number {
    Number::from(BigInt::from(i))
  }
}

impl From<usize> for Number {
  fn from(i: usize) -> Number {
    Number::from(BigInt::from(i))
  }
}

impl From<f64> for Number {
  fn from(f: f64) -> Number {
    Number { inner: NumberImpl::Float(f) }
  }
}

impl FromStr for Number {
  type Err = ParseNumberError;

  fn from_str(s: &str) -> Result<Number, ParseNumberError> {
    parse_integer(s)
      .or_else(|| parse_float(s))
      .ok_or(ParseNumberError {})
  }
}

fn parse_integer(s: &str) -> Option<Number> {
  BigInt::from_str(s).ok().map(Number::from)
}

fn parse_float(s: &str) -> Option<Number> {
  f64::from_str(s).ok().map(Number::from)
}

/// Approximate equality on the numerical values, after conversion to
/// `f64`. Unlike `==`, this comparison is representation-blind, and
/// `NaN` is never within any tolerance of anything, itself included.
impl AbsDiffEq for Number {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    <f64 as AbsDiffEq>::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &Number, epsilon: f64) -> bool {
    let a = self.to_f64().unwrap_or(f64::NAN);
    let b = other.to_f64().unwrap_or(f64::NAN);
    a.abs_diff_eq(&b, epsilon)
  }
}

impl RelativeEq for Number {
  fn default_max_relative() -> f64 {
    <f64 as RelativeEq>::default_max_relative()
  }

  fn relative_eq(&self, other: &Number, epsilon: f64, max_relative: f64) -> bool {
    let a = self.to_f64().unwrap_or(f64::NAN);
    let b = other.to_f64().unwrap_or(f64::NAN);
    a.relative_eq(&b, epsilon, max_relative)
  }
}

impl UlpsEq for Number {
  fn default_max_ulps() -> u32 {
    <f64 as UlpsEq>::default_max_ulps()
  }

  fn ulps_eq(&self, other: &Number, epsilon: f64, max_ulps: u32) -> bool {
    let a = self.to_f64().unwrap_or(f64::NAN);
    let b = other.to_f64().unwrap_or(f64::NAN);
    a.ulps_eq(&b, epsilon, max_ulps)
  }
}
