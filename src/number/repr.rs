
/// The different representations a [`Number`](super::Number) can
/// take on.
///
/// These are ordered in terms of priority. If `a <= b`, then parsing
/// a numeral will try representation `a` before falling back to
/// representation `b`. So `42` parses as an integer, while `42.0`
/// parses as a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumberRepr {
  /// An arbitrary-precision integer.
  Integer,
  /// An IEEE 754 double-precision floating-point value.
  Float,
}

impl NumberRepr {
  /// Returns true if the representation stores exact quantities, as
  /// opposed to floating-point approximations.
  pub fn is_exact(&self) -> bool {
    match self {
      NumberRepr::Integer => true,
      NumberRepr::Float => false,
    }
  }
}
