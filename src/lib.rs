
//! Typed measurement values. Each measured quantity gets a closed
//! enum of units, every unit is classified into a [`UnitSystem`]
//! (metric or imperial), and a [`Measurement`] pairs a scalar
//! [`Number`] with the unit it was measured in.
//!
//! [`UnitSystem`]: units::UnitSystem
//! [`Measurement`]: measurement::Measurement
//! [`Number`]: number::Number
//!
//! ```
//! use mensura::measurement::Measurement;
//! use mensura::units::{MeasurementUnit, SpeedUnit, UnitSystem};
//!
//! let speed = Measurement::new(5.0, SpeedUnit::MetersPerSecond);
//! assert_eq!(speed.unit().unit_system(), UnitSystem::Metric);
//! assert!(speed.eq_within(&Measurement::new(5.05, SpeedUnit::MetersPerSecond), 0.1));
//! ```

pub mod measurement;
pub mod number;
pub mod units;
