
//! Closed enums of measurement units, grouped by the quantity they
//! measure, and the [`UnitSystem`] classification shared by all of
//! them.

pub mod acceleration;
pub mod speed;
pub mod system;
pub mod temperature;
pub mod unit;
pub mod volume;
pub mod weight;

pub use acceleration::AccelerationUnit;
pub use speed::SpeedUnit;
pub use system::UnitSystem;
pub use temperature::TemperatureUnit;
pub use unit::{MeasurementUnit, UnknownUnitError};
pub use volume::VolumeUnit;
pub use weight::WeightUnit;
