mod error;
mod fuel_tank;
mod level;
mod pump;
mod tank;

pub use self::error::Error;
pub use self::fuel_tank::FuelTank;
pub use self::level::Level;
pub use self::pump::Pump;
pub use self::tank::Tank;

pub use measurements::Volume;
