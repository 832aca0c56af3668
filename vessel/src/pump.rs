use std::sync::Arc;

use log::debug;
use measurements::Volume;

use crate::error::Error;
use crate::fuel_tank::FuelTank;
use crate::tank::Tank;

/// A fuel pump drawing from a shared tank.
///
/// Each cycle moves a fixed `rate` out of the tank. The pump counts its
/// successful cycles, which is what customers are billed for.
#[derive(Debug)]
pub struct Pump<T: Tank = FuelTank> {
  tank: Arc<T>,
  rate: Volume,
  cycles: u64,
}

impl<T: Tank> Pump<T> {
  pub const DEFAULT_RATE_LITERS: f64 = 0.3;

  pub fn new(tank: Arc<T>) -> Self {
    Self { tank, rate: Volume::from_liters(Self::DEFAULT_RATE_LITERS), cycles: 0 }
  }

  pub fn with_rate(tank: Arc<T>, rate: Volume) -> Result<Self, Error> {
    let liters = rate.as_liters();

    if !(liters.is_finite() && liters > 0.0) {
      return Err(Error::InvalidRate(liters))
    }

    Ok(Self { tank, rate, cycles: 0 })
  }

  pub fn tank(&self) -> &Arc<T> {
    &self.tank
  }

  /// Liters moved per cycle.
  pub fn rate(&self) -> Volume {
    self.rate
  }

  /// Liters dispensed since creation or the last reset.
  ///
  /// Derived from the cycle count so that rounding does not build up over
  /// repeated additions of `rate`.
  pub fn dispensed(&self) -> Volume {
    Volume::from_liters(self.rate.as_liters() * self.cycles as f64)
  }

  /// Runs one pump cycle and returns the volume dispensed, which is zero once
  /// the tank cannot supply a full cycle.
  pub fn pump_fuel(&mut self) -> Volume {
    if self.tank.draw(self.rate) {
      self.cycles += 1;
      return self.rate
    }

    debug!("Tank cannot supply {} l, dispensed nothing.", self.rate.as_liters());
    Volume::from_liters(0.0)
  }

  pub fn reset_counter(&mut self) {
    self.cycles = 0;
  }

  /// Revenue for everything dispensed, truncated toward zero.
  pub fn turnover(&self, price_per_liter: f64) -> i64 {
    self.turnover_exact(price_per_liter) as i64
  }

  pub fn turnover_exact(&self, price_per_liter: f64) -> f64 {
    price_per_liter * self.dispensed().as_liters()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn liters(l: f64) -> Volume {
    Volume::from_liters(l)
  }

  fn tank_with(stored: f64) -> Arc<FuelTank> {
    let tank = FuelTank::new(liters(1000.0)).unwrap();
    assert!(tank.fill(liters(stored)));
    Arc::new(tank)
  }

  #[test]
  fn pumps_fixed_rate() {
    let mut pump = Pump::new(tank_with(800.0));

    for _ in 0..100 {
      assert_eq!(pump.pump_fuel(), liters(0.3));
    }

    assert!((pump.dispensed().as_liters() - 30.0).abs() < 1e-9);
    assert!((pump.tank().volume().as_liters() - 770.0).abs() < 1e-9);
  }

  #[test]
  fn empty_tank_dispenses_nothing() {
    let mut pump = Pump::new(tank_with(0.2));

    assert_eq!(pump.pump_fuel(), liters(0.0));
    assert_eq!(pump.dispensed(), liters(0.0));
    assert_eq!(pump.tank().volume(), liters(0.2));
  }

  #[test]
  fn runs_dry() {
    let mut pump = Pump::with_rate(tank_with(1.0), liters(0.25)).unwrap();

    let total: f64 = (0..10).map(|_| pump.pump_fuel().as_liters()).sum();

    assert_eq!(total, 1.0);
    assert_eq!(pump.dispensed(), liters(1.0));
    assert_eq!(pump.tank().volume(), liters(0.0));
  }

  #[test]
  fn rejects_bad_rate() {
    let tank = tank_with(0.0);
    assert_eq!(Pump::with_rate(tank.clone(), liters(0.0)).unwrap_err(), Error::InvalidRate(0.0));
    assert_eq!(Pump::with_rate(tank.clone(), liters(-0.3)).unwrap_err(), Error::InvalidRate(-0.3));
    assert!(Pump::with_rate(tank, liters(f64::NAN)).is_err());
  }

  #[test]
  fn reset_leaves_tank_alone() {
    let mut pump = Pump::new(tank_with(10.0));
    pump.pump_fuel();
    pump.pump_fuel();
    let level = pump.tank().volume();

    pump.reset_counter();

    assert_eq!(pump.dispensed(), liters(0.0));
    assert_eq!(pump.tank().volume(), level);
  }

  #[test]
  fn turnover_truncates() {
    let mut pump = Pump::new(tank_with(0.0));

    pump.cycles = 60;
    assert_eq!(pump.turnover(10.0), 180);

    pump.cycles = 61;
    assert_eq!(pump.turnover(10.0), 183);

    let mut pump = Pump::with_rate(tank_with(0.0), liters(0.5)).unwrap();
    pump.cycles = 3;
    assert_eq!(pump.turnover_exact(3.0), 4.5);
    assert_eq!(pump.turnover(3.0), 4);
  }

  #[test]
  fn billing_does_not_drift() {
    let mut pump = Pump::new(tank_with(800.0));

    for _ in 0..60 {
      pump.pump_fuel();
    }
    assert_eq!(pump.turnover(10.0), 180);

    for _ in 0..80 {
      pump.pump_fuel();
    }
    assert_eq!(pump.turnover(10.0), 420);
    assert_eq!(pump.dispensed(), liters(42.0));
  }

  #[test]
  fn pumps_share_one_tank() {
    let tank = tank_with(1.0);
    let mut first = Pump::with_rate(tank.clone(), liters(0.5)).unwrap();
    let mut second = Pump::with_rate(tank.clone(), liters(0.5)).unwrap();

    assert_eq!(first.pump_fuel(), liters(0.5));
    assert_eq!(second.pump_fuel(), liters(0.5));
    assert_eq!(first.pump_fuel(), liters(0.0));
    assert_eq!(second.pump_fuel(), liters(0.0));

    assert_eq!(first.dispensed(), liters(0.5));
    assert_eq!(second.dispensed(), liters(0.5));
    assert_eq!(tank.volume(), liters(0.0));
  }
}
