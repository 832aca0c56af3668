use std::sync::{Mutex, MutexGuard, PoisonError};

use measurements::Volume;

use crate::error::Error;
use crate::level::Level;
use crate::tank::Tank;

/// The station's underground tank.
///
/// The level lives behind a mutex so that pumps on different threads can share
/// one tank through an `Arc` without two of them passing the same check.
#[derive(Debug)]
pub struct FuelTank {
  capacity: Volume,
  level: Mutex<Volume>,
}

impl FuelTank {
  /// Creates an empty tank.
  pub fn new(capacity: Volume) -> Result<Self, Error> {
    let liters = capacity.as_liters();

    if !(liters.is_finite() && liters > 0.0) {
      return Err(Error::InvalidCapacity(liters))
    }

    Ok(Self { capacity, level: Mutex::new(Volume::from_liters(0.0)) })
  }

  /// Currently stored volume.
  pub fn volume(&self) -> Volume {
    *self.lock()
  }

  // The guarded value is a single number that is never half-written, so a
  // poisoned lock still holds a valid level.
  fn lock(&self) -> MutexGuard<'_, Volume> {
    self.level.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

fn is_amount(amount: Volume) -> bool {
  let liters = amount.as_liters();
  liters.is_finite() && liters >= 0.0
}

impl Tank for FuelTank {
  fn capacity(&self) -> Volume {
    self.capacity
  }

  fn level(&self) -> Level {
    Level::new(self.volume(), self.capacity)
  }

  fn draw(&self, amount: Volume) -> bool {
    if !is_amount(amount) {
      return false
    }

    let mut level = self.lock();

    if amount > *level {
      return false
    }

    *level = *level - amount;

    true
  }

  fn fill(&self, amount: Volume) -> bool {
    if !is_amount(amount) {
      return false
    }

    let mut level = self.lock();

    if amount > self.capacity - *level {
      return false
    }

    // `capacity - level` is rounded, the sum may land one ulp past capacity.
    let filled = *level + amount;
    *level = if filled > self.capacity { self.capacity } else { filled };

    true
  }
}
