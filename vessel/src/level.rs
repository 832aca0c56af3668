use measurements::Volume;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
  pub(crate) volume: Volume,
  pub(crate) percentage: f64,
}

impl Level {
  pub(crate) fn new(volume: Volume, capacity: Volume) -> Self {
    Self { volume, percentage: volume / capacity }
  }

  pub fn volume(&self) -> Volume {
    self.volume
  }

  /// Fraction of the capacity in use, `0.0..=1.0`.
  pub fn percentage(&self) -> f64 {
    self.percentage
  }
}

impl From<Level> for f64 {
  fn from(level: Level) -> Self {
    level.percentage
  }
}

impl From<Level> for Volume {
  fn from(level: Level) -> Self {
    level.volume
  }
}
