use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
  #[error("tank capacity must be a positive number of liters, got {0}")]
  InvalidCapacity(f64),
  #[error("pump rate must be a positive number of liters, got {0}")]
  InvalidRate(f64),
}
