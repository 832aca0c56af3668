use measurements::Volume;

use crate::level::Level;

/// A bounded fuel store shared by any number of pumps.
///
/// `draw` and `fill` are all-or-nothing: `false` means nothing was moved.
pub trait Tank {
  fn capacity(&self) -> Volume;
  fn level(&self) -> Level;
  fn draw(&self, amount: Volume) -> bool;
  fn fill(&self, amount: Volume) -> bool;
}
