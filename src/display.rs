use serde_json::{json, Value};
use vessel::{Level, Volume};

const SEGMENTS: usize = 10;

/// Whether the progress bar gets a `#` at this pump cycle.
pub fn is_segment(cycle: usize, cycles: usize) -> bool {
  cycle % (cycles / SEGMENTS).max(1) == 0
}

pub fn receipt(car: &str, liters: f64, price: &str) -> String {
  format!("and off goes the {}, filled with {:.1} liters of fuel for a price of {}", car, liters, price)
}

/// Whole kroner, the way the register prints a truncated turnover.
pub fn price_whole(turnover: i64) -> String {
  format!("{},00 DKK", turnover)
}

pub fn price_exact(turnover: f64) -> String {
  format!("{:.2} DKK", turnover)
}

pub fn status(fuel_lost: f64, revenue: i64) -> String {
  format!("So far the gas tank has lost {:.1} liters of fuel, with a revenue of {} DKK", fuel_lost, revenue)
}

pub fn status_json(fuel_lost: f64, level: Level, revenue: i64) -> Value {
  json!({
    "fuel_lost": fuel_lost,
    "volume": Volume::from(level).as_liters(),
    "percentage": f64::from(level) * 100.0,
    "revenue": revenue,
  })
}
