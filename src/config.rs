use std::env;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
  #[error("invalid value '{value}' for {key}")]
  Invalid { key: &'static str, value: String },
  #[error("pump {pump} does not exist, the station has {pumps} pumps")]
  NoSuchPump { pump: usize, pumps: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  pub capacity: f64,
  pub initial_fill: f64,
  pub pumps: usize,
  pub pump: usize,
  pub pump_rate: f64,
  pub price: f64,
  pub pace: f64,
  pub json: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      capacity: 1000.0,
      initial_fill: 800.0,
      pumps: 8,
      pump: 1,
      pump_rate: 0.3,
      price: 10.0,
      pace: 0.0,
      json: false,
    }
  }
}

impl Config {
  pub fn from_env() -> Result<Self, Error> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
  where
    F: Fn(&str) -> Option<String>,
  {
    let default = Self::default();

    let config = Self {
      capacity: parse(&lookup, "GAS_STATION_CAPACITY", default.capacity)?,
      initial_fill: non_negative(&lookup, "GAS_STATION_INITIAL_FILL", default.initial_fill)?,
      pumps: parse(&lookup, "GAS_STATION_PUMPS", default.pumps)?,
      pump: parse(&lookup, "GAS_STATION_PUMP", default.pump)?,
      pump_rate: parse(&lookup, "GAS_STATION_PUMP_RATE", default.pump_rate)?,
      price: non_negative(&lookup, "GAS_STATION_PRICE", default.price)?,
      pace: non_negative(&lookup, "GAS_STATION_PACE", default.pace)?,
      json: lookup("GAS_STATION_JSON").is_some(),
    };

    if config.pump >= config.pumps {
      return Err(Error::NoSuchPump { pump: config.pump, pumps: config.pumps })
    }

    Ok(config)
  }
}

fn parse<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, Error>
where
  F: Fn(&str) -> Option<String>,
  T: FromStr,
{
  match lookup(key) {
    Some(value) => value.trim().parse().map_err(|_| Error::Invalid { key, value }),
    None => Ok(default),
  }
}

fn non_negative<F>(lookup: &F, key: &'static str, default: f64) -> Result<f64, Error>
where
  F: Fn(&str) -> Option<String>,
{
  let number = parse(lookup, key, default)?;

  if number.is_finite() && number >= 0.0 {
    Ok(number)
  } else {
    Err(Error::Invalid { key, value: number.to_string() })
  }
}
