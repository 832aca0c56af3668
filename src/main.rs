use std::io::{self, Write};
use std::process;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::{error, info, warn};
use vessel::{FuelTank, Pump, Tank, Volume};

mod config;
mod display;

use self::config::Config;

#[derive(Debug, Clone, Copy)]
enum Billing {
  Whole,
  Exact,
}

struct Customer {
  car: &'static str,
  arrival: &'static str,
  cycles: usize,
  billing: Billing,
}

const CUSTOMERS: [Customer; 2] = [
  Customer {
    car: "Fiat Punto",
    arrival: "Here comes first customer, a Fiat Punto, red...",
    cycles: 60,
    billing: Billing::Whole,
  },
  Customer {
    car: "Opel Corsa",
    arrival: "\nHere comes the second customer, a Opel Corsa, in black.",
    cycles: 80,
    billing: Billing::Exact,
  },
];

// The progress bar is drawn with `print!`, so it only shows up once flushed.
fn flush() {
  if let Err(err) = io::stdout().flush() {
    warn!("Failed to flush stdout: {}", err);
  }
}

/// Sleeps for `millis` scaled by the configured pace.
fn pause(config: &Config, millis: u64) {
  if config.pace > 0.0 {
    thread::sleep(Duration::from_millis(millis).mul_f64(config.pace));
  }
}

fn serve(config: &Config, pump: &mut Pump, customer: &Customer) {
  println!("{}", customer.arrival);
  pause(config, 2500);
  println!("Lining up along the gas pump, aaaaaaaaand ...");
  pause(config, 2000);

  let mut total = Volume::from_liters(0.0);

  print!("[");
  flush();
  for cycle in 0..customer.cycles {
    if display::is_segment(cycle, customer.cycles) {
      print!("#");
      flush();
    }

    let fuel = pump.pump_fuel();
    if fuel.as_liters() == 0.0 {
      println!("No more fuel in the gas tank!");
    }
    total = total + fuel;

    pause(config, 100);
  }
  print!("]\n\n");
  pause(config, 1000);

  let liters = total.as_liters();
  let price = match customer.billing {
    Billing::Whole => display::price_whole(pump.turnover(config.price)),
    Billing::Exact => display::price_exact(liters * config.price),
  };

  info!("Pump dispensed {:.1} l to {}.", liters, customer.car);
  println!("{}", display::receipt(customer.car, liters, &price));
}

fn open(config: &Config) -> Result<(Arc<FuelTank>, Vec<Pump>), vessel::Error> {
  println!("Installing gas tank ... ");
  pause(config, 2000);
  let tank = Arc::new(FuelTank::new(Volume::from_liters(config.capacity))?);
  println!("Gas tank now installed.\n");

  println!("Installing {} gas pumps ... ", config.pumps);
  pause(config, 1500);
  let pumps = (0..config.pumps)
    .map(|_| Pump::with_rate(tank.clone(), Volume::from_liters(config.pump_rate)))
    .collect::<Result<Vec<_>, _>>()?;
  println!("{} pumps now installed.\n", config.pumps);

  Ok((tank, pumps))
}

/// Orders the initial delivery. Returns `false`, with the tank untouched, if
/// it does not fit.
fn deliver(config: &Config, tank: &FuelTank) -> bool {
  println!("Fuel delivery has been ordered.");
  pause(config, 5000);
  println!("Fuel truck has arrived! Filling tank ...");
  pause(config, 2000);

  if !tank.fill(Volume::from_liters(config.initial_fill)) {
    warn!("Delivery of {} l exceeds the tank's free capacity.", config.initial_fill);
    println!("Failed to fill the gas tank with {} liters of fuel...", config.initial_fill);
    return false
  }

  println!("Filled the gas tank with {} liters of fuel.", config.initial_fill);
  true
}

fn main() {
  env_logger::init();

  let config = match Config::from_env() {
    Ok(config) => config,
    Err(err) => {
      error!("Invalid configuration: {}", err);
      process::exit(1);
    },
  };

  pause(&config, 1000);

  let (tank, mut pumps) = match open(&config) {
    Ok(station) => station,
    Err(err) => {
      error!("Failed to build the gas station: {}", err);
      process::exit(1);
    },
  };

  if !deliver(&config, &tank) {
    println!("\nClosing down, and going out of business.");
    return
  }

  println!("\nGas station ready for business ... !");
  pause(&config, 3000);

  let pump = &mut pumps[config.pump];
  for customer in &CUSTOMERS {
    serve(&config, pump, customer);
  }

  let fuel_lost = config.initial_fill - tank.volume().as_liters();
  let revenue = pump.turnover(config.price);

  println!("\n{}", display::status(fuel_lost, revenue));

  if config.json {
    println!("{}", display::status_json(fuel_lost, tank.level(), revenue));
  }
}
