//! Minimal bring-up example.
#![allow(unused)]
use embedded_hal_async::{
  delay::DelayNs,
  i2c::{I2c, SevenBitAddress},
};
use paj7620u2::{Config, Paj7620u2};

#[allow(dead_code)]
async fn main_async<I2C, D, E>(i2c: I2C, delay: D) -> Result<(), paj7620u2::Error<E>>
where
  I2C: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
{
  // Slow mode trades latency for the compound wave gestures.
  let config = Config::default().with_high_rate(false);

  let mut sensor = Paj7620u2::new(i2c, delay, config);
  sensor.initialize().await?;
  Ok(())
}

fn main() {}
