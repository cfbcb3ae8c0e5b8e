#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Async, `no_std` driver for the PixArt PAJ7620U2 gesture recognition
//! sensor.
//!
//! The PAJ7620U2 combines an image sensor, IR LED, and a gesture engine
//! behind a small paged register map on I2C. Once loaded with the vendor
//! configuration it recognizes nine hand gestures in hardware (left, right,
//! up, down, forward, backward, clockwise, anti-clockwise, wave); in slow
//! mode this crate additionally merges successive detections into the four
//! compound gestures (wave slowly left-right, up-down, forward-backward,
//! and disorderly). This crate exposes a strongly typed API on top of the
//! raw register map, with helpers for:
//!
//! - Applying the reference configuration sequence recommended by PixArt
//! - Polling and classifying gestures with the documented fast/slow timing
//!   windows
//! - Masking individual gestures and suspending or disabling the engine
//! - Using `embedded-hal-async` 1.0 traits so the driver works across MCU
//!   families
//!
//! ```no_run
//! use embedded_hal_async::delay::DelayNs;
//! use embedded_hal_async::i2c::{I2c, SevenBitAddress};
//! use paj7620u2::{Config, Gesture, Paj7620u2};
//!
//! async fn example<I2C, D, E>(i2c: I2C, delay: D) -> Result<(), paj7620u2::Error<E>>
//! where
//!   I2C: I2c<SevenBitAddress, Error = E>,
//!   D: DelayNs,
//! {
//!   let mut sensor = Paj7620u2::new(i2c, delay, Config::default());
//!   sensor.initialize().await?;
//!   loop {
//!     match sensor.gesture().await? {
//!       Gesture::None => continue,
//!       _gesture => break,
//!     }
//!   }
//!   Ok(())
//! }
//! ```

// This mod must go first so the others see its macros.
mod fmt;

mod config;
mod control;
mod gesture;
mod init;
mod reg;

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

pub use config::*;
pub use gesture::Gesture;
pub use init::INIT_SEQUENCE;
pub use reg::I2C_ADDR;

use reg::Reg;

/// Errors that can occur while interacting with the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
  /// I2C bus transaction failed with the underlying driver error.
  I2c(E),
  /// The device reported an unexpected part identifier during bring-up.
  InvalidPartId(u16),
  /// A packed register value could not be converted.
  BufferOverflow,
}

/// High-level driver for the PAJ7620U2 gesture sensor.
///
/// The driver owns the I2C peripheral and a delay source. Create an
/// instance with [`Paj7620u2::new`], provide a [`Config`], and call
/// [`Paj7620u2::initialize`] to load the vendor register sequence before
/// polling [`Paj7620u2::gesture`].
///
/// One instance assumes exclusive ownership of the bus handle it was given;
/// sharing the same physical bus between callers must be serialized
/// upstream.
pub struct Paj7620u2<I, D> {
  i2c: I,
  delay: D,
  config: Config,
}

impl<I, E, D> Paj7620u2<I, D>
where
  I: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
{
  /// Create a new driver instance with the provided peripherals and
  /// configuration.
  ///
  /// Nothing is transmitted to the device until [`Paj7620u2::initialize`]
  /// is called.
  pub fn new(i2c: I, delay: D, config: Config) -> Self {
    Self { i2c, delay, config }
  }

  /// Consume the driver and hand back the bus and delay peripherals.
  pub fn release(self) -> (I, D) {
    (self.i2c, self.delay)
  }

  // Typed helpers
  pub(crate) async fn read_reg(&mut self, reg: Reg) -> Result<u8, Error<E>> {
    let mut buf = [0u8; 1];
    self.i2c.write_read(reg::I2C_ADDR, &[reg.into()], &mut buf).await.map_err(Error::I2c)?;
    Ok(buf[0])
  }

  pub(crate) async fn read_u16(&mut self, reg: Reg) -> Result<u16, Error<E>> {
    let mut buf = [0u8; 2];
    self.i2c.write_read(reg::I2C_ADDR, &[reg.into()], &mut buf).await.map_err(Error::I2c)?;
    Ok(u16::from_le_bytes(buf))
  }

  pub(crate) async fn write_reg(&mut self, reg: Reg, value: u8) -> Result<(), Error<E>> {
    self.write_raw(reg.into(), value).await
  }

  pub(crate) async fn write_raw(&mut self, addr: u8, value: u8) -> Result<(), Error<E>> {
    self.i2c.write(reg::I2C_ADDR, &[addr, value]).await.map_err(Error::I2c)
  }
}
