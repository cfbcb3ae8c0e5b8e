use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::reg::Reg;
use crate::{Error, Paj7620u2};

impl<I, E, D> Paj7620u2<I, D>
where
  I: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
{
  /// Switch between fast and slow gesture classification.
  ///
  /// Fast detection reads the flags once and returns immediately, which
  /// covers the nine gestures the chip recognizes on its own. Slow
  /// detection holds the poll open for the entry window and merges a
  /// second flag read, which is what turns two successive detections into
  /// one of the compound wave gestures.
  pub fn set_high_rate(&mut self, high_rate: bool) {
    self.config.high_rate = high_rate;
  }

  /// Choose which gestures the chip raises detection flags for.
  ///
  /// The vendor configuration enables everything; masking a gesture stops
  /// it at the source rather than in the classifier.
  pub async fn set_detection_mask(&mut self, mask: DetectionMask) -> Result<(), Error<E>> {
    let bytes: [u8; 2] = mask.try_into().map_err(|_| Error::BufferOverflow)?;
    self.write_reg(Reg::DetectionMask0, bytes[0]).await?;
    self.write_reg(Reg::DetectionMask1, bytes[1]).await
  }
}

/// Driver configuration.
///
/// The two windows are the debounce delays the classifier sleeps through;
/// the defaults are the vendor-recommended values. See
/// [`Paj7620u2::gesture`] for where each window applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
  /// Fast (`true`) or slow (`false`) classification. Slow mode is the one
  /// that recognizes the compound wave gestures.
  pub high_rate: bool,
  /// How long the slow path waits before its second flag read, in
  /// milliseconds.
  pub entry_time_ms: u32,
  /// Settling window after wave and forward/backward detections, in
  /// milliseconds. The fast path uses a fifth of it for forward/backward.
  pub quit_time_ms: u32,
}

impl Config {
  pub const fn new() -> Self {
    Self { high_rate: true, entry_time_ms: 2000, quit_time_ms: 1000 }
  }

  pub const fn with_high_rate(mut self, high_rate: bool) -> Self {
    self.high_rate = high_rate;
    self
  }

  pub const fn with_entry_time_ms(mut self, entry_time_ms: u32) -> Self {
    self.entry_time_ms = entry_time_ms;
    self
  }

  pub const fn with_quit_time_ms(mut self, quit_time_ms: u32) -> Self {
    self.quit_time_ms = quit_time_ms;
    self
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::new()
  }
}

/// Per-gesture detection enable bits, mirrored over the mask register pair.
///
/// The low byte holds the eight directional gestures, the wave bit sits in
/// the second mask register.
#[derive(Debug, Clone, Copy)]
#[packbits::pack(u16)]
pub struct DetectionMask {
  pub right: bool,
  pub left: bool,
  pub up: bool,
  pub down: bool,
  pub forward: bool,
  pub backward: bool,
  pub clockwise: bool,
  pub anti_clockwise: bool,
  pub wave: bool,
}

impl DetectionMask {
  /// Every gesture enabled, matching the vendor configuration.
  pub const fn all() -> Self {
    Self {
      right: true,
      left: true,
      up: true,
      down: true,
      forward: true,
      backward: true,
      clockwise: true,
      anti_clockwise: true,
      wave: true,
    }
  }

  pub const fn none() -> Self {
    Self {
      right: false,
      left: false,
      up: false,
      down: false,
      forward: false,
      backward: false,
      clockwise: false,
      anti_clockwise: false,
      wave: false,
    }
  }
}

impl Default for DetectionMask {
  fn default() -> Self {
    Self::all()
  }
}
