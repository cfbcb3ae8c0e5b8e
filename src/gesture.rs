use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::reg::Reg;
use crate::{Error, Paj7620u2};

impl<I, E, D> Paj7620u2<I, D>
where
  I: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
{
  /// Poll the sensor once and classify what it observed since the last
  /// poll.
  ///
  /// Reading a detection-flag register clears it on the chip, so the read
  /// order below is part of the wire contract and must not be reordered.
  /// A quick wave is flagged in the high byte and short-circuits the rest
  /// of the procedure.
  ///
  /// In slow mode the call suspends for the entry window between the two
  /// flag reads so that both halves of a compound gesture can accumulate;
  /// wave and forward/backward detections additionally suspend for the
  /// quit window (one fifth of it in fast mode) so the tail of the motion
  /// does not re-trigger. Callers that need responsiveness should poll
  /// from a dedicated task and accept that latency.
  ///
  /// Requires a completed [`Paj7620u2::initialize`]; polling an
  /// unconfigured chip yields unspecified flag values.
  pub async fn gesture(&mut self) -> Result<Gesture, Error<E>> {
    let flags = (self.read_reg(Reg::DetectionFlag1).await? as u16) << 8;
    if flags == Gesture::Wave.bits() {
      debug!("wave detected on first probe");
      self.delay.delay_ms(self.config.quit_time_ms).await;
      return Ok(Gesture::Wave);
    }

    // The low byte is the primary classification source.
    let mut flags = self.read_reg(Reg::DetectionFlag0).await? as u16;
    if !self.config.high_rate {
      self.delay.delay_ms(self.config.entry_time_ms).await;
      flags |= self.read_reg(Reg::DetectionFlag0).await? as u16;
    }

    match Gesture::from_bits(flags) {
      Some(
        gesture @ (Gesture::Right
        | Gesture::Left
        | Gesture::Up
        | Gesture::Down
        | Gesture::Clockwise
        | Gesture::AntiClockwise),
      ) => {
        debug!("{} detected", gesture);
        Ok(gesture)
      }
      Some(gesture @ (Gesture::Forward | Gesture::Backward)) => {
        let settle = if self.config.high_rate {
          self.config.quit_time_ms / 5
        } else {
          self.config.quit_time_ms
        };
        self.delay.delay_ms(settle).await;
        debug!("{} detected", gesture);
        Ok(gesture)
      }
      _ => self.reclassify(flags).await,
    }
  }

  /// No primitive matched. A wave may still have landed on the high byte
  /// since the first probe; failing that, the merged low-byte flags may
  /// spell one of the compound gestures.
  async fn reclassify(&mut self, flags: u16) -> Result<Gesture, Error<E>> {
    if self.read_reg(Reg::DetectionFlag1).await? != 0 {
      debug!("wave detected on re-probe");
      return Ok(Gesture::Wave);
    }

    match Gesture::from_bits(flags) {
      Some(
        gesture @ (Gesture::WaveSlowlyLeftRight
        | Gesture::WaveSlowlyUpDown
        | Gesture::WaveSlowlyForwardBackward
        | Gesture::WaveSlowlyDisorder),
      ) => {
        debug!("{} detected", gesture);
        Ok(gesture)
      }
      _ => Ok(Gesture::None),
    }
  }
}

/// A decoded gesture event.
///
/// Discriminants mirror the detection-flag layout: the low byte carries the
/// eight primitive direction flags, the high byte carries wave and
/// disorderly-wave, and the three slow compound gestures are the sanctioned
/// OR combinations of their primitive bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum Gesture {
  /// Nothing observed since the last poll.
  None = 0b0000_0000_0000_0000,
  /// Moved from left to right.
  Right = 0b0000_0000_0000_0001,
  /// Moved from right to left.
  Left = 0b0000_0000_0000_0010,
  /// Moved from down to up.
  Up = 0b0000_0000_0000_0100,
  /// Moved from up to down.
  Down = 0b0000_0000_0000_1000,
  /// Started far, moved toward the sensor.
  Forward = 0b0000_0000_0001_0000,
  /// Started near, moved away from the sensor.
  Backward = 0b0000_0000_0010_0000,
  Clockwise = 0b0000_0000_0100_0000,
  AntiClockwise = 0b0000_0000_1000_0000,
  /// Quick wave.
  Wave = 0b0000_0001_0000_0000,
  /// Slow, disorderly waving.
  WaveSlowlyDisorder = 0b0000_0010_0000_0000,
  /// Slow left-and-right wave, merged across two flag reads.
  WaveSlowlyLeftRight = 0b0000_0000_0000_0011,
  /// Slow up-and-down wave, merged across two flag reads.
  WaveSlowlyUpDown = 0b0000_0000_0000_1100,
  /// Slow forward-and-backward wave, merged across two flag reads.
  WaveSlowlyForwardBackward = 0b0000_0000_0011_0000,
}

impl Gesture {
  /// Raw detection-flag pattern of this gesture.
  pub const fn bits(self) -> u16 {
    self as u16
  }

  /// Decode an exact flag pattern.
  ///
  /// Only the fourteen enumerated patterns decode; the vendor decode table
  /// recognizes no partial or subset matches, so any other combination of
  /// flag bits yields no gesture.
  pub const fn from_bits(bits: u16) -> Option<Self> {
    match bits {
      0b0000_0000_0000_0000 => Some(Self::None),
      0b0000_0000_0000_0001 => Some(Self::Right),
      0b0000_0000_0000_0010 => Some(Self::Left),
      0b0000_0000_0000_0100 => Some(Self::Up),
      0b0000_0000_0000_1000 => Some(Self::Down),
      0b0000_0000_0001_0000 => Some(Self::Forward),
      0b0000_0000_0010_0000 => Some(Self::Backward),
      0b0000_0000_0100_0000 => Some(Self::Clockwise),
      0b0000_0000_1000_0000 => Some(Self::AntiClockwise),
      0b0000_0001_0000_0000 => Some(Self::Wave),
      0b0000_0010_0000_0000 => Some(Self::WaveSlowlyDisorder),
      0b0000_0000_0000_0011 => Some(Self::WaveSlowlyLeftRight),
      0b0000_0000_0000_1100 => Some(Self::WaveSlowlyUpDown),
      0b0000_0000_0011_0000 => Some(Self::WaveSlowlyForwardBackward),
      _ => None,
    }
  }

  /// Human-readable description of the gesture.
  pub const fn description(self) -> &'static str {
    match self {
      Self::None => "",
      Self::Right => "move from left to right",
      Self::Left => "move from right to left",
      Self::Up => "move from down to up",
      Self::Down => "move from up to down",
      Self::Forward => "move toward the sensor",
      Self::Backward => "move away from the sensor",
      Self::Clockwise => "circle clockwise",
      Self::AntiClockwise => "circle anti-clockwise",
      Self::Wave => "wave quickly",
      Self::WaveSlowlyDisorder => "wave slowly and randomly",
      Self::WaveSlowlyLeftRight => "slowly move left and right",
      Self::WaveSlowlyUpDown => "slowly move up and down",
      Self::WaveSlowlyForwardBackward => "slowly move forward and backward",
    }
  }

  /// Description for a raw flag pattern; empty for patterns outside the
  /// decode table.
  pub const fn description_of(bits: u16) -> &'static str {
    match Self::from_bits(bits) {
      Some(gesture) => gesture.description(),
      None => "",
    }
  }
}
