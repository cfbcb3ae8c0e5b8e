//! Scripted-bus tests: every expectation below is an exact I2C transaction,
//! so a reordered or extra register access fails the test.

use embassy_futures::block_on;
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::i2c::{Mock, Transaction};
use paj7620u2::{Config, DetectionMask, Error, Gesture, Paj7620u2, I2C_ADDR, INIT_SEQUENCE};

const FLAG0: u8 = 0x43;
const FLAG1: u8 = 0x44;

fn flag_read(reg: u8, value: u8) -> Transaction {
  Transaction::write_read(I2C_ADDR, vec![reg], vec![value])
}

fn bring_up() -> Vec<Transaction> {
  let mut tx = vec![
    Transaction::write(I2C_ADDR, vec![0xEF, 0x00]),
    Transaction::write_read(I2C_ADDR, vec![0x00], vec![0x20, 0x76]),
  ];
  tx.extend(INIT_SEQUENCE.iter().map(|&(reg, value)| Transaction::write(I2C_ADDR, vec![reg, value])));
  tx.push(Transaction::write(I2C_ADDR, vec![0xEF, 0x00]));
  tx
}

#[test]
fn initialize_applies_the_vendor_sequence_in_order() {
  let mut i2c = Mock::new(&bring_up());
  let mut sensor = Paj7620u2::new(i2c.clone(), NoopDelay, Config::default());

  block_on(sensor.initialize()).unwrap();
  i2c.done();
}

#[test]
fn initialize_rejects_a_wrong_part_id_before_any_table_write() {
  let mut i2c = Mock::new(&[
    Transaction::write(I2C_ADDR, vec![0xEF, 0x00]),
    Transaction::write_read(I2C_ADDR, vec![0x00], vec![0x10, 0x76]),
  ]);
  let mut sensor = Paj7620u2::new(i2c.clone(), NoopDelay, Config::default());

  let err = block_on(sensor.initialize()).unwrap_err();
  assert_eq!(err, Error::InvalidPartId(0x7610));
  i2c.done();
}

#[test]
fn initialize_propagates_a_bus_failure() {
  let mut i2c = Mock::new(&[
    Transaction::write(I2C_ADDR, vec![0xEF, 0x00]),
    Transaction::write_read(I2C_ADDR, vec![0x00], vec![0x00, 0x00]).with_error(ErrorKind::Other),
  ]);
  let mut sensor = Paj7620u2::new(i2c.clone(), NoopDelay, Config::default());

  assert!(matches!(block_on(sensor.initialize()), Err(Error::I2c(_))));
  i2c.done();
}

#[test]
fn wave_on_the_first_probe_ends_the_poll() {
  // No second read: the high-byte wave flag short-circuits classification.
  let mut i2c = Mock::new(&[flag_read(FLAG1, 0x01)]);
  let mut sensor = Paj7620u2::new(i2c.clone(), NoopDelay, Config::default());

  assert_eq!(block_on(sensor.gesture()).unwrap(), Gesture::Wave);
  i2c.done();
}

#[test]
fn fast_mode_classifies_from_a_single_flag_read() {
  let mut i2c = Mock::new(&[flag_read(FLAG1, 0x00), flag_read(FLAG0, 0x01)]);
  let mut sensor = Paj7620u2::new(i2c.clone(), NoopDelay, Config::default());

  assert_eq!(block_on(sensor.gesture()).unwrap(), Gesture::Right);
  i2c.done();
}

#[test]
fn slow_mode_merges_two_flag_reads() {
  // First read carries the gesture, the post-delay read is empty; the OR
  // still spells Right.
  let mut i2c = Mock::new(&[flag_read(FLAG1, 0x00), flag_read(FLAG0, 0x01), flag_read(FLAG0, 0x00)]);
  let config = Config::default().with_high_rate(false);
  let mut sensor = Paj7620u2::new(i2c.clone(), NoopDelay, config);

  assert_eq!(block_on(sensor.gesture()).unwrap(), Gesture::Right);
  i2c.done();
}

#[test]
fn slow_mode_recognizes_a_compound_wave() {
  // Left then Right across the two reads, wave re-probe stays clear.
  let mut i2c = Mock::new(&[
    flag_read(FLAG1, 0x00),
    flag_read(FLAG0, 0x02),
    flag_read(FLAG0, 0x01),
    flag_read(FLAG1, 0x00),
  ]);
  let config = Config::default().with_high_rate(false);
  let mut sensor = Paj7620u2::new(i2c.clone(), NoopDelay, config);

  assert_eq!(block_on(sensor.gesture()).unwrap(), Gesture::WaveSlowlyLeftRight);
  i2c.done();
}

#[test]
fn forward_settles_before_returning() {
  let mut i2c = Mock::new(&[flag_read(FLAG1, 0x00), flag_read(FLAG0, 0x10)]);
  let mut sensor = Paj7620u2::new(i2c.clone(), NoopDelay, Config::default());

  assert_eq!(block_on(sensor.gesture()).unwrap(), Gesture::Forward);
  i2c.done();
}

#[test]
fn unknown_flags_with_a_clear_reprobe_yield_none() {
  let mut i2c = Mock::new(&[flag_read(FLAG1, 0x00), flag_read(FLAG0, 0x07), flag_read(FLAG1, 0x00)]);
  let mut sensor = Paj7620u2::new(i2c.clone(), NoopDelay, Config::default());

  assert_eq!(block_on(sensor.gesture()).unwrap(), Gesture::None);
  i2c.done();
}

#[test]
fn a_late_wave_is_caught_by_the_reprobe() {
  let mut i2c = Mock::new(&[flag_read(FLAG1, 0x00), flag_read(FLAG0, 0x07), flag_read(FLAG1, 0x01)]);
  let mut sensor = Paj7620u2::new(i2c.clone(), NoopDelay, Config::default());

  assert_eq!(block_on(sensor.gesture()).unwrap(), Gesture::Wave);
  i2c.done();
}

#[test]
fn a_failed_reprobe_surfaces_as_a_bus_error() {
  let mut i2c = Mock::new(&[
    flag_read(FLAG1, 0x00),
    flag_read(FLAG0, 0x07),
    Transaction::write_read(I2C_ADDR, vec![FLAG1], vec![0x00]).with_error(ErrorKind::Other),
  ]);
  let mut sensor = Paj7620u2::new(i2c.clone(), NoopDelay, Config::default());

  assert!(matches!(block_on(sensor.gesture()), Err(Error::I2c(_))));
  i2c.done();
}

#[test]
fn set_high_rate_switches_the_read_pattern() {
  let mut i2c = Mock::new(&[
    // slow poll: three reads
    flag_read(FLAG1, 0x00),
    flag_read(FLAG0, 0x04),
    flag_read(FLAG0, 0x00),
    // fast poll: two reads
    flag_read(FLAG1, 0x00),
    flag_read(FLAG0, 0x08),
  ]);
  let config = Config::default().with_high_rate(false);
  let mut sensor = Paj7620u2::new(i2c.clone(), NoopDelay, config);

  assert_eq!(block_on(sensor.gesture()).unwrap(), Gesture::Up);
  sensor.set_high_rate(true);
  assert_eq!(block_on(sensor.gesture()).unwrap(), Gesture::Down);
  i2c.done();
}

#[test]
fn detection_mask_writes_both_mask_registers() {
  let mut i2c = Mock::new(&[
    Transaction::write(I2C_ADDR, vec![0x41, 0xFF]),
    Transaction::write(I2C_ADDR, vec![0x42, 0x01]),
    Transaction::write(I2C_ADDR, vec![0x41, 0x03]),
    Transaction::write(I2C_ADDR, vec![0x42, 0x00]),
  ]);
  let mut sensor = Paj7620u2::new(i2c.clone(), NoopDelay, Config::default());

  block_on(sensor.set_detection_mask(DetectionMask::all())).unwrap();

  let horizontal = DetectionMask { right: true, left: true, ..DetectionMask::none() };
  block_on(sensor.set_detection_mask(horizontal)).unwrap();
  i2c.done();
}

#[test]
fn enable_and_disable_round_trip_through_bank_1() {
  let mut i2c = Mock::new(&[
    Transaction::write(I2C_ADDR, vec![0xEF, 0x01]),
    Transaction::write(I2C_ADDR, vec![0x72, 0x00]),
    Transaction::write(I2C_ADDR, vec![0xEF, 0x00]),
    Transaction::write(I2C_ADDR, vec![0xEF, 0x01]),
    Transaction::write(I2C_ADDR, vec![0x72, 0x01]),
    Transaction::write(I2C_ADDR, vec![0xEF, 0x00]),
  ]);
  let mut sensor = Paj7620u2::new(i2c.clone(), NoopDelay, Config::default());

  block_on(sensor.disable()).unwrap();
  block_on(sensor.enable()).unwrap();
  i2c.done();
}

#[test]
fn suspend_and_wake_write_the_command_register() {
  let mut i2c = Mock::new(&[
    Transaction::write(I2C_ADDR, vec![0x03, 0x00]),
    Transaction::write(I2C_ADDR, vec![0x03, 0x01]),
  ]);
  let mut sensor = Paj7620u2::new(i2c.clone(), NoopDelay, Config::default());

  block_on(sensor.suspend()).unwrap();
  block_on(sensor.wake()).unwrap();
  i2c.done();
}
