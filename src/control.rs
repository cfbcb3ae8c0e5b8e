use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::reg::{Bank, Reg, CMD_SUSPEND, CMD_WAKEUP, OP_DISABLE, OP_ENABLE};
use crate::{Error, Paj7620u2};

impl<I, E, D> Paj7620u2<I, D>
where
  I: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
{
  /// Route subsequent register addresses to the given bank page.
  pub(crate) async fn select_bank(&mut self, bank: Bank) -> Result<(), Error<E>> {
    self.write_reg(Reg::BankSelect, bank as u8).await
  }

  /// Stop the gesture engine without dropping power.
  ///
  /// The enable register lives in Bank 1; Bank 0 is restored before
  /// returning so flag polling keeps resolving against the right page.
  pub async fn disable(&mut self) -> Result<(), Error<E>> {
    self.set_operation(OP_DISABLE).await
  }

  /// Restart the gesture engine after [`Paj7620u2::disable`].
  pub async fn enable(&mut self) -> Result<(), Error<E>> {
    self.set_operation(OP_ENABLE).await
  }

  async fn set_operation(&mut self, value: u8) -> Result<(), Error<E>> {
    self.select_bank(Bank::Bank1).await?;
    self.write_reg(Reg::OperationEnable, value).await?;
    self.select_bank(Bank::Bank0).await
  }

  /// Issue the I2C suspend command, dropping the chip into its low-power
  /// state until [`Paj7620u2::wake`].
  pub async fn suspend(&mut self) -> Result<(), Error<E>> {
    self.write_reg(Reg::SuspendCmd, CMD_SUSPEND).await
  }

  /// Issue the I2C wake-up command.
  pub async fn wake(&mut self) -> Result<(), Error<E>> {
    self.write_reg(Reg::SuspendCmd, CMD_WAKEUP).await
  }
}
