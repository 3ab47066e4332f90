// BME280 driver error types

/// Errors surfaced to the caller.  Transport failures are wrapped and
/// propagated immediately, never retried here: the caller owns retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// I2C bus error from the underlying transport
    I2c(E),
    /// compensation was requested before the calibration block was loaded
    Uncalibrated,
    /// chip id register returned something other than a BME280
    UnexpectedChipId(u8),
}
