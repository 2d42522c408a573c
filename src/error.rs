/// Possible errors from a single DHT transaction.
///
/// Every variant fails only the transaction it occurred in. The driver stays
/// usable and the next poll starts a fresh exchange.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum DhtError<E> {
    /// The sensor never answered the start request with its low pulse.
    NoStartLow,
    /// The sensor pulled the line low but never released it for the high pulse.
    NoStartHigh,
    /// A low or high pulse of a data bit outlasted the pulse timeout.
    BitTimeout,
    /// Checksum did not match the received data.
    ChecksumMismatch,
    /// Error from the GPIO pin (input/output).
    PinError(E),
}

impl<E> From<E> for DhtError<E> {
    fn from(value: E) -> Self {
        Self::PinError(value)
    }
}
