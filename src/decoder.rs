use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};

use crate::clock::Clock;
use crate::config::Config;
use crate::error::DhtError;
use crate::sample::RawSample;

/// Number of data bits in one transaction.
const FRAME_BITS: usize = 40;

/// Upper bound on polls of a single pulse, whatever the clock says.
const MAX_POLLS: u32 = 100_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Level {
    Low,
    High,
}

/// Drives the DHT single-wire handshake and decodes the 40 bit payload.
///
/// The pin must be wired open-drain with a pull-up: `set_high` releases the
/// line and lets the pull-up (or the sensor) decide its level, `set_low`
/// actively drives it.
///
/// Bits are decided by comparing the poll count of each bit's low sync pulse
/// with the poll count of the following high data pulse. The low pulse is
/// ~50 µs for every bit while the high pulse is ~26 µs for a 0 and ~70 µs
/// for a 1, so the comparison needs no per-platform calibration. It does
/// need an uninterrupted capture, which is why the whole capture runs inside
/// a critical section.
pub struct Decoder<PIN, DELAY, CLOCK> {
    pin: PIN,
    delay: DELAY,
    clock: CLOCK,
    config: Config,
}

impl<PIN, DELAY, CLOCK, E> Decoder<PIN, DELAY, CLOCK>
where
    PIN: InputPin<Error = E> + OutputPin<Error = E>,
    DELAY: DelayNs,
    CLOCK: Clock,
{
    /// Creates a new decoder.
    ///
    /// # Arguments
    ///
    /// * `pin` - The GPIO pin connected to the data line. Must support both input and output.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    /// * `clock` - Free-running time source used to bound every pulse.
    /// * `config` - Timing parameters of the exchange.
    pub fn new(pin: PIN, delay: DELAY, clock: CLOCK, config: Config) -> Self {
        Decoder {
            pin,
            delay,
            clock,
            config,
        }
    }

    /// Releases the line so the pull-up holds it high between transactions.
    pub fn release_line(&mut self) -> Result<(), E> {
        self.pin.set_high()
    }

    /// Current time of the decoder's clock, in milliseconds.
    pub fn now_ms(&mut self) -> u32 {
        self.clock.now_ms()
    }

    /// Gives back the pin, delay and clock.
    pub fn release(self) -> (PIN, DELAY, CLOCK) {
        (self.pin, self.delay, self.clock)
    }

    /// Runs one complete transaction with the sensor.
    ///
    /// This sends the start request, waits for the sensor's response,
    /// captures 40 bits with interrupts masked and validates the checksum.
    /// A failure only fails this transaction; the next call starts over.
    ///
    /// # Returns
    ///
    /// * `Ok(RawSample)` if every pulse arrived in time and the checksum is valid.
    /// * `Err(DhtError)` naming the step that failed.
    pub fn acquire(&mut self) -> Result<RawSample, DhtError<E>> {
        self.request()?;

        // Interrupts stay masked until the closure returns, on every path.
        let sample = critical_section::with(|_cs| self.capture())?;

        #[cfg(feature = "defmt")]
        defmt::debug!("DHT received {=[u8]:#04x}", &sample.bytes()[..]);

        if !sample.is_valid() {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "DHT checksum mismatch: expected {=u8:#04x}, received {=u8:#04x}",
                crate::sample::checksum(&sample.data()),
                sample.checksum()
            );
            return Err(DhtError::ChecksumMismatch);
        }

        Ok(sample)
    }

    /// Lets the line settle high, then pulls it low to request a sample.
    fn request(&mut self) -> Result<(), E> {
        self.pin.set_high()?;
        self.delay.delay_ms(self.config.settle_ms);

        self.pin.set_low()?;
        self.delay.delay_ms(self.config.start_low_ms);
        Ok(())
    }

    /// Ends the request and records the sensor's answer.
    ///
    /// Must run with interrupts masked.
    fn capture(&mut self) -> Result<RawSample, DhtError<E>> {
        // End the start signal, then give the sensor a moment to pull low.
        self.pin.set_high()?;
        self.delay.delay_us(self.config.release_us);
        self.delay.delay_us(self.config.response_delay_us);

        // Response: ~80us low followed by ~80us high
        if self.expect_pulse(Level::Low)?.is_none() {
            #[cfg(feature = "defmt")]
            defmt::warn!("DHT timeout waiting for start signal low pulse");
            return Err(DhtError::NoStartLow);
        }
        if self.expect_pulse(Level::High)?.is_none() {
            #[cfg(feature = "defmt")]
            defmt::warn!("DHT timeout waiting for start signal high pulse");
            return Err(DhtError::NoStartHigh);
        }

        let mut bytes = [0u8; 5];
        for bit in 0..FRAME_BITS {
            let Some(low_cycles) = self.expect_pulse(Level::Low)? else {
                #[cfg(feature = "defmt")]
                defmt::warn!("DHT timeout waiting for low pulse of bit {}", bit);
                return Err(DhtError::BitTimeout);
            };
            let Some(high_cycles) = self.expect_pulse(Level::High)? else {
                #[cfg(feature = "defmt")]
                defmt::warn!("DHT timeout waiting for high pulse of bit {}", bit);
                return Err(DhtError::BitTimeout);
            };

            let byte = &mut bytes[bit / 8];
            *byte <<= 1;
            if high_cycles > low_cycles {
                *byte |= 1;
            }
        }

        Ok(RawSample::new(bytes))
    }

    /// Counts polls while the line stays at `level`.
    ///
    /// Returns `None` if the line was not at `level` on the first poll, or
    /// stayed there for longer than the pulse timeout or `MAX_POLLS` polls.
    fn expect_pulse(&mut self, level: Level) -> Result<Option<u32>, E> {
        let start = self.clock.now_us();
        let mut count: u32 = 0;

        while self.is_at(level)? {
            count += 1;
            if count >= MAX_POLLS
                || self.clock.now_us().wrapping_sub(start) >= self.config.pulse_timeout_us
            {
                return Ok(None);
            }
        }

        Ok((count > 0).then_some(count))
    }

    fn is_at(&mut self, level: Level) -> Result<bool, E> {
        match level {
            Level::Low => self.pin.is_low(),
            Level::High => self.pin.is_high(),
        }
    }
}
