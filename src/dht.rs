use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};

use crate::cache::ReadingCache;
use crate::clock::Clock;
use crate::config::Config;
use crate::decoder::Decoder;
use crate::error::DhtError;
use crate::heat_index::heat_index;
use crate::reading::Reading;
use crate::sample::RawSample;
use crate::units::Scale;
use crate::variant::Variant;

/// Driver for one DHT11, DHT21 or DHT22 sensor.
///
/// Reads go through a throttle: the sensor is only woken up once per
/// [`Config::min_interval_ms`], and reads in between are answered from the
/// last transaction. Temperature and humidity queries return `NaN` when the
/// last transaction failed; poll again after the interval to retry.
pub struct Dht<PIN, DELAY, CLOCK> {
    decoder: Decoder<PIN, DELAY, CLOCK>,
    cache: ReadingCache,
    variant: Variant,
}

impl<PIN, DELAY, CLOCK, E> Dht<PIN, DELAY, CLOCK>
where
    PIN: InputPin<Error = E> + OutputPin<Error = E>,
    DELAY: DelayNs,
    CLOCK: Clock,
{
    /// Creates a new driver with the default timings.
    ///
    /// # Arguments
    ///
    /// * `pin` - The GPIO pin connected to the data line, configured open-drain.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    /// * `clock` - Free-running millisecond/microsecond time source.
    /// * `variant` - Which sensor model is attached.
    pub fn new(pin: PIN, delay: DELAY, clock: CLOCK, variant: Variant) -> Self {
        Self::with_config(pin, delay, clock, variant, Config::default())
    }

    /// Creates a new driver with custom timings.
    pub fn with_config(
        pin: PIN,
        delay: DELAY,
        clock: CLOCK,
        variant: Variant,
        config: Config,
    ) -> Self {
        Dht {
            decoder: Decoder::new(pin, delay, clock, config),
            cache: ReadingCache::new(config.min_interval_ms),
            variant,
        }
    }

    /// Releases the data line and resets the throttle.
    ///
    /// Call once before the first read so the pull-up has the line high
    /// when the first request goes out.
    pub fn begin(&mut self) -> Result<(), DhtError<E>> {
        self.decoder.release_line()?;
        self.cache.reset();
        Ok(())
    }

    /// Returns the current reading, talking to the sensor only if the
    /// cached one is older than the minimum interval.
    ///
    /// # Returns
    ///
    /// * `Some(Reading)` if the most recent transaction succeeded.
    /// * `None` if it failed.
    pub fn read(&mut self) -> Option<Reading> {
        let variant = self.variant;
        self.sample().map(|sample| Reading::decode(variant, &sample))
    }

    /// Temperature in `scale`, or `NaN` if the sensor could not be read.
    pub fn read_temperature(&mut self, scale: Scale) -> f32 {
        self.read().map_or(f32::NAN, |reading| reading.temperature_in(scale))
    }

    /// Relative humidity in percent, or `NaN` if the sensor could not be read.
    pub fn read_humidity(&mut self) -> f32 {
        self.read().map_or(f32::NAN, |reading| reading.relative_humidity)
    }

    /// Heat index for `temperature` (in `scale`) and `humidity` (percent).
    ///
    /// Pure computation; it does not touch the sensor.
    pub fn compute_heat_index(temperature: f32, humidity: f32, scale: Scale) -> f32 {
        heat_index(temperature, humidity, scale)
    }

    /// The last raw sample, if the last transaction succeeded. Never
    /// triggers a transaction.
    pub fn raw(&self) -> Option<RawSample> {
        self.cache.sample()
    }

    /// The sensor model this driver decodes for.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Current time of the driver's clock, in milliseconds.
    pub fn now_ms(&mut self) -> u32 {
        self.decoder.now_ms()
    }

    /// Gives back the pin, delay and clock.
    pub fn release(self) -> (PIN, DELAY, CLOCK) {
        self.decoder.release()
    }

    fn sample(&mut self) -> Option<RawSample> {
        let now_ms = self.decoder.now_ms();
        let decoder = &mut self.decoder;
        self.cache.get_or_acquire(now_ms, || decoder.acquire())
    }
}
