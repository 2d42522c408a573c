//! Generic "unified sensor" view of a DHT driver.
//!
//! Polling frameworks that treat every sensor alike want two things from
//! it: a timestamped event carrying one value, and a description of what the
//! sensor can measure. [`DhtUnified`] exposes both for the temperature and
//! the humidity half of a DHT.

use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};

use crate::clock::Clock;
use crate::dht::Dht;
use crate::error::DhtError;
use crate::units::Scale;
use crate::variant::Range;

/// Version reported in every [`SensorInfo`].
pub const SENSOR_VERSION: i32 = 1;

/// Identifier used when the caller does not assign one.
pub const UNASSIGNED_ID: i32 = -1;

/// What a logical sensor measures.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorKind {
    /// Degrees Celsius.
    AmbientTemperature,
    /// Percent.
    RelativeHumidity,
}

/// One measurement.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Event {
    /// ID of the logical sensor that produced the value.
    pub sensor_id: i32,
    /// What `value` measures.
    pub kind: SensorKind,
    /// Driver clock when the read was requested, in milliseconds.
    pub timestamp_ms: u32,
    /// `NaN` if the sensor could not be read.
    pub value: f32,
}

/// Static description of one logical sensor.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensorInfo {
    /// Model name, e.g. `"DHT22"`.
    pub name: &'static str,
    /// Always [`SENSOR_VERSION`].
    pub version: i32,
    /// ID assigned to this logical sensor.
    pub sensor_id: i32,
    /// What the sensor measures.
    pub kind: SensorKind,
    /// Highest value the sensor reports.
    pub max_value: f32,
    /// Lowest value the sensor reports.
    pub min_value: f32,
    /// Smallest step between two distinct values.
    pub resolution: f32,
    /// Minimum time between two samples, in microseconds.
    pub min_delay_us: u32,
}

/// A [`Dht`] split into a temperature sensor and a humidity sensor.
pub struct DhtUnified<PIN, DELAY, CLOCK> {
    dht: Dht<PIN, DELAY, CLOCK>,
    temperature_id: i32,
    humidity_id: i32,
}

impl<PIN, DELAY, CLOCK, E> DhtUnified<PIN, DELAY, CLOCK>
where
    PIN: InputPin<Error = E> + OutputPin<Error = E>,
    DELAY: DelayNs,
    CLOCK: Clock,
{
    /// Wraps `dht` with both sensor IDs left unassigned.
    pub fn new(dht: Dht<PIN, DELAY, CLOCK>) -> Self {
        Self::with_ids(dht, UNASSIGNED_ID, UNASSIGNED_ID)
    }

    /// Wraps `dht`, tagging its temperature and humidity events with the given IDs.
    pub fn with_ids(dht: Dht<PIN, DELAY, CLOCK>, temperature_id: i32, humidity_id: i32) -> Self {
        DhtUnified {
            dht,
            temperature_id,
            humidity_id,
        }
    }

    /// Releases the data line and resets the throttle. See [`Dht::begin`].
    pub fn begin(&mut self) -> Result<(), DhtError<E>> {
        self.dht.begin()
    }

    /// Reads the temperature in degrees Celsius.
    pub fn temperature_event(&mut self) -> Event {
        let timestamp_ms = self.dht.now_ms();
        Event {
            sensor_id: self.temperature_id,
            kind: SensorKind::AmbientTemperature,
            timestamp_ms,
            value: self.dht.read_temperature(Scale::Celsius),
        }
    }

    /// Reads the relative humidity in percent.
    pub fn humidity_event(&mut self) -> Event {
        let timestamp_ms = self.dht.now_ms();
        Event {
            sensor_id: self.humidity_id,
            kind: SensorKind::RelativeHumidity,
            timestamp_ms,
            value: self.dht.read_humidity(),
        }
    }

    /// Describes the temperature half of the sensor.
    pub fn temperature_sensor(&self) -> SensorInfo {
        let range = self.dht.variant().temperature_range();
        self.describe(self.temperature_id, SensorKind::AmbientTemperature, range)
    }

    /// Describes the humidity half of the sensor.
    pub fn humidity_sensor(&self) -> SensorInfo {
        let range = self.dht.variant().humidity_range();
        self.describe(self.humidity_id, SensorKind::RelativeHumidity, range)
    }

    /// The wrapped driver, for direct reads.
    pub fn dht_mut(&mut self) -> &mut Dht<PIN, DELAY, CLOCK> {
        &mut self.dht
    }

    /// Unwraps the driver.
    pub fn into_inner(self) -> Dht<PIN, DELAY, CLOCK> {
        self.dht
    }

    fn describe(&self, sensor_id: i32, kind: SensorKind, range: Range) -> SensorInfo {
        let variant = self.dht.variant();
        SensorInfo {
            name: variant.name(),
            version: SENSOR_VERSION,
            sensor_id,
            kind,
            max_value: range.max,
            min_value: range.min,
            resolution: range.resolution,
            min_delay_us: variant.min_delay_us(),
        }
    }
}
