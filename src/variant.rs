/// The supported members of the DHT sensor family.
///
/// The variant is fixed for the lifetime of a driver and selects both the
/// payload encoding and the datasheet limits reported by [`crate::unified`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// DHT11: whole-unit integer encoding, 0–50 °C.
    Dht11,
    /// DHT21, also sold as AM2301: tenths fixed-point encoding.
    Dht21,
    /// DHT22, also sold as AM2302: tenths fixed-point encoding.
    Dht22,
}

/// Datasheet limits of one measured quantity.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    /// Lowest value the sensor reports.
    pub min: f32,
    /// Highest value the sensor reports.
    pub max: f32,
    /// Smallest step between two distinct values.
    pub resolution: f32,
}

impl Range {
    const fn new(min: f32, max: f32, resolution: f32) -> Self {
        Range {
            min,
            max,
            resolution,
        }
    }
}

impl Variant {
    /// AM2301 is sold under its own name but speaks the DHT21 protocol.
    pub const AM2301: Variant = Variant::Dht21;

    /// Model name as printed on the part.
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Dht11 => "DHT11",
            Variant::Dht21 => "DHT21",
            Variant::Dht22 => "DHT22",
        }
    }

    /// Minimum time between two samples, in microseconds.
    pub const fn min_delay_us(self) -> u32 {
        match self {
            Variant::Dht11 => 1_000_000,
            Variant::Dht21 | Variant::Dht22 => 2_000_000,
        }
    }

    /// Temperature limits in degrees Celsius.
    pub const fn temperature_range(self) -> Range {
        match self {
            Variant::Dht11 => Range::new(0.0, 50.0, 2.0),
            Variant::Dht21 => Range::new(-40.0, 80.0, 0.1),
            Variant::Dht22 => Range::new(-40.0, 125.0, 0.1),
        }
    }

    /// Relative humidity limits in percent.
    pub const fn humidity_range(self) -> Range {
        match self {
            Variant::Dht11 => Range::new(20.0, 80.0, 5.0),
            Variant::Dht21 | Variant::Dht22 => Range::new(0.0, 100.0, 0.1),
        }
    }
}
