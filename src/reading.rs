use crate::heat_index::heat_index;
use crate::sample::RawSample;
use crate::units::Scale;
use crate::variant::Variant;

/// Reading decoded from a DHT sample.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub relative_humidity: f32,
}

impl Reading {
    /// Decodes `sample` with the encoding of `variant`.
    ///
    /// The checksum is not inspected here; the decoder only ever hands out
    /// samples that passed it.
    pub fn decode(variant: Variant, sample: &RawSample) -> Self {
        match variant {
            Variant::Dht11 => decode_integer(sample.data()),
            Variant::Dht21 | Variant::Dht22 => decode_tenths(sample.data()),
        }
    }

    /// Temperature expressed in `scale`.
    pub fn temperature_in(&self, scale: Scale) -> f32 {
        scale.from_celsius(self.temperature)
    }

    /// Heat index of this reading, expressed in `scale`.
    pub fn heat_index(&self, scale: Scale) -> f32 {
        heat_index(self.temperature_in(scale), self.relative_humidity, scale)
    }
}

/// DHT11: whole percent in byte 0 and whole degrees in byte 2.
fn decode_integer(data: [u8; 4]) -> Reading {
    let [hum, _, temp, _] = data;

    Reading {
        temperature: temp as f32,
        relative_humidity: hum as f32,
    }
}

/// DHT21/DHT22: big-endian tenths, temperature sign in the top bit.
fn decode_tenths(data: [u8; 4]) -> Reading {
    let [hum_hi, hum_lo, temp_hi, temp_lo] = data;

    let joined_humidity = u16::from_be_bytes([hum_hi, hum_lo]);
    let relative_humidity = joined_humidity as f32 / 10.0;

    let is_temp_negative = (temp_hi >> 7) != 0;
    let temp_hi = temp_hi & 0b0111_1111;
    let joined_temp = u16::from_be_bytes([temp_hi, temp_lo]);
    let mut temperature = joined_temp as f32 / 10.0;
    if is_temp_negative {
        temperature = -temperature;
    }

    Reading {
        temperature,
        relative_humidity,
    }
}
