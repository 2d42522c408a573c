/// The five bytes of one DHT transaction, in transmission order:
/// humidity high, humidity low, temperature high, temperature low, checksum.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawSample([u8; 5]);

impl RawSample {
    /// All-zero buffer, the state after a failed transaction.
    pub const EMPTY: RawSample = RawSample([0; 5]);

    pub const fn new(bytes: [u8; 5]) -> Self {
        RawSample(bytes)
    }

    /// Builds a sample from four data bytes, appending the matching checksum.
    pub fn with_checksum(data: [u8; 4]) -> Self {
        let [b0, b1, b2, b3] = data;
        RawSample([b0, b1, b2, b3, checksum(&data)])
    }

    pub const fn bytes(&self) -> &[u8; 5] {
        &self.0
    }

    /// The four data bytes without the checksum.
    pub fn data(&self) -> [u8; 4] {
        let [b0, b1, b2, b3, _] = self.0;
        [b0, b1, b2, b3]
    }

    /// The checksum byte as sent by the sensor.
    pub const fn checksum(&self) -> u8 {
        self.0[4]
    }

    /// Whether the checksum byte equals the low 8 bits of the data byte sum.
    pub fn is_valid(&self) -> bool {
        checksum(&self.data()) == self.checksum()
    }
}

/// Low 8 bits of the sum of the data bytes.
pub fn checksum(data: &[u8; 4]) -> u8 {
    data.iter().fold(0u8, |sum, v| sum.wrapping_add(*v))
}
