/// Timing parameters of a DHT transaction.
///
/// The defaults follow the DHT datasheets and work for every supported
/// variant. They only need changing for unusually long cables or a platform
/// whose delay primitives are known to undershoot.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Minimum time between two physical transactions (milliseconds).
    pub min_interval_ms: u32,
    /// Longest a single pulse may last before the transaction fails (microseconds).
    pub pulse_timeout_us: u32,
    /// Time the released line is held high before a request (milliseconds).
    pub settle_ms: u32,
    /// Length of the start-low request pulse (milliseconds).
    pub start_low_ms: u32,
    /// Time the line is held high after the request pulse (microseconds).
    pub release_us: u32,
    /// Time given to the sensor to pull the line low before sampling (microseconds).
    pub response_delay_us: u32,
}

impl Config {
    /// Datasheet timings: 2 s between samples, 1 ms pulse timeout, 250 ms
    /// settle, 20 ms start pulse, 40 us release and 10 us response delay.
    pub const fn new() -> Self {
        Self {
            min_interval_ms: 2000,
            pulse_timeout_us: 1000,
            settle_ms: 250,
            start_low_ms: 20,
            release_us: 40,
            response_delay_us: 10,
        }
    }

    /// Sets the minimum time between two physical transactions.
    pub const fn with_min_interval_ms(mut self, ms: u32) -> Self {
        self.min_interval_ms = ms;
        self
    }

    /// Sets how long a single pulse may last before the transaction fails.
    pub const fn with_pulse_timeout_us(mut self, us: u32) -> Self {
        self.pulse_timeout_us = us;
        self
    }

    /// Sets how long the released line is held high before a request.
    pub const fn with_settle_ms(mut self, ms: u32) -> Self {
        self.settle_ms = ms;
        self
    }

    /// Sets the start-low pulse length. The sensors need at least 18 ms.
    pub const fn with_start_low_ms(mut self, ms: u32) -> Self {
        self.start_low_ms = ms;
        self
    }

    /// Sets how long the line is held high after the start pulse.
    pub const fn with_release_us(mut self, us: u32) -> Self {
        self.release_us = us;
        self
    }

    /// Sets the pause before the sensor's response is sampled.
    pub const fn with_response_delay_us(mut self, us: u32) -> Self {
        self.response_delay_us = us;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
