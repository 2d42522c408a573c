use crate::error::DhtError;
use crate::sample::RawSample;

/// Throttles physical transactions and keeps the outcome of the last one.
///
/// DHT sensors need a rest between samples; polling faster only returns the
/// previous conversion or fails outright. Within `min_interval_ms` of the last
/// attempt the cached outcome is served instead, whether it was a success or
/// a failure.
#[derive(Clone, Debug)]
pub struct ReadingCache {
    sample: RawSample,
    last_read_ms: u32,
    last_ok: bool,
    first_reading: bool,
    min_interval_ms: u32,
}

impl ReadingCache {
    pub const fn new(min_interval_ms: u32) -> Self {
        ReadingCache {
            sample: RawSample::EMPTY,
            last_read_ms: 0,
            last_ok: false,
            first_reading: true,
            min_interval_ms,
        }
    }

    /// Forgets when the last transaction happened.
    pub fn reset(&mut self) {
        self.last_read_ms = 0;
    }

    /// Whether a request at `now_ms` can be answered without a transaction.
    ///
    /// A clock that went backwards (counter overflow) always counts as stale.
    pub fn is_fresh(&self, now_ms: u32) -> bool {
        if self.first_reading || now_ms < self.last_read_ms {
            return false;
        }
        now_ms - self.last_read_ms < self.min_interval_ms
    }

    /// Returns the cached sample, running `acquire` first if the cache is stale.
    ///
    /// # Returns
    ///
    /// * `Some(RawSample)` if the most recent transaction succeeded.
    /// * `None` if it failed. The stored sample is zeroed in that case.
    pub fn get_or_acquire<E, F>(&mut self, now_ms: u32, acquire: F) -> Option<RawSample>
    where
        F: FnOnce() -> Result<RawSample, DhtError<E>>,
    {
        if self.is_fresh(now_ms) {
            #[cfg(feature = "defmt")]
            defmt::trace!("DHT sample served from cache");
            return self.sample();
        }

        self.first_reading = false;
        self.last_read_ms = now_ms;

        match acquire() {
            Ok(sample) => {
                self.sample = sample;
                self.last_ok = true;
            }
            Err(_) => {
                self.sample = RawSample::EMPTY;
                self.last_ok = false;
            }
        }

        self.sample()
    }

    /// Outcome of the most recent transaction.
    pub fn sample(&self) -> Option<RawSample> {
        self.last_ok.then_some(self.sample)
    }
}
