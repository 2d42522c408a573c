/// Free-running time source used to time pulses and throttle transactions.
///
/// Both counters are expected to wrap around at `u32::MAX`, the way most
/// hardware tick counters do. The driver only ever compares values with
/// wrapping arithmetic or resets its bookkeeping when time appears to run
/// backwards.
///
/// The transaction times pulses while interrupts are masked, so `now_us`
/// must keep advancing inside a critical section. Read it from a hardware
/// counter, not from a tick count maintained by an interrupt handler. A
/// clock that stalls there degrades every pulse timeout to the decoder's
/// poll cap.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed origin.
    fn now_ms(&mut self) -> u32;

    /// Microseconds since an arbitrary, fixed origin.
    fn now_us(&mut self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn now_ms(&mut self) -> u32 {
        (**self).now_ms()
    }

    fn now_us(&mut self) -> u32 {
        (**self).now_us()
    }
}
