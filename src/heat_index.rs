//! Apparent temperature ("heat index") approximation.
//!
//! Both formulas are the published Rothfusz-style regressions, fitted
//! independently for Celsius and Fahrenheit input. They are not exact
//! conversions of one another, and neither is meaningful far outside the
//! range it was fitted on. No bounds checking is done: out-of-range input
//! gives an extrapolated value.

use crate::units::Scale;

/// Computes the heat index from an air temperature and a relative humidity
/// in percent. `temperature` and the result are both expressed in `scale`.
// Coefficients are kept exactly as published (Rothfusz 1990 and its Celsius refit).
#[allow(clippy::excessive_precision)]
pub fn heat_index(temperature: f32, humidity: f32, scale: Scale) -> f32 {
    let t = temperature;
    let h = humidity;
    let t2 = t * t;
    let h2 = h * h;

    match scale {
        Scale::Celsius => {
            -8.784695 + 1.61139411 * t + 2.338549 * h - 0.14611605 * t * h - 0.01230809 * t2
                - 0.01642482 * h2
                + 0.00221173 * t2 * h
                + 0.00072546 * t * h2
                - 0.00000358 * t2 * h2
        }
        Scale::Fahrenheit => {
            -42.379 + 2.04901523 * t + 10.14333127 * h - 0.22475541 * t * h - 0.00683783 * t2
                - 0.05481717 * h2
                + 0.00122874 * t2 * h
                + 0.00085282 * t * h2
                - 0.00000199 * t2 * h2
        }
    }
}
