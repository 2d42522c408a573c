//! DHT Sensor Family Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic driver for the DHT11, DHT21 (AM2301)
//! and DHT22 (AM2302) temperature and humidity sensors, built on top of the
//! [`embedded-hal`] traits.
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Designed for `no_std` environments
//! - Self-calibrating bit decoding: no per-platform timing constants
//! - Built-in throttling to the sensors' minimum sampling interval
//! - Heat index computation and a "unified sensor" adapter
//! - Optional logging support via `defmt`
//!
//! # Dependencies
//! This driver depends on the following traits:
//! - [`InputPin`] and [`OutputPin`] for GPIO access (open-drain data line)
//! - [`DelayNs`] for accurate timing
//! - [`Clock`] for a free-running millisecond/microsecond counter
//!
//! Interrupts are masked during the ~4 ms bit capture through the
//! [`critical-section`] crate; the application must link an implementation
//! for its target.
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` and logs transaction failures
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`critical-section`]: https://docs.rs/critical-section
//! [`InputPin`]: embedded_hal::digital::InputPin
//! [`OutputPin`]: embedded_hal::digital::OutputPin
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

pub mod cache;
pub mod clock;
pub mod config;
pub mod decoder;
pub mod dht;
pub mod error;
pub mod heat_index;
pub mod reading;
pub mod sample;
pub mod unified;
pub mod units;
pub mod variant;

#[cfg(test)]
mod sim;

pub use clock::Clock;
pub use config::Config;
pub use dht::Dht;
pub use error::DhtError;
pub use heat_index::heat_index;
pub use reading::Reading;
pub use sample::RawSample;
pub use unified::{DhtUnified, Event, SensorInfo, SensorKind};
pub use units::{Scale, celsius_to_fahrenheit, fahrenheit_to_celsius};
pub use variant::Variant;
