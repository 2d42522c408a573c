/// Temperature scale selected by the caller.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scale {
    /// Degrees Celsius, the scale the sensors report in.
    #[default]
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
}

impl Scale {
    /// Expresses a Celsius value in this scale.
    pub fn from_celsius(self, celsius: f32) -> f32 {
        match self {
            Scale::Celsius => celsius,
            Scale::Fahrenheit => celsius_to_fahrenheit(celsius),
        }
    }
}

/// Converts degrees Celsius to degrees Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Converts degrees Fahrenheit to degrees Celsius.
pub fn fahrenheit_to_celsius(fahrenheit: f32) -> f32 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}
