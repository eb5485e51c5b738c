use std::ops::RangeInclusive;

use log::Level;

pub const BRAND_NAME: &str = "WeatherNow";

/// Delay between mounting the weather card and the simulated data refresh.
pub const WEATHER_REFRESH_DELAY_MS: u32 = 3_000;

/// Temperatures the simulated refresh can produce, in degrees Celsius.
pub const TEMPERATURE_RANGE: RangeInclusive<i32> = 10..=39;

pub const DEFAULT_TEMPERATURE_CELSIUS: i32 = 22;
pub const DEFAULT_CONDITION: &str = "Partly Cloudy";
pub const DEFAULT_HUMIDITY_PERCENT: u8 = 60;
pub const DEFAULT_WIND_SPEED_KMH: u32 = 10;

/// How far the hero background travels while it scrolls out of view.
pub const HERO_PARALLAX_MAX_PERCENT: f64 = 50.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
