//! Weather tools backed by the OpenWeatherMap current-weather API.
//!
//! - `tokyo`: `getTokyoWeather`, fixed city lookup
//! - `coordinates`: `getWeatherByCoordinates`, latitude/longitude lookup
//! - `client`: the upstream HTTP client and the [`WeatherSource`] seam
//! - `common`: response shaping and the fallback boundary shared by both tools

pub mod client;
pub mod common;
pub mod coordinates;
pub mod tokyo;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::{Location, UpstreamWeather, WeatherClient, WeatherSource};
pub use coordinates::{CoordinatesParams, WeatherByCoordinatesTool};
pub use tokyo::{TokyoWeatherParams, TokyoWeatherTool};
