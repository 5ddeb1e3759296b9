//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod weather;

pub use weather::{
    CoordinatesParams, TokyoWeatherParams, TokyoWeatherTool, WeatherByCoordinatesTool,
    WeatherClient, WeatherSource,
};
