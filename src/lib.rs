//! Build-time configuration of the RoomSensor firmware.
//!
//! Wi-Fi credentials and the address of the data server are read from
//! `cfg.toml` when the crate is built and exposed as [`config::CONFIG`].
//! Consumers take the part they need through the views in [`network`].
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod constants;
pub mod network;
pub mod upload;

#[cfg(test)]
#[path = "../build/render.rs"]
mod render;

pub use config::{Config, CONFIG, CONFIG_SOURCE};
pub use network::{UploadTarget, WifiCredentials};
pub use upload::SensorReading;
