//! Views handed to the firmware's network consumers.
//!
//! Each consumer receives only the part of [`Config`](crate::config::Config)
//! it works with, borrowed rather than copied.

use core::fmt;

/// Access point identifier and secret for the network join routine.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct WifiCredentials<'a> {
    pub ssid: &'a str,
    pub password: &'a str,
}

impl fmt::Debug for WifiCredentials<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WifiCredentials")
            .field("ssid", &self.ssid)
            .field("password", &"***")
            .finish()
    }
}

/// Destination of the data upload routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTarget<'a> {
    pub host: &'a str,
    pub port: u16,
    pub path: &'a str,
    pub location_id: u16,
}
