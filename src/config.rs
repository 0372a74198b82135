use core::fmt;

use crate::constants::*;
use crate::network::{UploadTarget, WifiCredentials};

/// Settings baked into the firmware image at build time.
///
/// The values come from `cfg.toml` through `build.rs` and are exposed as the
/// [`CONFIG`] constant. Nothing here is validated: a malformed host is an
/// authoring error that only the consumer connecting to it can detect.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Config {
    // Wi-Fi SSID to connect to
    wifi_ssid: &'static str,

    // Wi-Fi pre-shared key (password)
    wifi_psk: &'static str,

    // Server hostname or IP address receiving sensor data
    host: &'static str,

    // Server port (DEFAULT_HTTP_PORT when unset)
    host_port: Option<u16>,

    // Location identifier sent with each upload (DEFAULT_LOCATION_ID when unset)
    location_id: Option<u16>,
}

impl Config {
    pub const fn new(wifi_ssid: &'static str, wifi_psk: &'static str, host: &'static str) -> Self {
        Self {
            wifi_ssid,
            wifi_psk,
            host,
            host_port: None,
            location_id: None,
        }
    }

    pub const fn with_ssid(mut self, wifi_ssid: &'static str) -> Self {
        self.wifi_ssid = wifi_ssid;
        self
    }

    pub const fn with_password(mut self, wifi_psk: &'static str) -> Self {
        self.wifi_psk = wifi_psk;
        self
    }

    pub const fn with_host(mut self, host: &'static str) -> Self {
        self.host = host;
        self
    }

    pub const fn with_port(mut self, port: u16) -> Self {
        self.host_port = Some(port);
        self
    }

    pub const fn with_location_id(mut self, location_id: u16) -> Self {
        self.location_id = Some(location_id);
        self
    }

    /// Network name (SSID) of the access point to join.
    pub const fn ssid(&self) -> &'static str {
        self.wifi_ssid
    }

    /// Access point secret.
    pub const fn password(&self) -> &'static str {
        self.wifi_psk
    }

    /// Address of the server receiving sensor data.
    pub const fn host(&self) -> &'static str {
        self.host
    }

    pub const fn port(&self) -> u16 {
        match self.host_port {
            Some(port) => port,
            None => DEFAULT_HTTP_PORT,
        }
    }

    pub const fn location_id(&self) -> u16 {
        match self.location_id {
            Some(id) => id,
            None => DEFAULT_LOCATION_ID,
        }
    }

    /// Values needed by the network join routine.
    pub const fn wifi_credentials(&self) -> WifiCredentials<'static> {
        WifiCredentials {
            ssid: self.wifi_ssid,
            password: self.wifi_psk,
        }
    }

    /// Values needed by the data upload routine.
    pub const fn upload_target(&self) -> UploadTarget<'static> {
        UploadTarget {
            host: self.host,
            port: self.port(),
            path: UPLOAD_PATH,
            location_id: self.location_id(),
        }
    }

    /// True while any value is still the one shipped in `cfg.example.toml`.
    pub fn is_placeholder(&self) -> bool {
        self.wifi_ssid == PLACEHOLDER_SSID
            || self.wifi_psk == PLACEHOLDER_PASSWORD
            || self.host == PLACEHOLDER_HOST
    }

    pub fn log(&self) {
        log::info!(
            "RoomSensor {} configured from {}: ssid={:?} host={}:{} location={}",
            VERSION,
            CONFIG_SOURCE,
            self.wifi_ssid,
            self.host,
            self.port(),
            self.location_id()
        );
        if self.is_placeholder() {
            log::warn!("Placeholder configuration in use, copy cfg.example.toml to cfg.toml and rebuild");
        }
    }
}

// Keeps the credential out of logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("wifi_ssid", &self.wifi_ssid)
            .field("wifi_psk", &"***")
            .field("host", &self.host)
            .field("host_port", &self.port())
            .field("location_id", &self.location_id())
            .finish()
    }
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));
