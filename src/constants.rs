/// Current firmware version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Port used when the configuration does not set `host_port`
pub const DEFAULT_HTTP_PORT: u16 = 80;

/// Location reported when the configuration does not set `location_id`
pub const DEFAULT_LOCATION_ID: u16 = 1;

/// Server script that stores one sensor value per request
pub const UPLOAD_PATH: &str = "/addSensorData.php";

/// Capacity of the formatted upload request (request line and headers)
pub const REQUEST_BUFFER_SIZE: usize = 256;

// Values shipped in cfg.example.toml, to be replaced before deployment

/// Sample network name
pub const PLACEHOLDER_SSID: &str = "WLAN";
/// Sample network password
pub const PLACEHOLDER_PASSWORD: &str = "Password";
/// Sample server address
pub const PLACEHOLDER_HOST: &str = "192.168.0.4";
