// Shared by build.rs and the library's host tests.

use std::path::Path;

use serde::Deserialize;

pub const CONFIG_FILE: &str = "cfg.toml";
pub const EXAMPLE_CONFIG_FILE: &str = "cfg.example.toml";
pub const CONFIG_ENV: &str = "ROOM_SENSOR_CONFIG";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    pub wifi_ssid: String,
    pub wifi_psk: String,
    pub host: String,
    pub host_port: Option<u16>,
    pub location_id: Option<u16>,
}

/// File the configuration is read from.
#[derive(Debug, PartialEq, Eq)]
pub struct Selected {
    pub path: String,
    // true when falling back to the shipped sample values
    pub placeholder: bool,
}

/// Picks the config file. An explicit override must exist; only a missing
/// default `cfg.toml` falls back to the example file.
pub fn select_source<F>(override_path: Option<&str>, exists: F) -> Result<Selected, String>
where
    F: Fn(&str) -> bool,
{
    match override_path {
        Some(path) if exists(path) => Ok(Selected {
            path: path.to_string(),
            placeholder: false,
        }),
        Some(path) => Err(format!("{}={} does not exist", CONFIG_ENV, path)),
        None if exists(CONFIG_FILE) => Ok(Selected {
            path: CONFIG_FILE.to_string(),
            placeholder: false,
        }),
        None => Ok(Selected {
            path: EXAMPLE_CONFIG_FILE.to_string(),
            placeholder: true,
        }),
    }
}

pub fn parse(toml_str: &str) -> Result<RawConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Rust source for `$OUT_DIR/config.rs`, included by `src/config.rs`.
pub fn render(raw: &RawConfig, source: &str) -> String {
    let source_name = Path::new(source)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(CONFIG_FILE);

    format!(
        r#"
        /// File the build-time values were read from
        pub const CONFIG_SOURCE: &str = {src:?};

        pub const CONFIG: Config = Config {{
            wifi_ssid: {ssid:?},
            wifi_psk: {psk:?},
            host: {host:?},
            host_port: {port:?},
            location_id: {loc:?},
        }};
    "#,
        src = source_name,
        ssid = raw.wifi_ssid,
        psk = raw.wifi_psk,
        host = raw.host,
        port = raw.host_port,
        loc = raw.location_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_line<'a>(code: &'a str, field: &str) -> &'a str {
        let prefix = format!("{}: ", field);
        code.lines()
            .map(str::trim)
            .find(|line| line.starts_with(&prefix))
            .unwrap_or_else(|| panic!("no {} in generated code", field))
    }

    // Rust and TOML basic strings share the escapes Debug emits for these inputs
    fn decode_literal(line: &str, field: &str) -> String {
        let literal = line
            .strip_prefix(&format!("{}: ", field))
            .and_then(|rest| rest.strip_suffix(','))
            .unwrap();
        let table: toml::Table = toml::from_str(&format!("v = {}", literal)).unwrap();
        table["v"].as_str().unwrap().to_string()
    }

    #[test]
    fn escapes_quotes_backslashes_and_tabs() {
        let raw = parse("wifi_ssid = \"Café \\\"net\\\"\"\nwifi_psk = \"a\\\\b\\tc'd\"\nhost = \"10.0.0.9\"\n")
            .unwrap();
        assert_eq!(raw.wifi_ssid, "Café \"net\"");
        assert_eq!(raw.wifi_psk, "a\\b\tc'd");

        let code = render(&raw, "cfg.toml");
        assert_eq!(field_line(&code, "wifi_ssid"), r#"wifi_ssid: "Café \"net\"","#);
        assert_eq!(field_line(&code, "wifi_psk"), r#"wifi_psk: "a\\b\tc'd","#);
        assert_eq!(decode_literal(field_line(&code, "wifi_ssid"), "wifi_ssid"), raw.wifi_ssid);
        assert_eq!(decode_literal(field_line(&code, "wifi_psk"), "wifi_psk"), raw.wifi_psk);
    }

    #[test]
    fn optional_keys_render_as_options() {
        let with = parse("wifi_ssid = \"a\"\nwifi_psk = \"b\"\nhost = \"h\"\nhost_port = 8080\nlocation_id = 3\n")
            .unwrap();
        let code = render(&with, "cfg.toml");
        assert_eq!(field_line(&code, "host_port"), "host_port: Some(8080),");
        assert_eq!(field_line(&code, "location_id"), "location_id: Some(3),");

        let without = parse("wifi_ssid = \"a\"\nwifi_psk = \"b\"\nhost = \"h\"\n").unwrap();
        let code = render(&without, "cfg.toml");
        assert_eq!(field_line(&code, "host_port"), "host_port: None,");
        assert_eq!(field_line(&code, "location_id"), "location_id: None,");
    }

    #[test]
    fn source_name_drops_directories() {
        let raw = parse("wifi_ssid = \"a\"\nwifi_psk = \"b\"\nhost = \"h\"\n").unwrap();
        let code = render(&raw, "/etc/room_sensor/attic.toml");
        assert!(code.contains(r#"pub const CONFIG_SOURCE: &str = "attic.toml";"#));
    }

    #[test]
    fn missing_required_key_is_rejected() {
        let err = parse("wifi_ssid = \"a\"\nhost = \"h\"\n").unwrap_err();
        assert!(err.to_string().contains("wifi_psk"));
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(parse("wifi_ssid = \"a\"\nwifi_psk = \"b\"\nhost = \"h\"\nhostname = \"x\"\n").is_err());
    }

    #[test]
    fn example_file_parses() {
        let raw = parse(include_str!("../cfg.example.toml")).unwrap();
        assert_eq!(raw.wifi_ssid, "WLAN");
        assert_eq!(raw.wifi_psk, "Password");
        assert_eq!(raw.host, "192.168.0.4");
        assert_eq!(raw.host_port, None);
    }

    #[test]
    fn missing_override_is_an_error() {
        let result = select_source(Some("/tmp/typo_cfg.toml"), |_| false);
        assert!(result.unwrap_err().contains("/tmp/typo_cfg.toml"));
    }

    #[test]
    fn existing_override_is_used() {
        let selected = select_source(Some("/etc/attic.toml"), |path| path == "/etc/attic.toml").unwrap();
        assert_eq!(selected.path, "/etc/attic.toml");
        assert!(!selected.placeholder);
    }

    #[test]
    fn default_file_preferred_over_example() {
        let selected = select_source(None, |path| path == CONFIG_FILE).unwrap();
        assert_eq!(selected.path, CONFIG_FILE);
        assert!(!selected.placeholder);
    }

    #[test]
    fn missing_default_falls_back_to_example() {
        let selected = select_source(None, |_| false).unwrap();
        assert_eq!(selected.path, EXAMPLE_CONFIG_FILE);
        assert!(selected.placeholder);
    }
}
