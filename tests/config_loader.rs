use beacon_server::config::{BeaconConfig, ConfigError};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

const VALID_JSON: &str = r#"{
    "broadcast_interval": 2.5,
    "server_addr": "0.0.0.0",
    "client_addr": "0.0.0.0",
    "server_port": 50000,
    "client_port": 50001,
    "apiPort": 8080,
    "apiUrl": "/api/v1",
    "helloMaxLength": 1024
}"#;

fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create config file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config file");
    path
}

/// Test that a JSON config in the beacon prototype format loads.
#[test]
fn test_load_valid_json() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "beacon.json", VALID_JSON);

    let config = BeaconConfig::load(&path).expect("Should load valid config");

    assert_eq!(config.broadcast_interval, 2.5);
    assert_eq!(config.server_port, 50000);
    assert_eq!(config.client_port, 50001);
    assert_eq!(config.api_port, 8080);
    assert_eq!(config.api_url, "/api/v1");
    assert_eq!(config.hello_max_length, 1024);
    assert_eq!(config.broadcast_period(), Duration::from_millis(2500));
}

/// Test that `.toml` files are parsed as TOML.
#[test]
fn test_load_valid_toml() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "beacon.toml",
        r#"
broadcast_interval = 0.5
server_addr = "192.168.1.10"
client_addr = "0.0.0.0"
server_port = 40000
client_port = 40001
apiPort = 9000
apiUrl = "/status"
helloMaxLength = 512
"#,
    );

    let config = BeaconConfig::load(&path).expect("Should load valid TOML config");

    assert_eq!(config.server_addr, "192.168.1.10");
    assert_eq!(config.api_endpoint("10.0.0.7"), "http://10.0.0.7:9000/status");
}

/// Test that a missing file surfaces a read error with its path.
#[test]
fn test_missing_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    match BeaconConfig::load(&path) {
        Err(ConfigError::ReadError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ReadError, got {:?}", other),
    }
}

/// Test that malformed JSON produces a parse error.
#[test]
fn test_invalid_json_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "broken.json", "{ not json");

    assert!(matches!(
        BeaconConfig::load(&path),
        Err(ConfigError::JsonError { .. })
    ));
}

/// Test that a missing key is a parse error, not a silent default.
#[test]
fn test_missing_key_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "partial.json", r#"{ "broadcast_interval": 1.0 }"#);

    let err = BeaconConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::JsonError { .. }));
    assert!(err.to_string().contains("partial.json"));
}

/// Test that privileged ports fail validation.
#[test]
fn test_privileged_port_fails_validation() {
    let dir = TempDir::new().unwrap();
    let content = VALID_JSON.replace("\"server_port\": 50000", "\"server_port\": 80");
    let path = write_config(&dir, "beacon.json", &content);

    match BeaconConfig::load(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("server_port"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

/// Test that ports beyond u16 are rejected while parsing.
#[test]
fn test_out_of_range_port_fails() {
    let dir = TempDir::new().unwrap();
    let content = VALID_JSON.replace("\"apiPort\": 8080", "\"apiPort\": 70000");
    let path = write_config(&dir, "beacon.json", &content);

    assert!(matches!(
        BeaconConfig::load(&path),
        Err(ConfigError::JsonError { .. })
    ));
}

/// Test that an interval too large for a `Duration` fails validation.
#[test]
fn test_interval_beyond_duration_fails_validation() {
    let dir = TempDir::new().unwrap();
    let content = VALID_JSON.replace("\"broadcast_interval\": 2.5", "\"broadcast_interval\": 1e20");
    let path = write_config(&dir, "beacon.json", &content);

    match BeaconConfig::load(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("broadcast interval"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

/// Test that "Hello" length bounds are enforced.
#[test]
fn test_hello_length_bounds() {
    let mut config = BeaconConfig::default();

    config.hello_max_length = 0;
    assert!(config.validate().is_err());

    config.hello_max_length = 65536;
    assert!(config.validate().is_ok());

    config.hello_max_length = 65537;
    assert!(config.validate().is_err());
}

/// Test that bind addresses must be IP addresses.
#[test]
fn test_bad_address_fails_validation() {
    let config = BeaconConfig {
        client_addr: "localhost".to_string(),
        ..BeaconConfig::default()
    };

    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("client_addr"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

/// Test that the API path must be absolute.
#[test]
fn test_relative_api_url_fails_validation() {
    let config = BeaconConfig {
        api_url: "api".to_string(),
        ..BeaconConfig::default()
    };
    assert!(config.validate().is_err());
}
