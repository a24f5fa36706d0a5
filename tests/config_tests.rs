// Configuration loading tests

use parking_lot::Mutex;
use signbridge::config::AppConfig;
use std::io::Write;

// Tests in this file read or write process environment variables
static ENV_LOCK: Mutex<()> = parking_lot::const_mutex(());

const ENV_KEYS: &[&str] = &[
    "PORT",
    "FRONTEND_URL",
    "OPENAI_API_KEY",
    "SIGNBRIDGE__SERVER__PORT",
    "SIGNBRIDGE__SERVER__ALLOWED_ORIGINS",
    "SIGNBRIDGE__CACHE__IMAGE_TTL_MS",
    "SIGNBRIDGE__LOGGING__FORMAT",
];

/// Sets variables for the lifetime of the guard and removes them on drop.
struct EnvGuard;

impl EnvGuard {
    fn set(vars: &[(&str, &str)]) -> Self {
        clear_env();
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
        EnvGuard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        clear_env();
    }
}

fn clear_env() {
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
}

fn toml_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "{}", contents).unwrap();
    file
}

#[test]
fn test_load_from_file_overrides_defaults() {
    let _lock = ENV_LOCK.lock();
    let _env = EnvGuard::set(&[]);
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[server]
host = "127.0.0.1"
allowed_origins = ["https://sign.example", "http://localhost:3000"]

[cache]
image_ttl_ms = 60000
sweep_interval_seconds = 0

[logging]
format = "json"
"#
    )
    .unwrap();

    let config = AppConfig::load_from(Some(file.path())).unwrap();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(
        config.server.allowed_origins,
        vec!["https://sign.example", "http://localhost:3000"]
    );
    assert_eq!(config.cache.image_ttl_ms, 60_000);
    assert_eq!(config.cache.sweep_interval_seconds, 0);
    // Untouched values keep their defaults
    assert_eq!(config.cache.translation_ttl_ms, 86_400_000);
    assert_eq!(config.logging.format, "json");
}

#[test]
fn test_missing_explicit_file_is_error() {
    let _lock = ENV_LOCK.lock();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    assert!(AppConfig::load_from(Some(missing.as_path())).is_err());
}

#[test]
fn test_default_config_serializes_to_toml() {
    let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
    assert!(text.contains("[server]"));
    assert!(text.contains("port = 3001"));
    assert!(!text.contains("api_key"));
}

#[test]
fn test_environment_overrides_file() {
    let _lock = ENV_LOCK.lock();
    let file = toml_file(
        r#"
[server]
port = 4000
allowed_origins = ["https://file.example"]

[cache]
image_ttl_ms = 60000

[logging]
format = "pretty"
"#,
    );
    let _env = EnvGuard::set(&[
        ("SIGNBRIDGE__SERVER__PORT", "5000"),
        ("SIGNBRIDGE__CACHE__IMAGE_TTL_MS", "1234"),
        ("SIGNBRIDGE__LOGGING__FORMAT", "json"),
        ("SIGNBRIDGE__SERVER__ALLOWED_ORIGINS", "https://env.example"),
    ]);

    let config = AppConfig::load_from(Some(file.path())).unwrap();
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.cache.image_ttl_ms, 1234);
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.server.allowed_origins, vec!["https://env.example"]);
    assert!(config.provider.api_key().is_none());
}

#[test]
fn test_deployment_variables_take_precedence() {
    let _lock = ENV_LOCK.lock();
    let file = toml_file(
        r#"
[server]
port = 4000
allowed_origins = ["https://file.example"]
"#,
    );
    let _env = EnvGuard::set(&[
        ("SIGNBRIDGE__SERVER__PORT", "5000"),
        ("SIGNBRIDGE__SERVER__ALLOWED_ORIGINS", "https://env.example"),
        ("SIGNBRIDGE__CACHE__IMAGE_TTL_MS", "1234"),
        ("PORT", "4555"),
        ("FRONTEND_URL", "https://a.example, https://b.example"),
        ("OPENAI_API_KEY", "sk-local-test"),
    ]);

    let config = AppConfig::load_from(Some(file.path())).unwrap();
    assert_eq!(config.server.port, 4555);
    assert_eq!(
        config.server.allowed_origins,
        vec!["https://a.example", "https://b.example"]
    );
    assert_eq!(config.provider.api_key(), Some("sk-local-test"));
    assert_eq!(config.cache.image_ttl_ms, 1234);
}

#[test]
fn test_blank_openai_key_leaves_provider_unconfigured() {
    let _lock = ENV_LOCK.lock();
    let file = toml_file("[provider]\napi_key = \"sk-from-file\"");
    let _env = EnvGuard::set(&[("OPENAI_API_KEY", "   ")]);

    let config = AppConfig::load_from(Some(file.path())).unwrap();
    assert!(config.provider.api_key().is_none());
}
