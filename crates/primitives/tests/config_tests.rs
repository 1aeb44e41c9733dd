use airtelmoney_primitives::models::app_state::AirtelInfo;
use airtelmoney_primitives::models::enum_types::Environment;
use secrecy::ExposeSecret;
use serial_test::serial;
use std::time::Duration;

const KEYS: [&str; 7] = [
    "AIRTEL_CLIENT_ID",
    "AIRTEL_BASE_URL",
    "AIRTEL_CLIENT_SECRET",
    "AIRTEL_ENVIRONMENT",
    "AIRTEL_TIMEOUT_SECS",
    "AIRTEL_COUNTRY",
    "AIRTEL_CURRENCY",
];

fn clear_env() {
    for key in KEYS {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

fn set(key: &str, value: &str) {
    unsafe {
        std::env::set_var(key, value);
    }
}

#[test]
#[serial]
fn test_defaults_to_staging_with_ten_second_timeout() {
    clear_env();
    set("AIRTEL_CLIENT_ID", "client");
    set("AIRTEL_CLIENT_SECRET", "secret");

    let info = AirtelInfo::new().unwrap();

    assert_eq!(info.airtel_client_id, "client");
    assert_eq!(info.airtel_client_secret.expose_secret(), "secret");
    assert_eq!(info.airtel_environment, Environment::Staging);
    assert_eq!(info.airtel_timeout, Duration::from_secs(10));
    assert!(info.airtel_country.is_none());
    assert!(info.airtel_currency.is_none());
    assert_eq!(info.base_url(), "https://openapiuat.airtel.africa");

    clear_env();
}

#[test]
#[serial]
fn test_reads_overrides() {
    clear_env();
    set("AIRTEL_CLIENT_ID", "client");
    set("AIRTEL_CLIENT_SECRET", "secret");
    set("AIRTEL_ENVIRONMENT", "production");
    set("AIRTEL_TIMEOUT_SECS", "3");
    set("AIRTEL_COUNTRY", "ZM");
    set("AIRTEL_CURRENCY", "ZMW");

    let info = AirtelInfo::new().unwrap();

    assert_eq!(info.airtel_environment, Environment::Production);
    assert_eq!(info.airtel_timeout, Duration::from_secs(3));
    assert_eq!(info.airtel_country.as_deref(), Some("ZM"));
    assert_eq!(info.airtel_currency.as_deref(), Some("ZMW"));
    assert_eq!(info.base_url(), "https://openapi.airtel.africa");

    clear_env();
}

#[test]
#[serial]
fn test_missing_secret_is_rejected() {
    clear_env();
    set("AIRTEL_CLIENT_ID", "client");

    let err = AirtelInfo::new().unwrap_err();
    assert!(err.to_string().contains("AIRTEL_CLIENT_SECRET"));

    clear_env();
}

#[test]
#[serial]
fn test_unknown_environment_is_rejected() {
    clear_env();
    set("AIRTEL_CLIENT_ID", "client");
    set("AIRTEL_CLIENT_SECRET", "secret");
    set("AIRTEL_ENVIRONMENT", "sandbox");

    assert!(AirtelInfo::new().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_base_url_override_wins_over_environment() {
    clear_env();
    set("AIRTEL_CLIENT_ID", "client");
    set("AIRTEL_CLIENT_SECRET", "secret");
    set("AIRTEL_ENVIRONMENT", "production");
    set("AIRTEL_BASE_URL", "http://127.0.0.1:9000");

    let info = AirtelInfo::new().unwrap();

    assert_eq!(info.airtel_environment, Environment::Production);
    assert_eq!(info.base_url(), "http://127.0.0.1:9000");

    clear_env();
}
