use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use chart_publish::api::{
    API_KEY_ENV, CREDENTIALS_FILE_ENV, ClientConfig, Credentials, DEFAULT_DOMAIN,
    DEFAULT_TIMEOUT_SECS, DOMAIN_ENV, USERNAME_ENV,
};
use chart_publish::error::ChartError;

fn lookup_from(vars: &[(&str, String)]) -> impl Fn(&str) -> Option<String> + use<> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), v.clone()))
        .collect();
    move |name| map.get(name).cloned()
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "chart-publish-{}-{name}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("scratch dir");
    dir
}

#[test]
fn credentials_come_from_environment_first() {
    let lookup = lookup_from(&[
        (USERNAME_ENV, "someone".to_owned()),
        (API_KEY_ENV, "token".to_owned()),
        (CREDENTIALS_FILE_ENV, "/nonexistent/credentials".to_owned()),
    ]);
    let credentials = Credentials::load_with(lookup).expect("credentials");
    assert_eq!(credentials, Credentials::new("someone", "token"));
}

#[test]
fn half_configured_environment_is_an_error() {
    let lookup = lookup_from(&[(USERNAME_ENV, "someone".to_owned())]);
    assert!(matches!(
        Credentials::load_with(lookup),
        Err(ChartError::Config(_))
    ));
}

#[test]
fn credentials_file_is_used_when_environment_is_empty() {
    let dir = scratch_dir("explicit-file");
    let path = dir.join("credentials.json");
    fs::write(
        &path,
        r#"{"username":"file-user","api_key":"file-key","stream_ids":[]}"#,
    )
    .expect("write credentials");

    let lookup = lookup_from(&[(CREDENTIALS_FILE_ENV, path.display().to_string())]);
    let credentials = Credentials::load_with(lookup).expect("credentials");
    assert_eq!(credentials.username, "file-user");
    assert_eq!(credentials.api_key, "file-key");
}

#[test]
fn home_credentials_file_is_the_fallback() {
    let home = scratch_dir("home");
    fs::create_dir_all(home.join(".plotly")).expect("plotly dir");
    fs::write(
        home.join(".plotly").join(".credentials"),
        r#"{"username":"home-user","api_key":"home-key"}"#,
    )
    .expect("write credentials");

    let lookup = lookup_from(&[("HOME", home.display().to_string())]);
    let credentials = Credentials::load_with(lookup).expect("credentials");
    assert_eq!(credentials.username, "home-user");
}

#[test]
fn missing_credentials_are_a_config_error() {
    let home = scratch_dir("empty-home");
    let lookup = lookup_from(&[("HOME", home.display().to_string())]);
    assert!(matches!(
        Credentials::load_with(lookup),
        Err(ChartError::Config(_))
    ));
}

#[test]
fn credentials_json_requires_both_fields() {
    assert!(Credentials::from_json_str(r#"{"username":"someone"}"#).is_err());
    assert!(Credentials::from_json_str(r#"{"username":"","api_key":"k"}"#).is_err());
}

#[test]
fn credentials_debug_hides_api_key() {
    let rendered = format!("{:?}", Credentials::new("someone", "very-secret"));
    assert!(rendered.contains("someone"));
    assert!(!rendered.contains("very-secret"));
}

#[test]
fn client_config_defaults_and_overrides() {
    let config = ClientConfig::from_env_with(lookup_from(&[])).expect("config");
    assert_eq!(config.domain, DEFAULT_DOMAIN);
    assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    assert_eq!(config.endpoint(), "https://plot.ly/clientresp");

    let config = ClientConfig::from_env_with(lookup_from(&[(
        DOMAIN_ENV,
        "http://localhost:8080".to_owned(),
    )]))
    .expect("config");
    assert_eq!(config.endpoint(), "http://localhost:8080/clientresp");
}

#[test]
fn client_config_reads_service_config_file() {
    let home = scratch_dir("config-home");
    fs::create_dir_all(home.join(".plotly")).expect("plotly dir");
    fs::write(
        home.join(".plotly").join(".config"),
        r#"{"plotly_domain":"https://charts.internal","plotly_streaming_domain":"stream"}"#,
    )
    .expect("write config");

    let config = ClientConfig::from_env_with(lookup_from(&[("HOME", home.display().to_string())]))
        .expect("config");
    assert_eq!(config.domain, "https://charts.internal");
    assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn client_config_rejects_bad_values() {
    assert!(ClientConfig::from_json_str(r#"{"domain":"plot.ly"}"#).is_err());
    assert!(ClientConfig::from_json_str(r#"{"timeout_secs":0}"#).is_err());
    assert!(
        ClientConfig::new()
            .with_domain("ftp://plot.ly")
            .validate()
            .is_err()
    );
}
