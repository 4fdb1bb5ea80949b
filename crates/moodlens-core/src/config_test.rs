use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.classifier_url, "http://localhost:8080");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.scraper_user_agent, "Mozilla/5.0");
    assert_eq!(cfg.twitter_api_url, "https://api.twitter.com");
    assert_eq!(cfg.youtube_api_url, "https://www.googleapis.com");
}

#[test]
fn classifier_url_override_strips_trailing_slash() {
    let mut map = HashMap::new();
    map.insert("MOODLENS_CLASSIFIER_URL", "http://tei.internal:3000/");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.classifier_url, "http://tei.internal:3000");
}

#[test]
fn classifier_url_without_scheme_is_invalid() {
    let mut map = HashMap::new();
    map.insert("MOODLENS_CLASSIFIER_URL", "tei.internal:3000");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MOODLENS_CLASSIFIER_URL"),
        "expected InvalidEnvVar(MOODLENS_CLASSIFIER_URL), got: {result:?}"
    );
}

#[test]
fn bare_scheme_is_invalid() {
    let mut map = HashMap::new();
    map.insert("MOODLENS_TWITTER_API_URL", "https://");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MOODLENS_TWITTER_API_URL"),
        "expected InvalidEnvVar(MOODLENS_TWITTER_API_URL), got: {result:?}"
    );
}

#[test]
fn request_timeout_override() {
    let mut map = HashMap::new();
    map.insert("MOODLENS_REQUEST_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
fn request_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("MOODLENS_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MOODLENS_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(MOODLENS_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn request_timeout_zero_is_invalid() {
    let mut map = HashMap::new();
    map.insert("MOODLENS_REQUEST_TIMEOUT_SECS", "0");
    assert!(build_app_config(lookup_from_map(&map)).is_err());
}

#[test]
fn scraper_user_agent_override() {
    let mut map = HashMap::new();
    map.insert("MOODLENS_SCRAPER_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.scraper_user_agent, "custom-agent/2.0");
}

#[test]
fn log_level_override() {
    let mut map = HashMap::new();
    map.insert("MOODLENS_LOG_LEVEL", "debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "debug");
}
