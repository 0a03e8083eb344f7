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

fn assert_invalid_var(result: &Result<AppConfig, ConfigError>, expected: &str) {
    match result {
        Err(ConfigError::InvalidEnvVar { var, .. }) => assert_eq!(var, expected),
        other => panic!("expected InvalidEnvVar({expected}), got: {other:?}"),
    }
}

#[test]
fn build_app_config_ignores_unrelated_variables() {
    let mut map = HashMap::new();
    map.insert("MEDSCAN_ENV", "staging");
    map.insert("DATABASE_URL", "postgres://localhost/x");
    let cfg = build_app_config(lookup_from_map(&map)).expect("unrelated vars are ignored");
    assert_eq!(cfg.log_level, "info");
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.vision_api_key.is_none());
    assert_eq!(cfg.vision_base_url, "https://api.groq.com/openai/v1");
    assert_eq!(cfg.vision_model, "meta-llama/llama-4-scout-17b-16e-instruct");
    assert!((cfg.vision_temperature - 0.3).abs() < f32::EPSILON);
    assert_eq!(cfg.vision_max_tokens, 1024);
    assert_eq!(cfg.registry_base_url, "https://api.fda.gov");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "medscan/0.1 (medicine-label-scanner)");
    assert_eq!(cfg.language, Language::English);
}

#[test]
fn build_app_config_reads_api_key() {
    let mut map = HashMap::new();
    map.insert("GROQ_API_KEY", "gsk_test");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.vision_api_key.as_deref(), Some("gsk_test"));
}

#[test]
fn build_app_config_treats_blank_api_key_as_missing() {
    let mut map = HashMap::new();
    map.insert("GROQ_API_KEY", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.vision_api_key.is_none());
}

#[test]
fn debug_output_redacts_api_key() {
    let mut map = HashMap::new();
    map.insert("GROQ_API_KEY", "gsk_secret_value");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let debug = format!("{cfg:?}");
    assert!(!debug.contains("gsk_secret_value"), "leaked key: {debug}");
    assert!(debug.contains("[redacted]"));
}

#[test]
fn language_override() {
    let mut map = HashMap::new();
    map.insert("MEDSCAN_LANGUAGE", "spanish");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.language, Language::Spanish);
}

#[test]
fn language_invalid() {
    let mut map = HashMap::new();
    map.insert("MEDSCAN_LANGUAGE", "Esperanto");
    let result = build_app_config(lookup_from_map(&map));
    assert_invalid_var(&result, "MEDSCAN_LANGUAGE");
}

#[test]
fn request_timeout_secs_override() {
    let mut map = HashMap::new();
    map.insert("MEDSCAN_REQUEST_TIMEOUT_SECS", "60");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 60);
}

#[test]
fn request_timeout_secs_invalid() {
    let mut map = HashMap::new();
    map.insert("MEDSCAN_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert_invalid_var(&result, "MEDSCAN_REQUEST_TIMEOUT_SECS");
}

#[test]
fn vision_max_tokens_invalid() {
    let mut map = HashMap::new();
    map.insert("MEDSCAN_VISION_MAX_TOKENS", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert_invalid_var(&result, "MEDSCAN_VISION_MAX_TOKENS");
}

#[test]
fn vision_temperature_override() {
    let mut map = HashMap::new();
    map.insert("MEDSCAN_VISION_TEMPERATURE", "0.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.vision_temperature.abs() < f32::EPSILON);
}

#[test]
fn vision_temperature_out_of_range() {
    let mut map = HashMap::new();
    map.insert("MEDSCAN_VISION_TEMPERATURE", "3.5");
    let result = build_app_config(lookup_from_map(&map));
    assert_invalid_var(&result, "MEDSCAN_VISION_TEMPERATURE");
}

#[test]
fn endpoint_overrides() {
    let mut map = HashMap::new();
    map.insert("MEDSCAN_VISION_BASE_URL", "http://localhost:9000/v1");
    map.insert("MEDSCAN_REGISTRY_BASE_URL", "http://localhost:9001");
    map.insert("MEDSCAN_VISION_MODEL", "llava");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.vision_base_url, "http://localhost:9000/v1");
    assert_eq!(cfg.registry_base_url, "http://localhost:9001");
    assert_eq!(cfg.vision_model, "llava");
}
