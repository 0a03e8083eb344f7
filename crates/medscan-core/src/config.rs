use crate::app_config::AppConfig;
use crate::language::Language;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_f32 = |var: &str, default: &str| -> Result<f32, ConfigError> {
        or_default(var, default)
            .parse::<f32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let log_level = or_default("MEDSCAN_LOG_LEVEL", "info");

    let vision_api_key = lookup("GROQ_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty());
    let vision_base_url = or_default("MEDSCAN_VISION_BASE_URL", "https://api.groq.com/openai/v1");
    let vision_model = or_default(
        "MEDSCAN_VISION_MODEL",
        "meta-llama/llama-4-scout-17b-16e-instruct",
    );
    let vision_temperature = parse_f32("MEDSCAN_VISION_TEMPERATURE", "0.3")?;
    if !(0.0..=2.0).contains(&vision_temperature) {
        return Err(invalid(
            "MEDSCAN_VISION_TEMPERATURE",
            format!("{vision_temperature} is outside 0.0..=2.0"),
        ));
    }
    let vision_max_tokens = parse_u32("MEDSCAN_VISION_MAX_TOKENS", "1024")?;

    let registry_base_url = or_default("MEDSCAN_REGISTRY_BASE_URL", "https://api.fda.gov");
    let request_timeout_secs = parse_u64("MEDSCAN_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("MEDSCAN_USER_AGENT", "medscan/0.1 (medicine-label-scanner)");

    let language = or_default("MEDSCAN_LANGUAGE", "English")
        .parse::<Language>()
        .map_err(|e| invalid("MEDSCAN_LANGUAGE", e.to_string()))?;

    Ok(AppConfig {
        log_level,
        vision_api_key,
        vision_base_url,
        vision_model,
        vision_temperature,
        vision_max_tokens,
        registry_base_url,
        request_timeout_secs,
        user_agent,
        language,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
