//! Environment variable loading.

use super::ServerConfig;

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> Result<T, String> {
    match env_string(name) {
        Some(value) => value
            .parse()
            .map_err(|_| format!("Invalid value for {name}: '{value}'")),
        None => Ok(default),
    }
}

/// Build a [`ServerConfig`] from environment variables, falling back to
/// defaults for anything unset.
pub(super) fn load() -> Result<ServerConfig, String> {
    let defaults = ServerConfig::default();

    Ok(ServerConfig {
        host: env_string("HOST").unwrap_or(defaults.host.clone()),
        port: env_parse("PORT", defaults.port)?,
        deepseek_api_key: env_string("DEEPSEEK_API_KEY"),
        elevenlabs_api_key: env_string("ELEVEN_LABS_API_KEY"),
        elevenlabs_voice_id: env_string("ELEVEN_LABS_VOICE_ID"),
        azure_speech_subscription_key: env_string("AZURE_SPEECH_KEY"),
        azure_speech_region: env_string("AZURE_SPEECH_REGION"),
        wordgen_api_url: env_string("DEEPSEEK_API_URL"),
        elevenlabs_base_url: env_string("ELEVEN_LABS_API_URL"),
        azure_speech_endpoint: env_string("AZURE_SPEECH_ENDPOINT"),
        session_capacity: env_parse("SESSION_CAPACITY", defaults.session_capacity)?,
        session_ttl_seconds: env_parse("SESSION_TTL_SECONDS", defaults.session_ttl_seconds)?,
        cors_allowed_origins: env_string("CORS_ALLOWED_ORIGINS"),
        rate_limit_requests_per_second: env_parse(
            "RATE_LIMIT_REQUESTS_PER_SECOND",
            defaults.rate_limit_requests_per_second,
        )?,
        rate_limit_burst_size: env_parse("RATE_LIMIT_BURST_SIZE", defaults.rate_limit_burst_size)?,
    })
}
