use crate::language::Language;

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Bearer token for the vision endpoint. Only the `scan` command needs it.
    pub vision_api_key: Option<String>,
    pub vision_base_url: String,
    pub vision_model: String,
    pub vision_temperature: f32,
    pub vision_max_tokens: u32,
    pub registry_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub language: Language,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field(
                "vision_api_key",
                &self.vision_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("vision_base_url", &self.vision_base_url)
            .field("vision_model", &self.vision_model)
            .field("vision_temperature", &self.vision_temperature)
            .field("vision_max_tokens", &self.vision_max_tokens)
            .field("registry_base_url", &self.registry_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("language", &self.language)
            .finish()
    }
}
