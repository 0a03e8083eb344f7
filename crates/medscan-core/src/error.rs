use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid label pattern for {label:?}: {source}")]
    InvalidLabel {
        label: String,
        #[source]
        source: regex::Error,
    },

    #[error("extraction grammar has no aliases for field {0}")]
    EmptyRule(String),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
