use super::{
    database_config::DatabaseSettings, openai_config::OpenAIConfig, server_config::ServerConfig,
};

/// Everything read from the environment at startup. Immutable afterwards.
pub struct AppConfig {
    pub server: ServerConfig,
    pub openai: OpenAIConfig,
    pub database: DatabaseSettings,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            openai: OpenAIConfig::from_env(),
            database: DatabaseSettings::from_env(),
        }
    }
}
