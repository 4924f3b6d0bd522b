use super::{
    cors_config, database_config::DatabaseSettings, server_config::ServerConfig,
    user_directory_config::UserDirectoryConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
    pub user_directory: UserDirectoryConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            database: DatabaseSettings::from_env(),
            user_directory: UserDirectoryConfig::from_env(),
        }
    }
}
