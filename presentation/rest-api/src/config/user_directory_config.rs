use user_directory::client::DEFAULT_USERS_URL;

/// Location of the external user listing endpoint.
pub struct UserDirectoryConfig {
    pub users_url: String,
}

impl UserDirectoryConfig {
    /// Reads EXTERNAL_USERS_URL, defaulting to the public placeholder directory.
    pub fn from_env() -> Self {
        let users_url =
            std::env::var("EXTERNAL_USERS_URL").unwrap_or_else(|_| DEFAULT_USERS_URL.to_string());
        Self { users_url }
    }
}
