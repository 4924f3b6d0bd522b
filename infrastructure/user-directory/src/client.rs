use reqwest::Client;

pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Shared HTTP client for the external user directory.
///
/// Built with reqwest's defaults: no timeout is set beyond what the
/// transport applies on its own.
pub struct UserDirectoryClient {
    pub client: Client,
    pub users_url: String,
}

impl UserDirectoryClient {
    pub fn new(users_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            users_url: users_url.into(),
        }
    }
}

impl Default for UserDirectoryClient {
    fn default() -> Self {
        Self::new(DEFAULT_USERS_URL)
    }
}
