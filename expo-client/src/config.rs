//! Client configuration

/// Configuration for connecting to the remote equipment store
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Store base URL (e.g., "https://store.example.com")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Read configuration from the environment (`EXPO_API_URL`,
    /// `EXPO_API_TOKEN`), with `.env` support
    pub fn from_env() -> Option<Self> {
        let _ = dotenv::dotenv();
        let base_url = std::env::var("EXPO_API_URL").ok()?;
        let mut config = Self::new(base_url);
        if let Ok(token) = std::env::var("EXPO_API_TOKEN") {
            config.token = Some(token);
        }
        Some(config)
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
