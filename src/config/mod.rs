use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:3000").
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Cloudflare account ID
    pub cf_account_id: String,

    /// Cloudflare Workers AI API token
    pub cf_api_token: String,

    /// Workers AI text-generation model used for price suggestions
    #[serde(default = "default_ai_model")]
    pub cf_ai_model: String,

    /// Cloudflare API root. Overridden in tests to point at a mock server.
    #[serde(default = "default_api_base_url")]
    pub cf_api_base_url: String,

    /// Generation budget for a single completion
    #[serde(default = "default_max_tokens")]
    pub completion_max_tokens: u32,

    /// Transport timeout for the completion call. Unset means no timeout.
    pub completion_timeout_secs: Option<u64>,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_ai_model() -> String {
    "@cf/meta/llama-3.1-8b-instruct".to_string()
}

fn default_api_base_url() -> String {
    "https://api.cloudflare.com/client/v4".to_string()
}

fn default_max_tokens() -> u32 {
    512
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }
}
