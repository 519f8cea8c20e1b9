use crate::http::cors::CorsPolicy;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_LEAD_WEBHOOK_URL: &str = "https://hooks.zapier.com/hooks/catch/14133549/ug7yfjo/";

pub const DEFAULT_SYSTEM_PROMPT: &str = "\
You are a friendly assistant for ROMA Heating & Cooling in Greater Vancouver.
Keep replies short and natural.
Help users explain their heating/boiler/heat pump issue.
Gently ask for name, phone, email, and city without being pushy.
If the user shares contact info, confirm help is on the way.
";

/// Everything the relay needs, resolved once per function instance.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// `None` is reported per request as a 500, never at startup.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub system_prompt: String,
    pub lead_webhook_url: String,
    pub cors: CorsPolicy,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.into(),
            openai_model: DEFAULT_OPENAI_MODEL.into(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
            lead_webhook_url: DEFAULT_LEAD_WEBHOOK_URL.into(),
            cors: CorsPolicy::default(),
        }
    }
}

impl RelayConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            openai_api_key: env_var("OPENAI_API_KEY").or_else(|| env_var("OPENAI_KEY")),
            openai_base_url: env_var("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            openai_model: env_var("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            system_prompt: env_var("CHAT_SYSTEM_PROMPT").unwrap_or(defaults.system_prompt),
            lead_webhook_url: env_var("LEAD_WEBHOOK_URL").unwrap_or(defaults.lead_webhook_url),
            cors: env_var("CORS_ORIGIN_MODE").map(|v| CorsPolicy::parse(&v)).unwrap_or(defaults.cors),
        }
    }

    pub fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.openai_base_url.trim_end_matches('/'))
    }
}

// Blank values are treated as unset.
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
