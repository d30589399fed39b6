// ── Model providers ──────────────────────────────────────────────────────────

use serde::Deserialize;
use std::path::Path;

pub const PROVIDERS_FILE: &str = "providers.json";

/// A backend the proxy can route to, as listed in `providers.json`.
/// Missing string fields read as empty so one sparse entry does not discard the file.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct Provider {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "name", default)]
    pub display_name: String,
    #[serde(rename = "provider", default)]
    pub kind: String,
    #[serde(rename = "baseUrl", default)]
    pub base_url: String,
    #[serde(rename = "apiKey", default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
}

/// The single entry used when no provider list can be loaded.
pub fn default_providers() -> Vec<Provider> {
    vec![Provider {
        id: "openai".to_string(),
        display_name: "OpenAI (Default)".to_string(),
        kind: "openai".to_string(),
        base_url: "https://api.openai.com/v1".to_string(),
        api_key: None,
        model: None,
    }]
}

/// Load `providers.json` from the working directory.
pub fn load() -> Vec<Provider> {
    load_from(PROVIDERS_FILE)
}

/// Load a provider list, falling back to [`default_providers`] on any failure.
pub fn load_from(path: impl AsRef<Path>) -> Vec<Provider> {
    let path = path.as_ref();
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "provider list unavailable, using default");
            return default_providers();
        }
    };

    match serde_json::from_str::<Vec<Provider>>(&content) {
        Ok(providers) if !providers.is_empty() => {
            tracing::info!(count = providers.len(), path = %path.display(), "loaded providers");
            providers
        }
        Ok(_) => {
            tracing::warn!(path = %path.display(), "provider list is empty, using default");
            default_providers()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "provider list malformed, using default");
            default_providers()
        }
    }
}
