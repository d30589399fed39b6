// ── Proxy location ───────────────────────────────────────────────────────────

use std::path::Path;

pub const DEFAULT_PORT: &str = "8080";
pub const PORT_ENV_VAR: &str = "CC_FLUX_PORT";

/// `.env` files checked in order. Covers running from `tui/`, from the repo root,
/// and from inside `proxy/`.
pub const PORT_FILE_CANDIDATES: &[&str] = &["../proxy/.env", "proxy/.env", "./.env"];

/// Where the proxy's admin API lives. Resolved once at startup and passed around by value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProxyConfig {
    pub base_url: String,
}

impl ProxyConfig {
    pub fn from_port(port: &str) -> Self {
        Self {
            base_url: format!("http://localhost:{port}"),
        }
    }

    pub fn from_env() -> Self {
        let env_override = std::env::var(PORT_ENV_VAR).ok();
        let port = resolve_port(env_override.as_deref(), PORT_FILE_CANDIDATES);
        Self::from_port(&port)
    }

    pub fn config_url(&self) -> String {
        format!("{}/config", self.base_url)
    }
}

/// Env override, then the first readable candidate file, then the default.
///
/// A readable file without a `PORT=` line still decides the outcome: later
/// candidates are not consulted and the default port is used.
pub fn resolve_port<P: AsRef<Path>>(env_override: Option<&str>, candidates: &[P]) -> String {
    if let Some(port) = env_override.map(str::trim).filter(|p| !p.is_empty()) {
        tracing::debug!(%port, env_var = PORT_ENV_VAR, "proxy port taken from environment");
        return port.to_string();
    }

    for candidate in candidates {
        let path = candidate.as_ref();
        if let Ok(content) = std::fs::read_to_string(path) {
            let port = parse_env_port(&content).unwrap_or_else(|| DEFAULT_PORT.to_string());
            tracing::debug!(%port, path = %path.display(), "proxy port taken from env file");
            return port;
        }
    }

    tracing::debug!(port = %DEFAULT_PORT, "no port override found, using default");
    DEFAULT_PORT.to_string()
}

/// Pull the value of the first `PORT=` line out of a dotenv-style file.
pub fn parse_env_port(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("PORT="))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
