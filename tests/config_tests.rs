use ccflux_tui::config::{parse_env_port, resolve_port, ProxyConfig, DEFAULT_PORT, PORT_ENV_VAR};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn env_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn missing(dir: &TempDir) -> PathBuf {
    dir.path().join("does-not-exist.env")
}

// ── parse_env_port ────────────────────────────────────────────────────────────

#[test]
fn parse_finds_port_line() {
    let content = "TARGET_PROVIDER=openai\nPORT=3000\nRETRY_ENABLED=true\n";
    assert_eq!(parse_env_port(content).as_deref(), Some("3000"));
}

#[test]
fn parse_trims_whitespace() {
    assert_eq!(parse_env_port("   PORT= 4242  \r\n").as_deref(), Some("4242"));
}

#[test]
fn parse_uses_first_port_line() {
    assert_eq!(parse_env_port("PORT=1\nPORT=2\n").as_deref(), Some("1"));
}

#[test]
fn parse_ignores_similar_keys() {
    assert_eq!(parse_env_port("PROXY_PORT=9000\n# PORT=1\n"), None);
}

#[test]
fn parse_empty_value_is_none() {
    assert_eq!(parse_env_port("PORT=\n"), None);
}

// ── resolve_port ──────────────────────────────────────────────────────────────

#[test]
fn env_override_wins_over_files() {
    let dir = TempDir::new().unwrap();
    let file = env_file(&dir, ".env", "PORT=3000\n");
    assert_eq!(resolve_port(Some("9999"), &[file]), "9999");
}

#[test]
fn blank_env_override_is_ignored() {
    let dir = TempDir::new().unwrap();
    let file = env_file(&dir, ".env", "PORT=3000\n");
    assert_eq!(resolve_port(Some("  "), &[file]), "3000");
}

#[test]
fn first_readable_file_is_used() {
    let dir = TempDir::new().unwrap();
    let first = env_file(&dir, "a.env", "PORT=3000\n");
    let second = env_file(&dir, "b.env", "PORT=4000\n");
    assert_eq!(resolve_port(None, &[missing(&dir), first, second]), "3000");
}

#[test]
fn readable_file_without_port_yields_default() {
    let dir = TempDir::new().unwrap();
    let first = env_file(&dir, "a.env", "TARGET_MODEL=gpt-4o\n");
    let second = env_file(&dir, "b.env", "PORT=4000\n");
    assert_eq!(resolve_port(None, &[first, second]), DEFAULT_PORT);
}

#[test]
fn nothing_found_yields_default() {
    let dir = TempDir::new().unwrap();
    assert_eq!(resolve_port(None, &[missing(&dir)]), "8080");
}

// ── ProxyConfig ───────────────────────────────────────────────────────────────

#[test]
fn base_url_is_built_from_port() {
    let dir = TempDir::new().unwrap();
    let file = env_file(&dir, ".env", "PORT=3000\n");

    let from_env = ProxyConfig::from_port(&resolve_port(Some("9999"), &[file.clone()]));
    assert_eq!(from_env.base_url, "http://localhost:9999");

    let from_file = ProxyConfig::from_port(&resolve_port(None, &[file]));
    assert_eq!(from_file.base_url, "http://localhost:3000");

    let fallback = ProxyConfig::from_port(&resolve_port(None, &[missing(&dir)]));
    assert_eq!(fallback.base_url, "http://localhost:8080");
}

#[test]
fn config_url_appends_endpoint() {
    let proxy = ProxyConfig::from_port("8080");
    assert_eq!(proxy.config_url(), "http://localhost:8080/config");
}

#[test]
fn from_env_honours_port_variable() {
    // only test in this binary that touches the process environment
    std::env::set_var(PORT_ENV_VAR, "9999");
    let proxy = ProxyConfig::from_env();
    std::env::remove_var(PORT_ENV_VAR);
    assert_eq!(proxy.base_url, "http://localhost:9999");
}
