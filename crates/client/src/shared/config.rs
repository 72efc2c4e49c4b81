use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

/// Environment variable that overrides the backend base URL
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:5000"
"#;

/// Load configuration for the API layer
///
/// Search order:
/// 1. `API_BASE_URL` environment variable
/// 2. config.toml next to the executable (for production)
/// 3. Falls back to embedded default config
///
/// Never fails: a broken config.toml is logged and the default is used.
pub fn load_config() -> Config {
    if let Ok(url) = std::env::var(API_BASE_URL_ENV) {
        if !url.trim().is_empty() {
            return Config {
                api: ApiConfig {
                    base_url: url.trim().to_string(),
                },
            };
        }
    }

    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                match std::fs::read_to_string(&config_path)
                    .map_err(|e| e.to_string())
                    .and_then(|contents| toml::from_str::<Config>(&contents).map_err(|e| e.to_string()))
                {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to load config.toml, using defaults: {}", e);
                    }
                }
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    default_config()
}

fn default_config() -> Config {
    // Compile-time literal, covered by test_default_config_loads
    toml::from_str(DEFAULT_CONFIG).expect("embedded default config is valid")
}

/// Resolve the effective base URL from a configured one.
///
/// Local development servers speak plain HTTP: if the host is a
/// local-development target and the scheme is `https`, the scheme is forced
/// to `http` so requests don't die on a TLS handshake against a server with
/// no certificate. Non-local URLs pass through unchanged. The trailing
/// slash is trimmed either way.
pub fn resolve_base_url(raw: &str) -> String {
    let url = raw.trim().trim_end_matches('/');

    if let Some(rest) = url.strip_prefix("https://") {
        if is_local_host(host_of(rest)) {
            return format!("http://{}", rest);
        }
    }

    url.to_string()
}

/// Host part of a scheme-less URL remainder ("localhost:5000/x" -> "localhost")
fn host_of(rest: &str) -> &str {
    rest.split(['/', ':']).next().unwrap_or(rest)
}

fn is_local_host(host: &str) -> bool {
    matches!(
        host.to_ascii_lowercase().as_str(),
        "localhost" | "127.0.0.1" | "0.0.0.0"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use std::sync::Mutex;

    // std::env is process-global; serialize the tests that touch it
    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_env_var_takes_precedence() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(API_BASE_URL_ENV, "https://admin.example.com");
        let config = load_config();
        std::env::remove_var(API_BASE_URL_ENV);
        assert_eq!(config.api.base_url, "https://admin.example.com");
    }

    #[test]
    fn test_blank_env_var_is_ignored() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(API_BASE_URL_ENV, "   ");
        let config = load_config();
        std::env::remove_var(API_BASE_URL_ENV);
        assert_eq!(config.api.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_scheme_forced_for_localhost() {
        assert_eq!(
            resolve_base_url("https://localhost:5000"),
            "http://localhost:5000"
        );
        assert_eq!(
            resolve_base_url("https://127.0.0.1:5000/"),
            "http://127.0.0.1:5000"
        );
        assert_eq!(
            resolve_base_url("https://LOCALHOST:5000"),
            "http://LOCALHOST:5000"
        );
    }

    #[test]
    fn test_scheme_preserved_for_remote_hosts() {
        assert_eq!(
            resolve_base_url("https://api.example.com"),
            "https://api.example.com"
        );
        assert_eq!(
            resolve_base_url("http://localhost:5000"),
            "http://localhost:5000"
        );
        // "localhost" as a subdomain is not a local target
        assert_eq!(
            resolve_base_url("https://localhost.example.com"),
            "https://localhost.example.com"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        assert_eq!(
            resolve_base_url("https://api.example.com/"),
            "https://api.example.com"
        );
    }
}
