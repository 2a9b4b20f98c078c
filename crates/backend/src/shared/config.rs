use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Insert the demo item on startup when it is missing
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: default_seed_demo_data(),
        }
    }
}

fn default_seed_demo_data() -> bool {
    true
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 8080

[database]
path = "target/db/items.db"

[catalog]
seed_demo_data = true
"#;

/// Environment variable overriding `server.port`
const PORT_ENV: &str = "HTTP_PORT";

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `HTTP_PORT`, when set to a valid port, wins over the file.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = load_file_or_default()?;
    if let Ok(raw) = std::env::var(PORT_ENV) {
        apply_port_override(&mut config, &raw);
    }
    Ok(config)
}

fn load_file_or_default() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

fn apply_port_override(config: &mut Config, raw: &str) {
    match raw.trim().parse::<u16>() {
        Ok(port) => {
            tracing::info!("{} overrides server port: {}", PORT_ENV, port);
            config.server.port = port;
        }
        Err(_) => {
            tracing::warn!("Ignoring invalid {} value: {:?}", PORT_ENV, raw);
        }
    }
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> PathBuf {
    let db_path_str = &config.database.path;
    let db_path = Path::new(db_path_str);

    if db_path.is_absolute() {
        return db_path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(db_path);
        }
    }

    // Fallback: use relative to current directory
    PathBuf::from(db_path_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.path, "target/db/items.db");
        assert!(config.catalog.seed_demo_data);
    }

    #[test]
    fn test_catalog_section_is_optional() {
        let config = parse_config(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9000

            [database]
            path = "/tmp/items.db"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9000);
        assert!(config.catalog.seed_demo_data);
        assert_eq!(get_database_path(&config), PathBuf::from("/tmp/items.db"));
    }

    #[test]
    fn test_port_override() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap();
        apply_port_override(&mut config, "9090");
        assert_eq!(config.server.port, 9090);

        apply_port_override(&mut config, "not-a-port");
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn test_missing_server_section_is_an_error() {
        assert!(parse_config("[database]\npath = \"x.db\"").is_err());
    }
}
