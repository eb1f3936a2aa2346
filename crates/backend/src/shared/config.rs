use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StaticFilesConfig {
    pub dist_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub dir: String,
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: "target/logs".to_string(),
            filter: "info,tower_http=warn".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid server.host '{}': {}", self.host, e))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl StaticFilesConfig {
    pub fn dist_path(&self) -> PathBuf {
        PathBuf::from(&self.dist_dir)
    }

    pub fn index_path(&self) -> PathBuf {
        self.dist_path().join("index.html")
    }
}

/// Where the configuration came from (logged once tracing is up)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Embedded,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[static_files]
dist_dir = "dist"

[logging]
dir = "target/logs"
filter = "info,tower_http=warn"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (build.rs copies the workspace config.toml there)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<(Config, ConfigSource)> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                let contents = std::fs::read_to_string(&config_path)?;
                let config = parse_config(&contents)?;
                return Ok((config, ConfigSource::File(config_path)));
            }
        }
    }

    Ok((parse_config(DEFAULT_CONFIG)?, ConfigSource::Embedded))
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.static_files.dist_dir, "dist");
        assert_eq!(config.logging.dir, "target/logs");
    }

    #[test]
    fn test_workspace_config_matches_default() {
        let workspace = parse_config(include_str!("../../../../config.toml")).unwrap();
        let default = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(workspace.server.port, default.server.port);
        assert_eq!(workspace.static_files.dist_dir, default.static_files.dist_dir);
    }

    #[test]
    fn test_logging_section_optional() {
        let config = parse_config(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8081

            [static_files]
            dist_dir = "/srv/shoplist"
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.filter, "info,tower_http=warn");
        assert_eq!(
            config.static_files.index_path(),
            PathBuf::from("/srv/shoplist/index.html")
        );
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        };
        assert_eq!(
            server.socket_addr().unwrap(),
            "127.0.0.1:3000".parse::<SocketAddr>().unwrap()
        );

        let bad = ServerConfig {
            host: "localhost:80".to_string(),
            port: 3000,
        };
        assert!(bad.socket_addr().is_err());
    }

    #[test]
    fn test_missing_section_is_error() {
        assert!(parse_config("[server]\nhost = \"0.0.0.0\"\nport = 1\n").is_err());
    }
}
