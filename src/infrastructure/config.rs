// Configuration - Defaults, config file and environment overrides
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

const CONFIG_FILE: &str = "config/dashboard";
const ENV_PREFIX: &str = "DASHBOARD";

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub refresh: RefreshSettings,
    pub sources: SourceSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RefreshSettings {
    pub interval_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
    pub phishing: PathBuf,
    pub ids_threats: PathBuf,
}

impl DashboardConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh.interval_ms)
    }
}

fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
    config::Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8050_i64)?
        .set_default("refresh.interval_ms", 60_000_i64)?
        .set_default("sources.phishing", "phishing.csv")?
        .set_default("sources.ids_threats", "ids_threats.csv")
}

fn finish(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> anyhow::Result<DashboardConfig> {
    let config: DashboardConfig = builder.build()?.try_deserialize()?;
    if config.refresh.interval_ms == 0 {
        anyhow::bail!("refresh.interval_ms must be greater than 0");
    }
    Ok(config)
}

/// `DASHBOARD_*` variables; nested keys use `__`, e.g. `DASHBOARD_REFRESH__INTERVAL_MS`
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

fn layered<F>(file: F, env: config::Environment) -> anyhow::Result<DashboardConfig>
where
    F: config::Source + Send + Sync + 'static,
{
    finish(defaults()?.add_source(file).add_source(env))
}

/// Defaults, then `config/dashboard.*` if present, then environment variables
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    layered(
        config::File::with_name(CONFIG_FILE).required(false),
        environment(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn load_dashboard_config_from(path: &std::path::Path) -> anyhow::Result<DashboardConfig> {
        finish(defaults()?.add_source(config::File::from(path)))
    }

    #[test]
    fn test_defaults() {
        let config = finish(defaults().unwrap()).unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8050");
        assert_eq!(config.refresh_interval(), Duration::from_secs(60));
        assert_eq!(config.sources.phishing, PathBuf::from("phishing.csv"));
        assert_eq!(config.sources.ids_threats, PathBuf::from("ids_threats.csv"));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dashboard.toml");
        fs::write(
            &path,
            "[refresh]\ninterval_ms = 5000\n\n[sources]\nphishing = \"data/phishing.csv\"\n",
        )
        .unwrap();

        let config = load_dashboard_config_from(&path).unwrap();
        assert_eq!(config.refresh_interval(), Duration::from_millis(5000));
        assert_eq!(config.sources.phishing, PathBuf::from("data/phishing.csv"));
        assert_eq!(config.sources.ids_threats, PathBuf::from("ids_threats.csv"));
        assert_eq!(config.server.port, 8050);
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dashboard.toml");
        fs::write(
            &path,
            "[refresh]\ninterval_ms = 30000\n\n[server]\nport = 9000\n",
        )
        .unwrap();

        let vars: config::Map<String, String> = [
            ("DASHBOARD_REFRESH__INTERVAL_MS", "5000"),
            ("DASHBOARD_SOURCES__IDS_THREATS", "feeds/ids.csv"),
            ("OTHER_SERVER__PORT", "1"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = layered(
            config::File::from(path.as_path()),
            environment().source(Some(vars)),
        )
        .unwrap();
        assert_eq!(config.refresh_interval(), Duration::from_millis(5000));
        assert_eq!(config.sources.ids_threats, PathBuf::from("feeds/ids.csv"));
        assert_eq!(config.sources.phishing, PathBuf::from("phishing.csv"));
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dashboard.toml");
        fs::write(&path, "[refresh]\ninterval_ms = 0\n").unwrap();

        assert!(load_dashboard_config_from(&path).is_err());
    }
}
