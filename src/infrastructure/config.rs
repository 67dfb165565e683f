use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_UPSTREAM_URL: &str =
    "http://www.ttss.krakow.pl/internetservice/geoserviceDispatcher/services/vehicleinfo/vehicles";
pub const DEFAULT_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_INTERVAL_SECS: u64 = 5;

#[derive(Debug, Deserialize, Clone)]
pub struct RelayConfig {
    pub upstream: UpstreamSettings,
    pub server: ServerSettings,
    pub refresh: RefreshSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamSettings {
    pub url: String,
    /// Unset means the HTTP client's own default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub address: SocketAddr,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RefreshSettings {
    pub interval_secs: u64,
}

impl UpstreamSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl RefreshSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

pub fn load_relay_config() -> anyhow::Result<RelayConfig> {
    load_from("config/relay")
}

fn load_from(name: &str) -> anyhow::Result<RelayConfig> {
    let settings = config::Config::builder()
        .set_default("upstream.url", DEFAULT_UPSTREAM_URL)?
        .set_default("server.address", DEFAULT_ADDRESS)?
        .set_default("refresh.interval_secs", DEFAULT_INTERVAL_SECS as i64)?
        .add_source(config::File::with_name(name).required(false))
        .build()?;

    let relay: RelayConfig = settings.try_deserialize()?;
    if relay.refresh.interval_secs == 0 {
        anyhow::bail!("refresh.interval_secs must be greater than zero");
    }

    Ok(relay)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let relay = load_from("config/does-not-exist").unwrap();

        assert_eq!(relay.upstream.url, DEFAULT_UPSTREAM_URL);
        assert_eq!(relay.upstream.timeout(), None);
        assert_eq!(relay.server.address.port(), 8080);
        assert_eq!(relay.refresh.interval(), Duration::from_secs(5));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("tram-relay-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("relay.toml");
        std::fs::write(
            &path,
            "[upstream]\ntimeout_secs = 3\n\n[refresh]\ninterval_secs = 10\n",
        )
        .unwrap();

        let relay = load_from(dir.join("relay").to_str().unwrap()).unwrap();

        assert_eq!(relay.upstream.url, DEFAULT_UPSTREAM_URL);
        assert_eq!(relay.upstream.timeout(), Some(Duration::from_secs(3)));
        assert_eq!(relay.refresh.interval(), Duration::from_secs(10));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_rejects_zero_interval() {
        let dir = std::env::temp_dir().join(format!("tram-relay-zero-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("relay.toml"), "[refresh]\ninterval_secs = 0\n").unwrap();

        let result = load_from(dir.join("relay").to_str().unwrap());
        assert!(result.is_err());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
