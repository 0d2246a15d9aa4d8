//! Client configuration for worldstate endpoints and cache policy.

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.tenno.tools/worldstate";
pub const DEFAULT_FALLBACK_BASE: &str = "https://api.warframestat.us";
pub const DEFAULT_USER_AGENT: &str = "eyeframe-worldstate";
pub const DEFAULT_FRESHNESS_MS: u64 = 5_000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Game platform the worldstate endpoint is scoped to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Pc,
    Ps4,
    Xb1,
    Swi,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Pc => "pc",
            Platform::Ps4 => "ps4",
            Platform::Xb1 => "xb1",
            Platform::Swi => "swi",
        }
    }
}

/// Represents the worldstate client configuration: endpoint bases, platform,
/// HTTP timeouts, the cache freshness window and the explicit offline demo
/// switch that substitutes a fixture document for the network.
#[derive(Clone, Debug)]
pub struct WorldstateConfig {
    pub base_url: String,
    pub fallback_url: Option<String>,
    pub platform: Platform,
    pub user_agent: String,
    pub freshness: Duration,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub offline_demo: bool,
}

impl WorldstateConfig {
    pub fn new(platform: Platform) -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            fallback_url: Some(DEFAULT_FALLBACK_BASE.to_string()),
            platform,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            freshness: Duration::from_millis(DEFAULT_FRESHNESS_MS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            offline_demo: false,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_fallback_url(mut self, fallback_url: impl Into<String>) -> Self {
        self.fallback_url = Some(fallback_url.into());
        self
    }

    pub fn without_fallback(mut self) -> Self {
        self.fallback_url = None;
        self
    }

    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    pub fn with_freshness(mut self, duration: Duration) -> Self {
        self.freshness = duration;
        self
    }

    pub fn with_timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    pub fn with_connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = duration;
        self
    }

    pub fn with_offline_demo(mut self, enabled: bool) -> Self {
        self.offline_demo = enabled;
        self
    }

    /// Full primary endpoint for the configured platform.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.platform.as_str()
        )
    }

    /// Full fallback endpoint, when a fallback base is configured.
    pub fn fallback_endpoint(&self) -> Option<String> {
        self.fallback_url
            .as_ref()
            .map(|base| format!("{}/{}", base.trim_end_matches('/'), self.platform.as_str()))
    }
}
