use serde::{Deserialize, Serialize};
use std::time::Duration;

/// API ingress configuration (`modules.api_ingress` section)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiIngressConfig {
    /// Serve `/openapi.json` and `/docs`.
    #[serde(default = "default_true")]
    pub enable_docs: bool,
    /// Permissive CORS; the browser UI is served from another origin.
    #[serde(default = "default_true")]
    pub cors_enabled: bool,
    /// Per-request handler deadline, e.g. "30s".
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

impl Default for ApiIngressConfig {
    fn default() -> Self {
        Self {
            enable_docs: true,
            cors_enabled: true,
            request_timeout: default_request_timeout(),
            body_limit_bytes: default_body_limit(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_body_limit() -> usize {
    16 * 1024 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_section_uses_defaults() {
        let cfg: ApiIngressConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg, ApiIngressConfig::default());
        assert_eq!(cfg.request_timeout, Duration::from_secs(30));
        assert_eq!(cfg.body_limit_bytes, 16 * 1024 * 1024);
    }

    #[test]
    fn humantime_timeout() {
        let cfg: ApiIngressConfig = serde_yaml::from_str(
            "enable_docs: false\ncors_enabled: false\nrequest_timeout: 1m 30s\nbody_limit_bytes: 1024\n",
        )
        .unwrap();
        assert!(!cfg.enable_docs);
        assert!(!cfg.cors_enabled);
        assert_eq!(cfg.request_timeout, Duration::from_secs(90));
        assert_eq!(cfg.body_limit_bytes, 1024);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(serde_yaml::from_str::<ApiIngressConfig>("bind_addr: 0.0.0.0:80").is_err());
    }
}
