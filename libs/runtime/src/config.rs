use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::paths::home_dir::resolve_home_dir;

/// Main application configuration with strongly-typed global sections
/// and a flexible per-module configuration bag.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Core server configuration.
    pub server: ServerConfig,
    /// Logging configuration (optional, uses defaults if None).
    pub logging: Option<LoggingConfig>,
    /// Directory containing per-module YAML files (optional).
    #[serde(default)]
    pub modules_dir: Option<String>,
    /// Per-module configuration bag: module_name → arbitrary JSON/YAML value.
    #[serde(default)]
    pub modules: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub home_dir: String, // normalized to an absolute path on load
    pub host: String,
    pub port: u16,
    /// Graceful shutdown deadline in seconds; 0 waits for in-flight requests indefinitely.
    #[serde(default)]
    pub timeout_sec: u64,
}

/// Logging configuration - maps subsystem names to their logging settings.
/// Key "default" is the catch-all for logs that don't match explicit subsystems.
pub type LoggingConfig = HashMap<String, Section>;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Section {
    pub console_level: String, // "info", "debug", "error", "off"
    pub file: String,          // "logs/directory.log", empty disables the file sink
    #[serde(default)]
    pub file_level: String,
    #[serde(default)]
    pub max_backups: Option<usize>,
    #[serde(default)]
    pub max_size_mb: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            // Empty => platform default, see `resolve_home_dir`.
            home_dir: String::new(),
            host: "127.0.0.1".to_string(),
            port: 8087,
            timeout_sec: 0,
        }
    }
}

/// Create a default logging configuration.
pub fn default_logging_config() -> LoggingConfig {
    let mut logging = HashMap::new();
    logging.insert(
        "default".to_string(),
        Section {
            console_level: "info".to_string(),
            file: "logs/directory.log".to_string(),
            file_level: "debug".to_string(),
            max_backups: Some(3),
            max_size_mb: Some(100),
        },
    );
    logging
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: Some(default_logging_config()),
            modules_dir: None,
            modules: HashMap::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration with layered loading: defaults → YAML file → environment variables.
    /// Also normalizes `server.home_dir` into an absolute path and creates the directory.
    pub fn load_layered<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        use figment::{
            providers::{Env, Format, Serialized, Yaml},
            Figment,
        };

        // Figment skips a missing YAML file silently; an explicit path must exist.
        let path = config_path.as_ref();
        if !path.is_file() {
            anyhow::bail!("Config file not found: '{}'", path.display());
        }

        // Optional sections stay None unless YAML/ENV provide them.
        let base = AppConfig {
            logging: None,
            ..AppConfig::default()
        };

        let figment = Figment::new()
            .merge(Serialized::defaults(base))
            .merge(Yaml::file(config_path.as_ref()))
            // APP__SERVER__PORT=9000 maps to server.port
            .merge(Env::prefixed("APP__").split("__"));

        let mut config: AppConfig = figment
            .extract()
            .with_context(|| {
                format!(
                    "Failed to load config from '{}'",
                    config_path.as_ref().display()
                )
            })?;

        normalize_home_dir_inplace(&mut config.server)
            .context("Failed to resolve server.home_dir")?;

        if let Some(dir) = config.modules_dir.clone() {
            merge_module_files(&mut config.modules, dir)?;
        }

        Ok(config)
    }

    /// Load configuration from file or fall back to defaults.
    /// Either way `server.home_dir` ends up absolute and existing.
    pub fn load_or_default<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_layered(path),
            None => {
                let mut c = Self::default();
                normalize_home_dir_inplace(&mut c.server)
                    .context("Failed to resolve server.home_dir (defaults)")?;
                Ok(c)
            }
        }
    }

    /// Typed view of one module's section. A missing section yields `T::default()`.
    pub fn module_config<T>(&self, module_name: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        match self.modules.get(module_name) {
            None | Some(serde_json::Value::Null) => Ok(T::default()),
            Some(raw) => serde_json::from_value(raw.clone())
                .with_context(|| format!("Invalid configuration for module '{module_name}'")),
        }
    }

    /// Absolute home directory (valid after `load_*`).
    pub fn home_dir(&self) -> PathBuf {
        PathBuf::from(&self.server.home_dir)
    }

    /// Serialize configuration to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize config to YAML")
    }

    /// Apply overrides from command line arguments.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(port) = args.port {
            self.server.port = port;
        }

        let logging = self.logging.get_or_insert_with(default_logging_config);
        if let Some(default_section) = logging.get_mut("default") {
            match args.verbose {
                0 => {}
                1 => default_section.console_level = "debug".to_string(),
                _ => default_section.console_level = "trace".to_string(),
            }
        }
    }
}

/// Command line arguments relevant to configuration.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub port: Option<u16>,
    pub verbose: u8,
}

const DEFAULT_HOME_SUBDIR: &str = ".user-directory";

fn normalize_home_dir_inplace(server: &mut ServerConfig) -> Result<()> {
    let configured = if server.home_dir.trim().is_empty() {
        None
    } else {
        Some(server.home_dir.clone())
    };

    let resolved = resolve_home_dir(configured, DEFAULT_HOME_SUBDIR, true)
        .context("home_dir normalization failed")?;

    server.home_dir = resolved.to_string_lossy().to_string();
    Ok(())
}

/// Merge every `<module>.yaml|yml` from `dir` into the bag; file content wins.
fn merge_module_files(
    bag: &mut HashMap<String, serde_json::Value>,
    dir: impl AsRef<Path>,
) -> Result<()> {
    use std::fs;
    let dir = dir.as_ref();
    if !dir.exists() {
        tracing::debug!(dir = %dir.display(), "modules_dir does not exist, skipping");
        return Ok(());
    }
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let is_yaml = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"))
            .unwrap_or(false);
        if !is_yaml {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|s| s.to_str()).map(str::to_owned) else {
            continue;
        };
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read module config '{}'", path.display()))?;
        let val: serde_yaml::Value = serde_yaml::from_str(&raw)
            .with_context(|| format!("Invalid YAML in '{}'", path.display()))?;
        bag.insert(name, serde_json::to_value(val)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(deny_unknown_fields)]
    struct SampleConfig {
        #[serde(default)]
        enabled: bool,
        #[serde(default)]
        label: String,
    }

    #[test]
    fn test_default_config_structure() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8087);
        assert_eq!(config.server.home_dir, "");
        assert_eq!(config.server.timeout_sec, 0);

        let logging = config.logging.as_ref().unwrap();
        let default_section = &logging["default"];
        assert_eq!(default_section.console_level, "info");
        assert_eq!(default_section.file, "logs/directory.log");

        assert!(config.modules.is_empty());
    }

    #[test]
    fn test_load_layered_reads_yaml_and_normalizes_home() {
        let tmp = tempdir().unwrap();
        let cfg_path = tmp.path().join("cfg.yaml");
        let home = tmp.path().join("home");

        let yaml = format!(
            r#"
server:
  home_dir: "{}"
  host: "0.0.0.0"
  port: 9090
  timeout_sec: 30

logging:
  default:
    console_level: debug
    file: "logs/default.log"

modules:
  users_directory:
    max_name_length: 64
"#,
            home.to_string_lossy().replace('\\', "/")
        );
        fs::write(&cfg_path, yaml).unwrap();

        let config = AppConfig::load_layered(&cfg_path).unwrap();

        assert!(Path::new(&config.server.home_dir).is_absolute());
        assert!(home.is_dir(), "home_dir must be created on load");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.timeout_sec, 30);

        let def = &config.logging.as_ref().unwrap()["default"];
        assert_eq!(def.console_level, "debug");
        assert_eq!(def.file, "logs/default.log");

        assert_eq!(config.modules["users_directory"]["max_name_length"], 64);
    }

    #[test]
    fn test_minimal_yaml_leaves_optional_sections_empty() {
        let tmp = tempdir().unwrap();
        let cfg_path = tmp.path().join("cfg.yaml");
        let yaml = format!(
            "server:\n  home_dir: \"{}\"\n  host: \"localhost\"\n  port: 8080\n",
            tmp.path().join("h").to_string_lossy().replace('\\', "/")
        );
        fs::write(&cfg_path, yaml).unwrap();

        let config = AppConfig::load_layered(&cfg_path).unwrap();
        assert_eq!(config.server.host, "localhost");
        assert_eq!(config.server.port, 8080);
        assert!(config.logging.is_none());
        assert!(config.modules.is_empty());
    }

    #[test]
    fn test_env_overrides_yaml() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "cfg.yaml",
                "server:\n  home_dir: \"home\"\n  host: \"127.0.0.1\"\n  port: 8080\n",
            )?;
            jail.set_env("APP__SERVER__PORT", "9999");

            let config = AppConfig::load_layered("cfg.yaml").map_err(|e| e.to_string())?;
            assert_eq!(config.server.port, 9999);
            assert!(config.server.home_dir.ends_with("home"));
            Ok(())
        });
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let tmp = tempdir().unwrap();
        let err = AppConfig::load_layered(tmp.path().join("absent.yaml")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_unknown_server_field_is_rejected() {
        let tmp = tempdir().unwrap();
        let cfg_path = tmp.path().join("cfg.yaml");
        fs::write(
            &cfg_path,
            "server:\n  home_dir: \"h\"\n  host: \"x\"\n  port: 1\n  bogus: true\n",
        )
        .unwrap();

        assert!(AppConfig::load_layered(&cfg_path).is_err());
    }

    #[test]
    fn test_module_config_typed_access() {
        let mut config = AppConfig::default();
        assert_eq!(
            config.module_config::<SampleConfig>("sample").unwrap(),
            SampleConfig::default()
        );

        config.modules.insert(
            "sample".to_string(),
            serde_json::json!({ "enabled": true, "label": "x" }),
        );
        let sample: SampleConfig = config.module_config("sample").unwrap();
        assert!(sample.enabled);
        assert_eq!(sample.label, "x");

        config
            .modules
            .insert("sample".to_string(), serde_json::json!({ "nope": 1 }));
        assert!(config.module_config::<SampleConfig>("sample").is_err());
    }

    #[test]
    fn test_cli_verbose_levels_matrix() {
        for (verbose, expected) in [(0, "info"), (1, "debug"), (2, "trace"), (3, "trace")] {
            let mut config = AppConfig::default();
            let args = CliArgs {
                port: Some(3000),
                verbose,
                ..CliArgs::default()
            };
            config.apply_cli_overrides(&args);

            assert_eq!(config.server.port, 3000);
            let default_section = &config.logging.as_ref().unwrap()["default"];
            assert_eq!(default_section.console_level, expected);
        }
    }

    #[test]
    fn test_modules_dir_files_are_merged() {
        let tmp = tempdir().unwrap();
        let cfg_path = tmp.path().join("cfg.yaml");
        let modules_dir = tmp.path().join("modules");
        fs::create_dir_all(&modules_dir).unwrap();
        fs::write(
            modules_dir.join("users_directory.yaml"),
            "storage:\n  kind: json_file\n  path: data/users.json\n",
        )
        .unwrap();
        fs::write(modules_dir.join("notes.txt"), "ignored").unwrap();

        let yaml = format!(
            r#"
server:
  home_dir: "{home}"
  host: "127.0.0.1"
  port: 8087

modules_dir: "{dir}"

modules:
  api_ingress:
    enable_docs: true
"#,
            home = tmp.path().join("h").to_string_lossy().replace('\\', "/"),
            dir = modules_dir.to_string_lossy().replace('\\', "/"),
        );
        fs::write(&cfg_path, yaml).unwrap();

        let config = AppConfig::load_layered(&cfg_path).unwrap();
        assert_eq!(config.modules["api_ingress"]["enable_docs"], true);
        assert_eq!(
            config.modules["users_directory"]["storage"]["kind"],
            "json_file"
        );
        assert!(!config.modules.contains_key("notes"));
    }

    #[test]
    fn test_to_yaml_roundtrip_basic() {
        let config = AppConfig::default();
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("server:"));
        assert!(yaml.contains("logging:"));

        let roundtrip: AppConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(roundtrip.server.port, config.server.port);
    }

    #[test]
    fn test_invalid_yaml_missing_required_field() {
        let invalid_yaml = r#"
server:
  home_dir: "~/.test"
  port: 8087
"#;
        let result: Result<AppConfig, _> = serde_yaml::from_str(invalid_yaml);
        assert!(result.is_err());
    }
}
