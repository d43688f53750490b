//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.enumnav/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EnumNavConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub tick_rate_ms: Option<u64>,
    pub show_breadcrumbs: Option<bool>,
    pub show_help: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "enumnav.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_TICK_RATE_MS: u64 = 250;
const MIN_TICK_RATE_MS: u64 = 16;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub tick_rate_ms: u64,
    pub show_breadcrumbs: bool,
    pub show_help: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&EnumNavConfig::default(), &CliOverrides::default())
    }
}

/// Values supplied on the command line. `None` = flag not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_file: Option<PathBuf>,
    pub log_level: Option<LevelFilter>,
    pub tick_rate_ms: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.enumnav/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".enumnav").join("config.toml"))
}

/// Load config from `~/.enumnav/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `EnumNavConfig::default()`.
pub fn load_config() -> Result<EnumNavConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(EnumNavConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(EnumNavConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. A missing file is an error here,
/// since the user asked for it by name.
pub fn load_config_from(path: &Path) -> Result<EnumNavConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<EnumNavConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# EnumNav Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_file = "enumnav.log"           # Or set ENUMNAV_LOG_FILE
# log_level = "debug"                # off, error, warn, info, debug, trace (or ENUMNAV_LOG_LEVEL)

# [ui]
# tick_rate_ms = 250                 # How long the event loop waits for input when idle
# show_breadcrumbs = true            # Show the full path in the title bar
# show_help = true                   # Show key hints in the bottom bar
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &EnumNavConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| std::env::var("ENUMNAV_LOG_FILE").ok().map(PathBuf::from))
        .or_else(|| config.general.log_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .or_else(|| {
            std::env::var("ENUMNAV_LOG_LEVEL")
                .ok()
                .and_then(|s| parse_level(&s))
        })
        .or_else(|| config.general.log_level.as_deref().and_then(parse_level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Tick rate: CLI → config → default, clamped so the loop never spins
    let tick_rate_ms = cli
        .tick_rate_ms
        .or(config.ui.tick_rate_ms)
        .unwrap_or(DEFAULT_TICK_RATE_MS)
        .max(MIN_TICK_RATE_MS);

    ResolvedConfig {
        log_file,
        log_level,
        tick_rate_ms,
        show_breadcrumbs: config.ui.show_breadcrumbs.unwrap_or(true),
        show_help: config.ui.show_help.unwrap_or(true),
    }
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    match raw.trim().parse::<LevelFilter>() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Ignoring unknown log level {:?}", raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = EnumNavConfig::default();
        assert!(config.general.log_level.is_none());
        assert!(config.ui.tick_rate_ms.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = EnumNavConfig {
            general: GeneralConfig {
                log_file: Some("/tmp/nav.log".to_string()),
                log_level: Some("warn".to_string()),
            },
            ui: UiConfig {
                tick_rate_ms: Some(100),
                show_breadcrumbs: Some(false),
                show_help: Some(false),
            },
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/nav.log"));
        assert_eq!(resolved.log_level, LevelFilter::Warn);
        assert_eq!(resolved.tick_rate_ms, 100);
        assert!(!resolved.show_breadcrumbs);
        assert!(!resolved.show_help);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = EnumNavConfig {
            general: GeneralConfig {
                log_level: Some("warn".to_string()),
                ..Default::default()
            },
            ui: UiConfig {
                tick_rate_ms: Some(100),
                ..Default::default()
            },
        };
        let cli = CliOverrides {
            log_level: Some(LevelFilter::Trace),
            tick_rate_ms: Some(500),
            log_file: Some(PathBuf::from("cli.log")),
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.log_level, LevelFilter::Trace);
        assert_eq!(resolved.tick_rate_ms, 500);
        assert_eq!(resolved.log_file, PathBuf::from("cli.log"));
    }

    #[test]
    fn test_tick_rate_is_clamped() {
        let cli = CliOverrides {
            tick_rate_ms: Some(0),
            ..Default::default()
        };
        let resolved = resolve(&EnumNavConfig::default(), &cli);
        assert_eq!(resolved.tick_rate_ms, MIN_TICK_RATE_MS);
    }

    #[test]
    fn test_unknown_log_level_is_ignored() {
        assert_eq!(parse_level("loud"), None);
        assert_eq!(parse_level(" INFO "), Some(LevelFilter::Info));
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[general]
log_file = "session.log"
log_level = "info"

[ui]
tick_rate_ms = 120
show_breadcrumbs = false
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.general.log_file.as_deref(), Some("session.log"));
        assert_eq!(config.general.log_level.as_deref(), Some("info"));
        assert_eq!(config.ui.tick_rate_ms, Some(120));
        assert_eq!(config.ui.show_breadcrumbs, Some(false));
        assert!(config.ui.show_help.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let config = parse_config("[ui]\nshow_help = false\n").unwrap();
        assert_eq!(config.ui.show_help, Some(false));
        assert!(config.general.log_file.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[ui]\ntick_rate_ms = \"fast\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn test_generated_default_parses_as_empty() {
        let config = parse_config(DEFAULT_CONFIG_CONTENT).unwrap();
        assert!(config.general.log_level.is_none());
        assert!(config.ui.tick_rate_ms.is_none());
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let err = load_config_from(Path::new("/nonexistent/enumnav/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
