use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    /// Имитация задержки сохранения, мс
    pub simulated_latency_ms: u32,
    /// Время показа уведомления, мс (0 — не скрывать автоматически)
    pub toast_duration_ms: u32,
    /// Сколько срочных работ показывать на главной
    pub dashboard_urgent_limit: usize,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[ui]
simulated_latency_ms = 500
toast_duration_ms = 3000
dashboard_urgent_limit = 5
"#;

// Встроенный TOML разбирается всегда: см. test_default_config_loads
static DEFAULT: Lazy<AppConfig> =
    Lazy::new(|| toml::from_str(DEFAULT_CONFIG).expect("embedded default config is valid"));

impl Default for AppConfig {
    fn default() -> Self {
        DEFAULT.clone()
    }
}

/// Рекурсивно наложить `overlay` на `base`
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(over) if base.get(&key).is_some_and(toml::Value::is_table) => {
                if let Some(toml::Value::Table(inner)) = base.get_mut(&key) {
                    merge_tables(inner, over);
                }
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}

/// Load configuration
///
/// Order:
/// 1. Override TOML (во фронтенде берётся из localStorage), поверх встроенного
/// 2. Falls back to embedded default config
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<AppConfig> {
    let base: toml::Table = toml::from_str(DEFAULT_CONFIG)?;

    if let Some(contents) = override_toml.filter(|s| !s.trim().is_empty()) {
        let merged = toml::from_str::<toml::Table>(contents).and_then(|overlay| {
            let mut table = base.clone();
            merge_tables(&mut table, overlay);
            toml::Value::Table(table).try_into::<AppConfig>()
        });
        match merged {
            Ok(config) => {
                tracing::info!("Loading config from override: {:?}", config.ui);
                return Ok(config);
            }
            Err(e) => {
                tracing::warn!("Config override ignored, parse error: {}", e);
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: AppConfig = toml::Value::Table(base).try_into()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<AppConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.ui.simulated_latency_ms, 500);
    }

    #[test]
    fn test_override_is_partial() {
        let config = load_config(Some("[ui]\ntoast_duration_ms = 1000\n")).unwrap();
        assert_eq!(config.ui.toast_duration_ms, 1000);
        assert_eq!(config.ui.simulated_latency_ms, 500);
        assert_eq!(config.ui.dashboard_urgent_limit, 5);
    }

    #[test]
    fn test_override_with_wrong_type_falls_back() {
        let config = load_config(Some("[ui]\ntoast_duration_ms = \"long\"\n")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_broken_override_falls_back() {
        let config = load_config(Some("[ui\nbroken")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(load_config(None).unwrap(), AppConfig::default());
    }
}
