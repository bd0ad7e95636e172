//! Build-time configuration with an optional runtime override. The runtime
//! config is read from `window.PAYFEE_CONFIG` (if present) so a static
//! deployment can point at a real application API without rebuilding.
//! Configuration values are public; do not store secrets here.

/// Delay used by the mock submission service when nothing else is configured.
pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 1_500;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the application API. Empty means submissions are mocked.
    pub api_base_url: String,
    /// Artificial latency of the mock submission service.
    pub submit_delay_ms: u32,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("PAYFEE_API_BASE_URL").unwrap_or("");
        let submit_delay_ms = option_env!("PAYFEE_SUBMIT_DELAY_MS")
            .and_then(parse_delay)
            .unwrap_or(DEFAULT_SUBMIT_DELAY_MS);

        let mut config = Self {
            api_base_url: api_base_url.trim().to_string(),
            submit_delay_ms,
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// True when submissions should go over HTTP instead of the mock.
    pub fn uses_remote_api(&self) -> bool {
        !self.api_base_url.is_empty()
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    submit_delay_ms: Option<u32>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.submit_delay_ms {
        config.submit_delay_ms = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("PAYFEE_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        submit_delay_ms: read_runtime_value(&object, "submit_delay_ms")
            .as_deref()
            .and_then(parse_delay),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

/// Reads a string or number property as trimmed text.
#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    let text = value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))?;
    normalize_runtime_value(&text)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_delay(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, DEFAULT_SUBMIT_DELAY_MS, RuntimeConfig, apply_runtime_overrides,
        normalize_runtime_value, parse_delay,
    };

    fn defaults() -> AppConfig {
        AppConfig {
            api_base_url: String::new(),
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.payfee.sl "),
            Some("https://api.payfee.sl".to_string())
        );
    }

    #[test]
    fn parse_delay_accepts_whole_milliseconds_only() {
        assert_eq!(parse_delay(" 250 "), Some(250));
        assert_eq!(parse_delay("0"), Some(0));
        assert_eq!(parse_delay("1.5"), None);
        assert_eq!(parse_delay("-1"), None);
        assert_eq!(parse_delay("soon"), None);
    }

    #[test]
    fn apply_runtime_overrides_ignores_missing_values() {
        let mut config = defaults();
        apply_runtime_overrides(&mut config, RuntimeConfig::default());

        assert_eq!(config, defaults());
        assert!(!config.uses_remote_api());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            submit_delay_ms: parse_delay("10"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.submit_delay_ms, 10);
        assert!(config.uses_remote_api());
    }
}
