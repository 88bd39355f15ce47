//! Dashboard configuration: API endpoint and email-notification settings.
//!
//! The browser bundle cannot read the environment at runtime, so values are
//! captured with `option_env!` when the WASM crate is built. Tests go through
//! [`DashboardConfig::from_lookup`] with an in-memory map instead.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "https://renta-project.onrender.com/api";
pub const DEFAULT_EMAILJS_BASE: &str = "https://api.emailjs.com/api/v1.0";

pub const API_BASE_VAR: &str = "RENTA_API_BASE";
pub const EMAILJS_BASE_VAR: &str = "RENTA_EMAILJS_BASE";
pub const EMAILJS_SERVICE_VAR: &str = "RENTA_EMAILJS_SERVICE_ID";
pub const EMAILJS_CREATE_TEMPLATE_VAR: &str = "RENTA_EMAILJS_CREATE_TEMPLATE";
pub const EMAILJS_UPDATE_TEMPLATE_VAR: &str = "RENTA_EMAILJS_UPDATE_TEMPLATE";
pub const EMAILJS_PUBLIC_KEY_VAR: &str = "RENTA_EMAILJS_PUBLIC_KEY";

/// Errors produced while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be an http(s) URL, got '{value}'")]
    InvalidUrl { var: &'static str, value: String },
}

/// EmailJS settings. Present only when every required value is configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyConfig {
    pub base_url: String,
    pub service_id: String,
    pub create_template_id: String,
    pub update_template_id: String,
    pub public_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub api_base: String,
    pub notify: Option<NotifyConfig>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_owned(), notify: None }
    }
}

impl DashboardConfig {
    /// Configuration baked in at build time.
    ///
    /// Invalid values are logged and replaced by the defaults so a bad build
    /// variable never blanks the dashboard.
    pub fn from_build_env() -> Self {
        Self::from_lookup(build_env).unwrap_or_else(|e| {
            crate::util::console::warn(&format!("dashboard config rejected, using defaults: {e}"));
            Self::default()
        })
    }

    /// Build config from a key lookup.
    ///
    /// Optional:
    /// - `RENTA_API_BASE`: default [`DEFAULT_API_BASE`]
    /// - `RENTA_EMAILJS_BASE`: default [`DEFAULT_EMAILJS_BASE`]
    /// - `RENTA_EMAILJS_SERVICE_ID`, `RENTA_EMAILJS_CREATE_TEMPLATE`,
    ///   `RENTA_EMAILJS_PUBLIC_KEY`: all three enable notifications
    /// - `RENTA_EMAILJS_UPDATE_TEMPLATE`: defaults to the create template
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if a base URL is not http(s).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let api_base = parse_url(API_BASE_VAR, value(API_BASE_VAR), DEFAULT_API_BASE)?;

        let notify = match (
            value(EMAILJS_SERVICE_VAR),
            value(EMAILJS_CREATE_TEMPLATE_VAR),
            value(EMAILJS_PUBLIC_KEY_VAR),
        ) {
            (Some(service_id), Some(create_template_id), Some(public_key)) => Some(NotifyConfig {
                base_url: parse_url(EMAILJS_BASE_VAR, value(EMAILJS_BASE_VAR), DEFAULT_EMAILJS_BASE)?,
                service_id,
                update_template_id: value(EMAILJS_UPDATE_TEMPLATE_VAR).unwrap_or_else(|| create_template_id.clone()),
                create_template_id,
                public_key,
            }),
            _ => None,
        };

        Ok(Self { api_base, notify })
    }
}

fn parse_url(var: &'static str, raw: Option<String>, default: &str) -> Result<String, ConfigError> {
    let Some(value) = raw else {
        return Ok(default.to_owned());
    };
    if !(value.starts_with("https://") || value.starts_with("http://")) {
        return Err(ConfigError::InvalidUrl { var, value });
    }
    Ok(value.trim_end_matches('/').to_owned())
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        API_BASE_VAR => option_env!("RENTA_API_BASE"),
        EMAILJS_BASE_VAR => option_env!("RENTA_EMAILJS_BASE"),
        EMAILJS_SERVICE_VAR => option_env!("RENTA_EMAILJS_SERVICE_ID"),
        EMAILJS_CREATE_TEMPLATE_VAR => option_env!("RENTA_EMAILJS_CREATE_TEMPLATE"),
        EMAILJS_UPDATE_TEMPLATE_VAR => option_env!("RENTA_EMAILJS_UPDATE_TEMPLATE"),
        EMAILJS_PUBLIC_KEY_VAR => option_env!("RENTA_EMAILJS_PUBLIC_KEY"),
        _ => None,
    };
    value.map(str::to_owned)
}
