//! Site configuration.
//!
//! Every field has a default matching the stock site markup, so a page
//! without an embedded configuration block behaves exactly like one with
//! an empty `{}` block.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    contact::FormMessages,
    error::{Result, SiteError},
};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Element ids and selectors the behaviours attach to.
    #[serde(default)]
    pub selectors: SelectorConfig,

    /// Timing and threshold settings.
    #[serde(default)]
    pub animation: AnimationConfig,

    /// Contact form copy.
    #[serde(default)]
    pub form: FormMessages,

    /// Service-dependent form fields.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Selectors and element ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Attribute carrying a page identifier on navigation elements.
    #[serde(default = "default_page_attribute")]
    pub page_attribute: String,

    /// Selector for page sections.
    #[serde(default = "default_page")]
    pub page: String,

    /// Suffix appended to a page identifier to form the section id.
    #[serde(default = "default_page_suffix")]
    pub page_suffix: String,

    /// Id of the mobile menu toggle control.
    #[serde(default = "default_menu_toggle")]
    pub menu_toggle: String,

    /// Id of the navigation panel.
    #[serde(default = "default_nav_menu")]
    pub nav_menu: String,

    /// Id of the navbar root.
    #[serde(default = "default_navbar")]
    pub navbar: String,

    /// Selector for animated stat counters.
    #[serde(default = "default_counter")]
    pub counter: String,

    /// Attribute holding a counter's target value.
    #[serde(default = "default_counter_attribute")]
    pub counter_attribute: String,

    /// Selector for elements revealed on scroll.
    #[serde(default = "default_reveal")]
    pub reveal: String,

    /// Selector for buttons that get a ripple.
    #[serde(default = "default_button")]
    pub button: String,

    /// Id of the contact form.
    #[serde(default = "default_contact_form")]
    pub contact_form: String,

    /// Id of the form status area.
    #[serde(default = "default_form_status")]
    pub form_status: String,

    /// Selector of the submit control, relative to the form.
    #[serde(default = "default_submit_button")]
    pub submit_button: String,
}

/// Timings and visibility thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Vertical offset (px) past which the navbar is styled as scrolled.
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: f64,

    /// Interval between counter ticks in milliseconds.
    #[serde(default = "default_counter_tick_ms")]
    pub counter_tick_ms: u32,

    /// Number of increments a counter takes to reach its target.
    #[serde(default = "default_counter_steps")]
    pub counter_steps: u32,

    /// Visible fraction that starts a counter.
    #[serde(default = "default_counter_visibility")]
    pub counter_visibility: f64,

    /// Visible fraction that reveals a fade element.
    #[serde(default = "default_reveal_visibility")]
    pub reveal_visibility: f64,

    /// Delay before the page-load fade starts, in milliseconds.
    #[serde(default = "default_page_fade_delay_ms")]
    pub page_fade_delay_ms: u32,

    /// Lifetime of a button ripple in milliseconds.
    #[serde(default = "default_ripple_lifetime_ms")]
    pub ripple_lifetime_ms: u32,
}

/// Service dropdown and its dependent fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Id of the service selection control.
    #[serde(default = "default_service_select")]
    pub select: String,

    /// Id of the container wrapping the dependent fields.
    #[serde(default = "default_service_container")]
    pub container: String,

    /// Ids of the dependent fields.
    #[serde(default = "default_service_fields")]
    pub fields: Vec<String>,

    /// Selection value that reveals the dependent fields.
    #[serde(default = "default_service_sentinel")]
    pub sentinel: String,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_page_attribute() -> String {
    "data-page".to_string()
}

fn default_page() -> String {
    ".page".to_string()
}

fn default_page_suffix() -> String {
    "-page".to_string()
}

fn default_menu_toggle() -> String {
    "mobile-menu-toggle".to_string()
}

fn default_nav_menu() -> String {
    "nav-menu".to_string()
}

fn default_navbar() -> String {
    "navbar".to_string()
}

fn default_counter() -> String {
    ".stat-number[data-target]".to_string()
}

fn default_counter_attribute() -> String {
    "data-target".to_string()
}

fn default_reveal() -> String {
    ".stat-card, .feature-card, .service-card, .service-detail-card, .deal-category".to_string()
}

fn default_button() -> String {
    ".btn".to_string()
}

fn default_contact_form() -> String {
    "contactForm".to_string()
}

fn default_form_status() -> String {
    "formStatus".to_string()
}

fn default_submit_button() -> String {
    ".btn-submit".to_string()
}

fn default_scroll_threshold() -> f64 {
    50.0
}

fn default_counter_tick_ms() -> u32 {
    16
}

fn default_counter_steps() -> u32 {
    120
}

fn default_counter_visibility() -> f64 {
    0.5
}

fn default_reveal_visibility() -> f64 {
    0.1
}

fn default_page_fade_delay_ms() -> u32 {
    50
}

fn default_ripple_lifetime_ms() -> u32 {
    600
}

fn default_service_select() -> String {
    "service".to_string()
}

fn default_service_container() -> String {
    "flowExtraFields".to_string()
}

fn default_service_fields() -> Vec<String> {
    vec!["range".to_string(), "pipeSize".to_string()]
}

fn default_service_sentinel() -> String {
    "Flow Meter Calibration".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            selectors: SelectorConfig::default(),
            animation: AnimationConfig::default(),
            form: FormMessages::default(),
            service: ServiceConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            page_attribute: default_page_attribute(),
            page: default_page(),
            page_suffix: default_page_suffix(),
            menu_toggle: default_menu_toggle(),
            nav_menu: default_nav_menu(),
            navbar: default_navbar(),
            counter: default_counter(),
            counter_attribute: default_counter_attribute(),
            reveal: default_reveal(),
            button: default_button(),
            contact_form: default_contact_form(),
            form_status: default_form_status(),
            submit_button: default_submit_button(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: default_scroll_threshold(),
            counter_tick_ms: default_counter_tick_ms(),
            counter_steps: default_counter_steps(),
            counter_visibility: default_counter_visibility(),
            reveal_visibility: default_reveal_visibility(),
            page_fade_delay_ms: default_page_fade_delay_ms(),
            ripple_lifetime_ms: default_ripple_lifetime_ms(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            select: default_service_select(),
            container: default_service_container(),
            fields: default_service_fields(),
            sentinel: default_service_sentinel(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Console log level filter, `Info` when `log_level` is not recognised.
    pub fn log_level(&self) -> log::LevelFilter {
        self.parsed_log_level().unwrap_or(log::LevelFilter::Info)
    }

    /// The configured level, or `None` when `log_level` is not recognised.
    /// Checked after the logger is installed so the warning is visible.
    pub fn parsed_log_level(&self) -> Option<log::LevelFilter> {
        log::LevelFilter::from_str(&self.log_level).ok()
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        let animation = &self.animation;

        if animation.counter_steps == 0 {
            return Err(SiteError::config("animation.counter_steps must be positive"));
        }

        if animation.counter_tick_ms == 0 {
            return Err(SiteError::config("animation.counter_tick_ms must be positive"));
        }

        for (name, value) in [
            ("counter_visibility", animation.counter_visibility),
            ("reveal_visibility", animation.reveal_visibility),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SiteError::config(format!(
                    "animation.{name} must be between 0 and 1"
                )));
            }
        }

        if self.selectors.page_attribute.is_empty() {
            return Err(SiteError::config("selectors.page_attribute cannot be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SiteConfig::from_json("{}").expect("parse config");

        assert_eq!(config.selectors.page_attribute, "data-page");
        assert_eq!(config.selectors.page_suffix, "-page");
        assert_eq!(config.selectors.contact_form, "contactForm");
        assert_eq!(config.animation.scroll_threshold, 50.0);
        assert_eq!(config.animation.counter_steps, 120);
        assert_eq!(config.animation.counter_tick_ms, 16);
        assert_eq!(config.animation.ripple_lifetime_ms, 600);
        assert_eq!(config.form.sending, "Sending...");
        assert_eq!(config.service.sentinel, "Flow Meter Calibration");
        assert_eq!(config.service.fields, vec!["range", "pipeSize"]);
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn test_load_overrides() {
        let json = r#"{
            "selectors": { "navbar": "top-bar" },
            "animation": { "scroll_threshold": 80, "counter_steps": 60 },
            "form": { "success": "Thanks!" },
            "log_level": "debug"
        }"#;

        let config = SiteConfig::from_json(json).expect("parse config");

        assert_eq!(config.selectors.navbar, "top-bar");
        assert_eq!(config.selectors.nav_menu, "nav-menu");
        assert_eq!(config.animation.scroll_threshold, 80.0);
        assert_eq!(config.animation.counter_steps, 60);
        assert_eq!(config.form.success, "Thanks!");
        assert_eq!(config.form.failure, "Failed to send message.");
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_default_impl_matches_empty_json() {
        let from_default = SiteConfig::default();
        let from_json = SiteConfig::from_json("{}").expect("parse config");

        assert_eq!(from_default.selectors.reveal, from_json.selectors.reveal);
        assert_eq!(from_default.service.container, from_json.service.container);
        assert_eq!(from_default.log_level, from_json.log_level);
    }

    #[test]
    fn test_config_validation_zero_steps() {
        let result = SiteConfig::from_json(r#"{ "animation": { "counter_steps": 0 } }"#);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("counter_steps must be positive")
        );
    }

    #[test]
    fn test_config_validation_threshold_range() {
        let result = SiteConfig::from_json(r#"{ "animation": { "reveal_visibility": 1.5 } }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_json() {
        let result = SiteConfig::from_json("{ not json");
        assert!(matches!(result, Err(SiteError::Json(_))));
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = SiteConfig::from_json(r#"{ "log_level": "chatty" }"#).expect("parse config");
        assert_eq!(config.parsed_log_level(), None);
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn test_default_log_level_is_known() {
        let config = SiteConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.parsed_log_level(), Some(log::LevelFilter::Info));
    }
}
