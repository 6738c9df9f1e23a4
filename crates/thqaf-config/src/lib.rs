//! Site widget configuration
//!
//! This crate describes the DOM contract the widgets attach to (element ids,
//! selectors, class names), the literal strings they render and their timings.
//! Defaults reproduce the markup shipped by the site templates, so a page
//! without any configuration block behaves exactly like the stock site.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors raised while loading or validating a [`SiteConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Main configuration structure for the site widgets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Live clock widget
    pub clock: ClockConfig,
    /// Navigation dropdowns
    pub dropdown: DropdownConfig,
    /// Mobile slide-out menu and its overlay
    pub mobile_menu: MobileMenuConfig,
    /// Login modal
    pub modal: ModalConfig,
    /// Contact form counter and submit lock
    pub contact: ContactConfig,
    /// Landing page counters and FAQ
    pub landing: LandingConfig,
    /// Browser console logging
    pub logging: LoggingConfig,
}

/// Numeral system used when rendering the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Digits {
    /// Arabic-Indic digits (U+0660..U+0669)
    ArabicIndic,
    /// ASCII digits
    Latin,
}

/// Live clock configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Id of the element whose text shows the clock
    pub element_id: String,
    /// Refresh cadence in milliseconds
    pub interval_ms: u32,
    /// Fixed offset of the displayed time zone from UTC, in minutes
    pub utc_offset_minutes: i32,
    /// Text placed before the time
    pub prefix: String,
    /// Text placed after the date
    pub suffix: String,
    pub digits: Digits,
}

/// Dropdown configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    /// Selector matching every dropdown container
    pub container_selector: String,
    /// Selector of the toggle control, relative to the container
    pub toggle_selector: String,
    /// Selector of the panel, relative to the container
    pub panel_selector: String,
    /// Class added to the container while open
    pub open_class: String,
}

/// Mobile menu configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobileMenuConfig {
    /// Id of the hamburger control
    pub toggle_id: String,
    /// Id of the slide-out panel
    pub panel_id: String,
    /// Class identifying (and given to) the dimming overlay
    pub overlay_class: String,
    /// Class added to the panel while open
    pub open_class: String,
    /// Class added to the overlay while the menu is open
    pub overlay_active_class: String,
    /// Class added to `<body>` to lock scrolling while open
    pub body_lock_class: String,
}

/// Login modal configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub root_id: String,
    pub open_id: String,
    pub close_id: String,
    pub cancel_id: String,
    pub submit_id: String,
    /// Field focused when the modal opens
    pub first_field_id: String,
    /// Class added to the root while active
    pub active_class: String,
}

/// Contact form configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Selector of the message field (first match wins)
    pub message_selector: String,
    /// Id of the character counter display
    pub count_id: String,
    /// Id of the submit button
    pub send_button_id: String,
    /// Selector of the contact form
    pub form_selector: String,
    /// Label shown on the submit button once the form is sent
    pub sending_label: String,
}

/// Landing page configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Selector matching animated counters
    pub counter_selector: String,
    /// Attribute carrying a counter's numeric target
    pub target_attribute: String,
    /// Counter animation length in milliseconds
    pub duration_ms: u32,
    /// Minimum visible ratio before a counter starts
    pub threshold: f64,
    /// Selector matching the FAQ disclosure elements
    pub faq_selector: String,
}

/// Maximum level forwarded to the browser console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            element_id: "liveTime".to_string(),
            interval_ms: 1000,
            // Asia/Riyadh, no daylight saving
            utc_offset_minutes: 180,
            prefix: "الوقت الآن: ".to_string(),
            suffix: " م".to_string(),
            digits: Digits::ArabicIndic,
        }
    }
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            container_selector: ".dropdown".to_string(),
            toggle_selector: ".dropbtn".to_string(),
            panel_selector: ".dropdown-menu".to_string(),
            open_class: "open".to_string(),
        }
    }
}

impl Default for MobileMenuConfig {
    fn default() -> Self {
        Self {
            toggle_id: "hamburger".to_string(),
            panel_id: "menu".to_string(),
            overlay_class: "menu-overlay".to_string(),
            open_class: "open".to_string(),
            overlay_active_class: "active".to_string(),
            body_lock_class: "menu-lock".to_string(),
        }
    }
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            root_id: "adminModal".to_string(),
            open_id: "loginBtn".to_string(),
            close_id: "closeAdminModal".to_string(),
            cancel_id: "cancelAdminModal".to_string(),
            submit_id: "adminLoginSubmit".to_string(),
            first_field_id: "adminPhone".to_string(),
            active_class: "active".to_string(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            message_selector: "textarea".to_string(),
            count_id: "msgCount".to_string(),
            send_button_id: "sendBtn".to_string(),
            form_selector: "form.contact-form".to_string(),
            sending_label: "جاري الإرسال...".to_string(),
        }
    }
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            counter_selector: ".count[data-count-to]".to_string(),
            target_attribute: "data-count-to".to_string(),
            duration_ms: 900,
            threshold: 0.4,
            faq_selector: ".faq details".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
        }
    }
}

/// Largest UTC offset in use anywhere (UTC+14:00 / UTC-12:00 fit inside it).
const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

impl SiteConfig {
    /// Parse a TOML document and validate it. Missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from `path`, or return the defaults if the file is
    /// missing or invalid.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load_from_file(path).unwrap_or_default()
    }

    /// Serialize to pretty TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check value ranges and required names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clock.interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "clock.interval_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.clock.utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(ConfigError::Invalid {
                field: "clock.utc_offset_minutes",
                reason: format!(
                    "{} is outside +/-{MAX_UTC_OFFSET_MINUTES}",
                    self.clock.utc_offset_minutes
                ),
            });
        }
        if self.landing.duration_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "landing.duration_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.landing.threshold) {
            return Err(ConfigError::Invalid {
                field: "landing.threshold",
                reason: format!("{} is outside 0.0..=1.0", self.landing.threshold),
            });
        }

        require_non_empty("clock.element_id", &self.clock.element_id)?;
        require_non_empty("dropdown.container_selector", &self.dropdown.container_selector)?;
        require_non_empty("dropdown.toggle_selector", &self.dropdown.toggle_selector)?;
        require_non_empty("dropdown.panel_selector", &self.dropdown.panel_selector)?;
        require_non_empty("dropdown.open_class", &self.dropdown.open_class)?;
        require_non_empty("mobile_menu.toggle_id", &self.mobile_menu.toggle_id)?;
        require_non_empty("mobile_menu.panel_id", &self.mobile_menu.panel_id)?;
        require_non_empty("mobile_menu.overlay_class", &self.mobile_menu.overlay_class)?;
        require_non_empty("mobile_menu.open_class", &self.mobile_menu.open_class)?;
        require_non_empty(
            "mobile_menu.overlay_active_class",
            &self.mobile_menu.overlay_active_class,
        )?;
        require_non_empty("mobile_menu.body_lock_class", &self.mobile_menu.body_lock_class)?;
        require_non_empty("modal.root_id", &self.modal.root_id)?;
        require_non_empty("modal.open_id", &self.modal.open_id)?;
        require_non_empty("modal.active_class", &self.modal.active_class)?;
        require_non_empty("contact.message_selector", &self.contact.message_selector)?;
        require_non_empty("contact.count_id", &self.contact.count_id)?;
        require_non_empty("contact.form_selector", &self.contact.form_selector)?;
        require_non_empty("landing.counter_selector", &self.landing.counter_selector)?;
        require_non_empty("landing.target_attribute", &self.landing.target_attribute)?;
        require_non_empty("landing.faq_selector", &self.landing.faq_selector)?;
        Ok(())
    }
}
