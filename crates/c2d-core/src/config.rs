//! Demo configuration.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Where to draw, what to draw, and how loud to log about it.
///
/// Every field is optional in JSON; missing keys take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct DemoConfig {
    /// CSS selector of the target `<canvas>`, resolved under `<body>`.
    pub canvas_selector: String,
    /// Image to load and blit.
    pub image_path: String,
    /// `log` level name (`"off"`, `"error"`, ... `"trace"`).
    pub log_level: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            canvas_selector: "#main_canvas".to_string(),
            image_path: "./image/color.jpg".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl DemoConfig {
    /// Parse a JSON object such as `{"imagePath": "./image/other.png"}`.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid demo config: {e}"))
    }

    /// Parsed log level; unknown names fall back to `Info`.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}
