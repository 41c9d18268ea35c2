//! Page configuration.
//!
//! Every field has a default matching the stock dashboard markup, so an empty
//! JSON object (or no config at all) yields a working setup.

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};
use crate::ui_model::ChartCategory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_panel_class")]
    pub panel_class: String,
    #[serde(default = "default_tab_link_class")]
    pub tab_link_class: String,
    #[serde(default = "default_active_token")]
    pub active_token: String,
    #[serde(default = "default_course_select_id")]
    pub course_select_id: String,
    #[serde(default = "default_frame_id")]
    pub frame_id: String,
    #[serde(default = "default_chart_select_prefix")]
    pub chart_select_prefix: String,
    /// Require one tab link per panel when binding.
    #[serde(default = "default_true")]
    pub strict_tab_pairing: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:5819/".to_string()
}

fn default_panel_class() -> String {
    "tabcontent".to_string()
}

fn default_tab_link_class() -> String {
    "tablinks".to_string()
}

fn default_active_token() -> String {
    "active".to_string()
}

fn default_course_select_id() -> String {
    "course_select".to_string()
}

fn default_frame_id() -> String {
    "myframe".to_string()
}

fn default_chart_select_prefix() -> String {
    "chart_select_".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            panel_class: default_panel_class(),
            tab_link_class: default_tab_link_class(),
            active_token: default_active_token(),
            course_select_id: default_course_select_id(),
            frame_id: default_frame_id(),
            chart_select_prefix: default_chart_select_prefix(),
            strict_tab_pairing: default_true(),
            log_level: default_log_level(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let cfg: DashboardConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(DashboardError::InvalidConfig(format!(
                "endpoint must be an http(s) URL, got `{}`",
                self.endpoint
            )));
        }

        let tokens = [
            ("panel_class", &self.panel_class),
            ("tab_link_class", &self.tab_link_class),
            ("active_token", &self.active_token),
            ("course_select_id", &self.course_select_id),
            ("frame_id", &self.frame_id),
            ("chart_select_prefix", &self.chart_select_prefix),
        ];
        for (name, value) in tokens {
            if value.is_empty() || value.chars().any(char::is_whitespace) {
                return Err(DashboardError::InvalidConfig(format!(
                    "{name} must be a non-empty token without whitespace"
                )));
            }
        }

        if self.log_level.parse::<tracing::Level>().is_err() {
            return Err(DashboardError::InvalidConfig(format!(
                "unknown log_level `{}`",
                self.log_level
            )));
        }

        Ok(())
    }

    pub fn chart_select_id(&self, category: ChartCategory) -> String {
        category.selector_id(&self.chart_select_prefix)
    }

    /// Level for the console subscriber; falls back to INFO.
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }
}
