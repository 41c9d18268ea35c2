use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("required element `{id}` is missing from the page")]
    MissingElement { id: String },

    #[error("found {panels} panels but {links} tab links; the two must pair up")]
    TabCountMismatch { panels: usize, links: usize },

    #[error("no panel with id `{0}`")]
    UnknownPanel(String),

    #[error("chart name is empty")]
    EmptyChart,

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config is not valid JSON: {0}")]
    Config(#[from] serde_json::Error),

    #[error("dom call failed: {0}")]
    Dom(String),
}

pub type Result<T, E = DashboardError> = std::result::Result<T, E>;
