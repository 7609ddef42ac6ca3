use thiserror::Error;

#[derive(Error, Debug)]
pub enum TicketGridError {
    #[error("invalid grouping '{0}'. Must be one of: status, priority, user")]
    InvalidGrouping(String),

    #[error("invalid ordering '{0}'. Must be one of: priority, title")]
    InvalidOrdering(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("ticket references unknown user '{0}'")]
    DanglingReference(String),

    #[error("ticket source returned HTTP {status} for {url}")]
    Api { status: u16, url: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, TicketGridError>;
