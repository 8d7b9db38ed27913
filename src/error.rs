use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// 配置校验失败的类别
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedInput,
    MissingField,
    UnsupportedValue,
    ConflictingKeys,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0}")]
    MalformedInput(String),
    #[error("missing content-type field under body")]
    MissingField,
    #[error("invalid content type, only application/x-www-form-urlencoded is supported")]
    UnsupportedValue { content_type: String },
    #[error("include and exclude cannot both be present")]
    ConflictingKeys { section: &'static str },
}

impl ConfigError {
    pub(crate) fn parse_error() -> Self {
        ConfigError::MalformedInput("JSON parse error in configuration".to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::MalformedInput(_) => ErrorKind::MalformedInput,
            ConfigError::MissingField => ErrorKind::MissingField,
            ConfigError::UnsupportedValue { .. } => ErrorKind::UnsupportedValue,
            ConfigError::ConflictingKeys { .. } => ErrorKind::ConflictingKeys,
        }
    }
}
