use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("color role {0} is derived and cannot be overridden")]
    DerivedRole(String),

    #[error("palette rule broken: {0}")]
    Invariant(String),

    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("unknown export format: {0}")]
    UnknownFormat(String),

    #[error("usage error: {0}")]
    Usage(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("serialize error: {0}")]
    Serialize(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
