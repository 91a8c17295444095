pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("anchor set is empty")]
    EmptyAnchors,

    #[error("duplicate anchor name: {0}")]
    DuplicateAnchor(String),

    #[error("anchor '{name}' has position ({x}, {y}) outside [-1, 1]")]
    AnchorOutOfRange { name: String, x: f64, y: f64 },

    #[error("invalid step {0}: must be at least 1")]
    InvalidStep(u32),

    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Config(#[from] ::config::ConfigError),
}

impl Error {
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}
