use thiserror::Error;

pub type BuildResult<T> = Result<T, GraphiteError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphiteError {
    #[error("no targets defined")]
    NoTargetsDefined,

    #[error("unrecognized call shape: {name}({args})")]
    UnrecognizedCallShape { name: String, args: String },

    #[error("invalid construction input: {0}")]
    InvalidConstructionInput(String),

    #[error("base_url is not set")]
    MissingBaseUrl,

    #[error("invalid call name: `{0}` is not a bare identifier")]
    InvalidCallName(String),

    #[error("`{0}` is reserved and cannot be used as a parameter name")]
    ReservedParameterName(String),

    #[error("unknown binding: {0}")]
    UnknownBinding(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
