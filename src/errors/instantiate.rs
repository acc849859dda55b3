/// Error returned by a factory, or by extracting its positional arguments.
#[derive(thiserror::Error, Debug)]
pub enum InstantiateErrorKind {
    #[error("Missing argument at position {position}")]
    MissingArgument { position: usize },
    #[error("Incorrect argument type at position {position}, expected: {expected}")]
    IncorrectType { position: usize, expected: &'static str },
    #[error(transparent)]
    Custom(#[from] anyhow::Error),
}
