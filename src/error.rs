use thiserror::Error;

/// Result alias used throughout the graph routines.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by graph transforms.
///
/// Failing to find a Hamiltonian path is not an error; the search reports it
/// as an empty path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A caller supplied argument is outside its valid range.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A freshly numbered vertex does not fit in the vertex id type.
    #[error("pendant vertex id overflows the vertex id type")]
    IdOverflow,
}

impl GraphError {
    /// Builds a [`GraphError::InvalidInput`] from any message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        GraphError::InvalidInput(msg.into())
    }
}
