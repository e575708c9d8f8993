use deadpool::managed::BuildError;
use deadpool::managed::PoolError;
use thiserror::Error;

/// Possible errors raised when using the client against the ahnlich AI proxy
#[derive(Error, Debug)]
pub enum AhnlichError {
    #[error("std io error {0}")]
    Standard(#[from] std::io::Error),
    #[error("bincode serialize error {0}")]
    BinCodeSerAndDeser(#[from] bincode::Error),
    /// The proxy rejected one specific query within a batch. In a pipeline
    /// this only fails the entry at the matching position, never its siblings
    #[error("ai proxy error {0}")]
    AIProxyError(String),
    /// The proxy returned a result batch whose length does not match the
    /// query batch that was sent. Responses are matched to queries purely by
    /// position so there is no way to recover partial results
    #[error("sent {expected} queries but got {got} results")]
    ResponseMismatch { expected: usize, got: usize },
    /// Predicate index queries cannot be sent with nothing to index
    #[error("at least one predicate is required")]
    EmptyPredicates,
    /// Non linear index queries cannot be sent with nothing to index
    #[error("at least one non linear algorithm is required")]
    EmptyNonLinearIndices,
    #[error("empty response")]
    EmptyResponse,
    #[error("pool build error {0}")]
    PoolBuild(#[from] BuildError),
    #[error("connection pool error {0}")]
    Pool(String),
}

impl From<PoolError<AhnlichError>> for AhnlichError {
    fn from(err: PoolError<AhnlichError>) -> Self {
        match err {
            PoolError::Backend(err) => err,
            err => Self::Pool(err.to_string()),
        }
    }
}
