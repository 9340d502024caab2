use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The enumerator was constructed with arguments it can't work with.
    #[error("invalid configuration: {0}")]
    Configuration(&'static str),
    /// A residual multiset was requested for an empty symbol sequence.
    #[error("cannot index an empty symbol sequence")]
    EmptyDomain,
    /// `try_next` was called after the last element was produced.
    #[error("no more elements")]
    Exhausted,
    #[error("failed to build the thread pool: {0}")]
    ThreadPool(rayon::ThreadPoolBuildError),
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        Error::ThreadPool(e)
    }
}
