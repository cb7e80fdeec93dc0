use thiserror::Error;

/// Failure modes of a single weather lookup.
///
/// The Display output is shown to the user as-is, so variants carrying
/// a provider message render it verbatim. Nothing here is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never completed (DNS, connect, TLS, or read failure).
    #[error("network error: {0}")]
    Network(String),

    /// The provider does not recognize the requested city.
    #[error("{0}")]
    NotFound(String),

    /// The provider answered, but with an error status or a payload
    /// that does not match the expected shape.
    #[error("{0}")]
    Provider(String),
}
