use thiserror::Error;

/// Errors surfaced to the capability service.
///
/// `Server` is the only error response parsing produces: the EOS MGM reported
/// a failure on `mgm.proc.stderr`. Missing optional data never lands here;
/// those paths degrade to empty maps or omitted keys instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("Server responded with error message -- {0}")]
    Server(String),

    /// A QoS description lacked a field the capability record cannot do without.
    #[error("QoS description is missing required field '{0}'")]
    MissingField(&'static str),
}
