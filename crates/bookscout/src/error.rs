#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    /// Caller-supplied input was insufficient to run the operation.
    /// Shown to the user verbatim; never a system fault.
    #[error("{0}")]
    Validation(String),

    /// A remote catalog lookup could not be satisfied. Carries the HTTP
    /// status for non-success responses; transport and parse failures get
    /// a generic message with the cause logged, not exposed.
    #[error("{message}")]
    Request {
        status: Option<u16>,
        message: String,
    },

    /// Durable storage could not be read or written. Diagnostic only:
    /// favorites store operations swallow and log it.
    #[error("Persistence error: {0}")]
    Persistence(String),
}
