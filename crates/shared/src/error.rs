use thiserror::Error;

/// Rejection of an inbound backend payload. A rejected payload is never
/// partially applied.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed inbound json: {0}")]
    MalformedJson(#[source] serde_json::Error),
    #[error("inbound payload has no event type")]
    MissingType,
    #[error("unknown inbound event `{0}`")]
    UnknownEvent(String),
    #[error("invalid `{event}` payload: {source}")]
    InvalidPayload {
        event: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("`{event}` payload out of range: {reason}")]
    OutOfRange { event: &'static str, reason: String },
}
