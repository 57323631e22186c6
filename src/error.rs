use thiserror::Error;

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Transit model error: {0}")]
    Model(#[from] busnet_core::Error),
    #[error("Malformed request document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Request document has no routing_settings and no fallback was configured")]
    MissingRoutingSettings,
}
