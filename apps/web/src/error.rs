use thiserror::Error;

/// Everything that can go wrong between the form and the rendered cards.
/// Display strings double as the user-facing notification text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestError {
    #[error("geolocation is not supported on this device")]
    UnsupportedCapability,

    #[error("failed to acquire position: {reason}")]
    AcquisitionFailed { reason: String },

    #[error("location not resolved")]
    InvalidLocation,

    #[error("radius invalid")]
    InvalidRadius,

    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("{message}")]
    Transport { message: String },

    #[error("result is empty")]
    EmptyResult,
}
