use thiserror::Error;

/// Errors raised at the wire boundary.
///
/// Localization and decision-making never fail; they report missing data
/// through sentinel values (`AbsolutePose::valid`, `RelativeObservation::visible`).
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            CoreError::Decode(err.to_string())
        } else {
            CoreError::Encode(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
