use std::fmt;

#[derive(Debug, Clone)]
pub enum ApiError {
    ApiCallError(String),
    AllProxiesFailed { target: String },
    MalformedFeed { symbol: String, reason: String },
    DeserializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::ApiCallError(error) => write!(f, "{}", *error),
            ApiError::AllProxiesFailed { target } => {
                write!(f, "Every forwarding endpoint failed for: {target}")
            }
            ApiError::MalformedFeed { symbol, reason } => {
                write!(f, "Feed {symbol} returned an unusable payload: {reason}")
            }
            ApiError::DeserializationError(e) => {
                write!(f, "Error during serde deserialisation: {e}")
            }
        }
    }
}
