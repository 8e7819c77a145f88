pub mod http;

use std::fmt::Debug;

use async_trait::async_trait;

use crate::model::Device;

pub use http::HttpClient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Something was wrong with the http communication, or the server
    /// answered with a non success status.
    Http(Option<u16>, String),
    /// The server answer could not be decoded.
    Parse(String),
    /// Something unexpected happened.
    Unexpected(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Http(Some(401), _) => write!(f, "The server refused the access token"),
            Self::Http(Some(code), e) if e.is_empty() => write!(f, "Http error: [{}]", code),
            Self::Http(Some(code), e) => write!(f, "Http error: [{}] {}", code, e),
            Self::Http(None, e) => write!(f, "Failed to reach the server: {}", e),
            Self::Parse(e) => write!(f, "Unexpected server answer: {}", e),
            Self::Unexpected(e) => write!(f, "Unexpected error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Parse(e.to_string())
        } else {
            Self::Http(e.status().map(|s| s.as_u16()), e.to_string())
        }
    }
}

impl From<http::NotSuccessResponseInfo> for ApiError {
    fn from(info: http::NotSuccessResponseInfo) -> Self {
        Self::Http(Some(info.status_code), info.text)
    }
}

/// Device administration endpoints of the media server.
#[async_trait]
pub trait JellyfinApi: Debug {
    /// Fetch the current record of a device.
    async fn get_device_info(&self, id: &str) -> Result<Device, ApiError>;
    /// Persist the custom name of a device.
    async fn update_device_options(&self, id: &str, custom_name: &str) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            ApiError::Http(Some(401), "Unauthorized".to_string()).to_string(),
            "The server refused the access token"
        );
        assert_eq!(
            ApiError::Http(Some(404), String::new()).to_string(),
            "Http error: [404]"
        );
        assert_eq!(
            ApiError::Http(Some(500), "boom".to_string()).to_string(),
            "Http error: [500] boom"
        );
        assert_eq!(
            ApiError::Http(None, "connection refused".to_string()).to_string(),
            "Failed to reach the server: connection refused"
        );
    }

    #[test]
    fn unsuccessful_response_keeps_status() {
        let err: ApiError = http::NotSuccessResponseInfo {
            status_code: 404,
            text: "Device not found".to_string(),
        }
        .into();
        assert_eq!(err, ApiError::Http(Some(404), "Device not found".to_string()));
    }
}
