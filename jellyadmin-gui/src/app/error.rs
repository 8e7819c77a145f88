use std::convert::From;

use jellyadmin::api::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Api(ApiError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Api(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ApiError> for Error {
    fn from(error: ApiError) -> Self {
        Error::Api(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_api_error() {
        let err: Error = ApiError::Http(Some(401), "Unauthorized".to_string()).into();
        assert_eq!(err.to_string(), "The server refused the access token");
    }
}
