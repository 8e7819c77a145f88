use async_trait::async_trait;
use reqwest::{header, Client, Response};
use tracing::{error, info};

use super::{ApiError, JellyfinApi};
use crate::model::{Device, DeviceOptions};

/// Information about an unsuccessful response.
#[derive(Debug, Clone)]
pub struct NotSuccessResponseInfo {
    pub status_code: u16,
    pub text: String,
}

#[async_trait]
pub trait ResponseExt {
    async fn check_success(self) -> Result<Self, NotSuccessResponseInfo>
    where
        Self: Sized;
}

#[async_trait]
impl ResponseExt for Response {
    async fn check_success(self) -> Result<Self, NotSuccessResponseInfo> {
        let status = self.status();
        if !status.is_success() {
            return Err(NotSuccessResponseInfo {
                status_code: status.as_u16(),
                text: self
                    .text()
                    .await
                    .unwrap_or_else(|_| "Failed to read response text".to_string()),
            });
        }
        Ok(self)
    }
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl HttpClient {
    pub fn new(base_url: &str, access_token: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorization(&self) -> String {
        authorization_header(&self.access_token)
    }
}

/// Value of the `Authorization` header expected by the server.
pub fn authorization_header(access_token: &str) -> String {
    format!(
        "MediaBrowser Client=\"{}\", Version=\"{}\", Token=\"{}\"",
        crate::CLIENT_NAME,
        crate::VERSION,
        access_token
    )
}

#[async_trait]
impl JellyfinApi for HttpClient {
    async fn get_device_info(&self, id: &str) -> Result<Device, ApiError> {
        info!("GET /Devices/Info id={}", id);
        let response = self
            .client
            .get(self.url("/Devices/Info"))
            .header(header::AUTHORIZATION, self.authorization())
            .query(&[("id", id)])
            .send()
            .await
            .map_err(|e| {
                error!("GET /Devices/Info failed: {:?}", e);
                ApiError::from(e)
            })?;
        let response = response.check_success().await.map_err(|e| {
            error!("GET /Devices/Info failed: {:?}", e);
            ApiError::from(e)
        })?;

        Ok(response.json().await?)
    }

    async fn update_device_options(&self, id: &str, custom_name: &str) -> Result<(), ApiError> {
        info!("POST /Devices/Options id={}", id);
        let response = self
            .client
            .post(self.url("/Devices/Options"))
            .header(header::AUTHORIZATION, self.authorization())
            .query(&[("id", id)])
            .json(&DeviceOptions {
                device_id: id.to_string(),
                custom_name: custom_name.to_string(),
            })
            .send()
            .await
            .map_err(|e| {
                error!("POST /Devices/Options failed: {:?}", e);
                ApiError::from(e)
            })?;
        response.check_success().await.map_err(|e| {
            error!("POST /Devices/Options failed: {:?}", e);
            ApiError::from(e)
        })?;

        Ok(())
    }
}
