use std::sync::Mutex;

use async_trait::async_trait;

use jellyadmin::{
    api::{ApiError, JellyfinApi},
    model::Device,
};

use crate::app::feedback::{Feedback, FeedbackSignal};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetDeviceInfo(String),
    UpdateDeviceOptions(String, String),
}

/// Api answering every call with the same device, or the same error.
#[derive(Debug)]
pub struct MockApi {
    response: Result<Device, ApiError>,
    calls: Mutex<Vec<Call>>,
}

impl MockApi {
    pub fn new(device: Device) -> Self {
        Self {
            response: Ok(device),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ApiError) -> Self {
        Self {
            response: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl JellyfinApi for MockApi {
    async fn get_device_info(&self, id: &str) -> Result<Device, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::GetDeviceInfo(id.to_string()));
        self.response.clone()
    }

    async fn update_device_options(&self, id: &str, custom_name: &str) -> Result<(), ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::UpdateDeviceOptions(
                id.to_string(),
                custom_name.to_string(),
            ));
        self.response.clone().map(|_| ())
    }
}

#[derive(Debug, Default)]
pub struct RecordingFeedback(Mutex<Vec<FeedbackSignal>>);

impl RecordingFeedback {
    pub fn signals(&self) -> Vec<FeedbackSignal> {
        self.0.lock().unwrap().clone()
    }
}

impl Feedback for RecordingFeedback {
    fn notify(&self, signal: FeedbackSignal) {
        self.0.lock().unwrap().push(signal);
    }
}
