use chrono::{DateTime, Utc};
use jellyadmin::model::Device;

use super::{error::Error, router::Route, view, view_model::DeviceDetailResponse};

#[derive(Debug, Clone)]
pub enum Message {
    View(view::Message),
    DeviceLoaded(Result<Device, Error>),
    DeviceDetail(DeviceDetailResponse),
    Route(Route),
    Tick(DateTime<Utc>),
}

impl From<view::Message> for Message {
    fn from(msg: view::Message) -> Self {
        Message::View(msg)
    }
}
