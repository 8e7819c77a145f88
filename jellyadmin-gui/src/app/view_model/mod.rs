mod device_detail;

pub use device_detail::{
    BackgroundState, DeviceDetailAction, DeviceDetailEvent, DeviceDetailResponse,
    DeviceDetailViewModel, Request,
};
