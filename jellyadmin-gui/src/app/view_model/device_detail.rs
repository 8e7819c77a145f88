use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use jellyadmin::{
    api::{ApiError, JellyfinApi},
    model::Device,
};

use crate::app::error::Error;

/// Pending server call, resolved through [`DeviceDetailViewModel::resolve`].
pub type Request = Pin<Box<dyn Future<Output = DeviceDetailResponse> + Send>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackgroundState {
    Refreshing,
    Updating,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceDetailAction {
    Refresh,
    SetCustomName(String),
}

#[derive(Debug, Clone)]
pub enum DeviceDetailResponse {
    Refreshed {
        /// Saved names count when the refresh was sent.
        generation: u64,
        result: Result<Device, ApiError>,
    },
    CustomNameSet {
        name: String,
        result: Result<(), ApiError>,
    },
}

/// Outcome of a request, one per custom name update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceDetailEvent {
    Error(Error),
    NameSaved,
}

/// Owns the device record. The record is only mutated in `resolve`.
#[derive(Debug)]
pub struct DeviceDetailViewModel {
    device: Device,
    background_states: HashSet<BackgroundState>,
    /// Incremented on every saved custom name. A refresh sent before a save
    /// carries a stale record and is discarded.
    generation: u64,
    events: mpsc::UnboundedSender<DeviceDetailEvent>,
}

impl DeviceDetailViewModel {
    pub fn new(device: Device) -> (Self, mpsc::UnboundedReceiver<DeviceDetailEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        (
            Self {
                device,
                background_states: HashSet::new(),
                generation: 0,
                events,
            },
            receiver,
        )
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn background_states(&self) -> &HashSet<BackgroundState> {
        &self.background_states
    }

    pub fn is_updating(&self) -> bool {
        self.background_states.contains(&BackgroundState::Updating)
    }

    /// Starts the server call for `action`. Returns `None` if the action was refused:
    /// the device has no identifier, or the same kind of call is already in flight.
    pub fn send(
        &mut self,
        action: DeviceDetailAction,
        api: Arc<dyn JellyfinApi + Sync + Send>,
    ) -> Option<Request> {
        let Some(id) = self.device.id.clone() else {
            warn!("Device has no identifier, ignoring {:?}", action);
            return None;
        };

        match action {
            DeviceDetailAction::Refresh => {
                if !self.background_states.insert(BackgroundState::Refreshing) {
                    debug!("Device {} is already refreshing", id);
                    return None;
                }
                let generation = self.generation;
                Some(Box::pin(async move {
                    DeviceDetailResponse::Refreshed {
                        generation,
                        result: api.get_device_info(&id).await,
                    }
                }))
            }
            DeviceDetailAction::SetCustomName(name) => {
                if !self.background_states.insert(BackgroundState::Updating) {
                    warn!("Custom name of device {} is already being updated", id);
                    return None;
                }
                info!("Setting custom name of device {} to '{}'", id, name);
                Some(Box::pin(async move {
                    let result = api.update_device_options(&id, &name).await;
                    DeviceDetailResponse::CustomNameSet { name, result }
                }))
            }
        }
    }

    pub fn resolve(&mut self, response: DeviceDetailResponse) {
        match response {
            DeviceDetailResponse::Refreshed { generation, result } => {
                self.background_states.remove(&BackgroundState::Refreshing);
                match result {
                    Ok(_) if generation != self.generation => {
                        debug!("Discarding device record fetched before the last save");
                    }
                    Ok(device) => {
                        debug!("Device {:?} refreshed", device.id);
                        self.device = device;
                    }
                    Err(e) => {
                        warn!("Failed to refresh device: {}", e);
                        self.emit(DeviceDetailEvent::Error(e.into()));
                    }
                }
            }
            DeviceDetailResponse::CustomNameSet { name, result } => {
                self.background_states.remove(&BackgroundState::Updating);
                match result {
                    Ok(()) => {
                        info!("Custom name of device {:?} saved", self.device.id);
                        self.device.custom_name = Some(name);
                        self.generation += 1;
                        self.emit(DeviceDetailEvent::NameSaved);
                    }
                    Err(e) => {
                        warn!("Failed to save custom name: {}", e);
                        self.emit(DeviceDetailEvent::Error(e.into()));
                    }
                }
            }
        }
    }

    fn emit(&self, event: DeviceDetailEvent) {
        if self.events.send(event).is_err() {
            warn!("Device detail event dropped, no receiver");
        }
    }
}
