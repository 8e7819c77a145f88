use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use iced::{Element, Subscription, Task};
use tokio::sync::mpsc;

use jellyadmin::{api::JellyfinApi, model::Device};

use super::{redirect, State};
use crate::app::{
    error::Error,
    feedback::{Feedback, FeedbackSignal},
    message::Message,
    router::Route,
    view,
    view_model::{
        DeviceDetailAction, DeviceDetailEvent, DeviceDetailResponse, DeviceDetailViewModel,
        Request,
    },
};

pub struct DeviceDetailsState {
    view_model: DeviceDetailViewModel,
    events: mpsc::UnboundedReceiver<DeviceDetailEvent>,
    temporary_custom_name: String,
    is_presenting_success: bool,
    error: Option<Error>,
    current_date: DateTime<Utc>,
    feedback: Arc<dyn Feedback + Send + Sync>,
}

impl DeviceDetailsState {
    pub fn new(device: Device, feedback: Arc<dyn Feedback + Send + Sync>) -> Self {
        let temporary_custom_name = device.initial_custom_name();
        let (view_model, events) = DeviceDetailViewModel::new(device);
        Self {
            view_model,
            events,
            temporary_custom_name,
            is_presenting_success: false,
            error: None,
            current_date: Utc::now(),
            feedback,
        }
    }

    pub fn device(&self) -> &Device {
        self.view_model.device()
    }

    pub fn custom_name(&self) -> &str {
        &self.temporary_custom_name
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn is_presenting_success(&self) -> bool {
        self.is_presenting_success
    }

    /// The edited name differs from the stored one and no update is in flight.
    /// A device without stored custom name can always be saved.
    pub fn can_save(&self) -> bool {
        !self.view_model.is_updating()
            && self.view_model.device().custom_name.as_deref()
                != Some(self.temporary_custom_name.as_str())
    }

    pub fn edit_custom_name(&mut self, name: String) {
        self.temporary_custom_name = name;
    }

    /// Handles a tap on the save button.
    pub fn save(&mut self, api: Arc<dyn JellyfinApi + Sync + Send>) -> Option<Request> {
        self.feedback.notify(FeedbackSignal::Impact);
        if !self.can_save() {
            return None;
        }
        self.view_model.send(
            DeviceDetailAction::SetCustomName(self.temporary_custom_name.clone()),
            api,
        )
    }

    pub fn refresh(&mut self, api: Arc<dyn JellyfinApi + Sync + Send>) -> Option<Request> {
        self.view_model.send(DeviceDetailAction::Refresh, api)
    }

    pub fn on_response(&mut self, response: DeviceDetailResponse) {
        self.view_model.resolve(response);
        while let Ok(event) = self.events.try_recv() {
            match event {
                DeviceDetailEvent::Error(e) => {
                    self.feedback.notify(FeedbackSignal::Error);
                    self.error = Some(e);
                }
                DeviceDetailEvent::NameSaved => {
                    self.feedback.notify(FeedbackSignal::Success);
                    self.is_presenting_success = true;
                }
            }
        }
    }

    pub fn select_last_user(&self) -> Option<Route> {
        self.view_model.device().last_user().map(Route::UserDetails)
    }
}

fn perform(request: Option<Request>) -> Task<Message> {
    match request {
        Some(request) => Task::perform(request, Message::DeviceDetail),
        None => Task::none(),
    }
}

impl State for DeviceDetailsState {
    fn title(&self) -> String {
        self.view_model.device().display_name().to_string()
    }

    fn view(&self) -> Element<'_, view::Message> {
        view::device_details::device_details(
            self.view_model.device(),
            &self.temporary_custom_name,
            self.can_save(),
            !self.view_model.background_states().is_empty(),
            self.current_date,
            self.is_presenting_success,
            self.error.as_ref(),
        )
    }

    fn subscription(&self) -> Subscription<Message> {
        iced::time::every(Duration::from_secs(1)).map(|_| Message::Tick(Utc::now()))
    }

    fn update(
        &mut self,
        api: Arc<dyn JellyfinApi + Sync + Send>,
        message: Message,
    ) -> Task<Message> {
        match message {
            Message::View(view::Message::CustomNameEdited(name)) => {
                self.edit_custom_name(name);
                Task::none()
            }
            Message::View(view::Message::Save) => perform(self.save(api)),
            Message::View(view::Message::Refresh) => perform(self.refresh(api)),
            Message::View(view::Message::SelectLastUser) => match self.select_last_user() {
                Some(route) => redirect(route),
                None => Task::none(),
            },
            Message::View(view::Message::DismissSuccess) => {
                self.is_presenting_success = false;
                Task::none()
            }
            Message::View(view::Message::DismissError) => {
                self.error = None;
                Task::none()
            }
            Message::DeviceDetail(response) => {
                self.on_response(response);
                Task::none()
            }
            Message::Tick(now) => {
                self.current_date = now;
                Task::none()
            }
            _ => Task::none(),
        }
    }
}

impl From<DeviceDetailsState> for Box<dyn State> {
    fn from(s: DeviceDetailsState) -> Box<dyn State> {
        Box::new(s)
    }
}
