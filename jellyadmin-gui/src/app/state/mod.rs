mod device_details;
mod user_details;

use std::sync::Arc;

use iced::{Element, Subscription, Task};
use jellyadmin::api::JellyfinApi;

use super::{message::Message, view};

pub use device_details::DeviceDetailsState;
pub use user_details::UserDetailsState;

pub trait State {
    fn title(&self) -> String;
    fn view(&self) -> Element<'_, view::Message>;
    fn update(
        &mut self,
        _api: Arc<dyn JellyfinApi + Sync + Send>,
        _message: Message,
    ) -> Task<Message> {
        Task::none()
    }
    fn subscription(&self) -> Subscription<Message> {
        Subscription::none()
    }
}

/// redirect to another screen
pub fn redirect(route: super::router::Route) -> Task<Message> {
    Task::perform(async { route }, Message::Route)
}
