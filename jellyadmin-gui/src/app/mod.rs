pub mod error;
pub mod feedback;
pub mod message;
pub mod router;
pub mod state;
pub mod view;
pub mod view_model;

use std::sync::Arc;

use iced::{Element, Subscription, Task};
use tracing::{error, info};

use jellyadmin::{api::JellyfinApi, model::Device};

use error::Error;
use feedback::Feedback;
pub use message::Message;
use router::{Route, Router};

enum Loading {
    Pending,
    Failed(Error),
    Done,
}

/// Administration of a single device: loads it from the server then opens its details.
pub struct App {
    api: Arc<dyn JellyfinApi + Sync + Send>,
    device_id: String,
    loading: Loading,
    router: Router,
}

impl App {
    pub fn new(
        api: Arc<dyn JellyfinApi + Sync + Send>,
        device_id: String,
        feedback: Arc<dyn Feedback + Send + Sync>,
    ) -> (Self, Task<Message>) {
        let app = Self {
            api,
            device_id,
            loading: Loading::Pending,
            router: Router::new(feedback),
        };
        let task = app.load();
        (app, task)
    }

    fn load(&self) -> Task<Message> {
        info!("Loading device {}", self.device_id);
        Task::perform(
            load_device(self.api.clone(), self.device_id.clone()),
            Message::DeviceLoaded,
        )
    }

    pub fn title(&self) -> String {
        match self.router.current() {
            Some(screen) => format!("Jellyadmin - {}", screen.title()),
            None => "Jellyadmin".to_string(),
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DeviceLoaded(Ok(device)) => {
                self.loading = Loading::Done;
                self.router.route(Route::DeviceDetails(device));
                Task::none()
            }
            Message::DeviceLoaded(Err(e)) => {
                error!("Failed to load device {}: {}", self.device_id, e);
                self.loading = Loading::Failed(e);
                Task::none()
            }
            Message::View(view::Message::Retry) => {
                self.loading = Loading::Pending;
                self.load()
            }
            Message::Route(route) => {
                self.router.route(route);
                Task::none()
            }
            Message::View(view::Message::Back) => {
                self.router.back();
                Task::none()
            }
            message => match self.router.current_mut() {
                Some(screen) => screen.update(self.api.clone(), message),
                None => Task::none(),
            },
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match (&self.loading, self.router.current()) {
            (Loading::Done, Some(screen)) => screen.view().map(Message::View),
            (Loading::Failed(e), _) => view::loading(Some(e)).map(Message::View),
            _ => view::loading(None).map(Message::View),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        match self.router.current() {
            Some(screen) => screen.subscription(),
            None => Subscription::none(),
        }
    }
}

async fn load_device(
    api: Arc<dyn JellyfinApi + Sync + Send>,
    id: String,
) -> Result<Device, Error> {
    api.get_device_info(&id).await.map_err(Error::from)
}
