use std::sync::Arc;

use jellyadmin::model::{Device, User};
use tracing::info;

use super::{
    feedback::Feedback,
    state::{DeviceDetailsState, State, UserDetailsState},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    DeviceDetails(Device),
    UserDetails(User),
}

/// Navigation stack. Only the screen on top receives messages.
pub struct Router {
    stack: Vec<Box<dyn State>>,
    feedback: Arc<dyn Feedback + Send + Sync>,
}

impl Router {
    pub fn new(feedback: Arc<dyn Feedback + Send + Sync>) -> Self {
        Self {
            stack: Vec::new(),
            feedback,
        }
    }

    pub fn route(&mut self, to: Route) {
        info!("Routing to {:?}", to);
        let screen: Box<dyn State> = match to {
            Route::DeviceDetails(device) => {
                DeviceDetailsState::new(device, self.feedback.clone()).into()
            }
            Route::UserDetails(user) => UserDetailsState::new(user).into(),
        };
        self.stack.push(screen);
    }

    /// Pops the current screen. The root screen is never popped.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn current(&self) -> Option<&dyn State> {
        self.stack.last().map(|s| s.as_ref())
    }

    pub fn current_mut(&mut self) -> Option<&mut Box<dyn State>> {
        self.stack.last_mut()
    }
}
