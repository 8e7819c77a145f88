use iced::Element;
use jellyadmin::model::User;

use super::State;
use crate::app::view;

pub struct UserDetailsState {
    user: User,
}

impl UserDetailsState {
    pub fn new(user: User) -> Self {
        Self { user }
    }
}

impl State for UserDetailsState {
    fn title(&self) -> String {
        self.user.name.clone()
    }

    fn view(&self) -> Element<'_, view::Message> {
        view::user_details::user_details(&self.user)
    }
}

impl From<UserDetailsState> for Box<dyn State> {
    fn from(s: UserDetailsState) -> Box<dyn State> {
        Box::new(s)
    }
}
