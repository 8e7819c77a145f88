use iced::{
    widget::{button, column, text},
    Element,
};
use jellyadmin::model::User;

use super::{entry, section, Message};

pub fn user_details(user: &User) -> Element<Message> {
    column![
        button(text("< Back"))
            .style(button::text)
            .on_press(Message::Back),
        text(&user.name).size(24),
        section("User", entry("Identifier", Some(user.id.as_str()))),
    ]
    .spacing(20)
    .padding(20)
    .into()
}
