pub mod device_details;
pub mod user_details;

use iced::{
    widget::{button, column, container, row, text, Space},
    Alignment, Element, Length,
};

use super::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    CustomNameEdited(String),
    Save,
    Refresh,
    SelectLastUser,
    DismissSuccess,
    DismissError,
    Back,
    Retry,
}

/// Titled block of content.
pub fn section<'a>(title: &'a str, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    column![
        text(title).size(14),
        container(content)
            .padding(15)
            .width(Length::Fill)
            .style(container::rounded_box),
    ]
    .spacing(5)
    .into()
}

/// A "label: value" line, empty values are shown as a dash.
pub fn entry<'a>(label: &'a str, value: Option<&'a str>) -> Element<'a, Message> {
    row![
        text(label),
        Space::with_width(Length::Fill),
        text(value.unwrap_or("-")),
    ]
    .align_y(Alignment::Center)
    .into()
}

pub fn warning<'a>(error: &Error, on_dismiss: Message) -> Element<'a, Message> {
    container(
        row![
            text(error.to_string()).width(Length::Fill),
            button(text("Dismiss"))
                .style(button::secondary)
                .on_press(on_dismiss),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .padding(15)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}

pub fn loading<'a>(error: Option<&Error>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match error {
        None => text("Loading device...").into(),
        Some(e) => column![
            text(format!("Failed to load device: {}", e)),
            button(text("Retry")).on_press(Message::Retry),
        ]
        .spacing(10)
        .align_x(Alignment::Center)
        .into(),
    };
    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
