use chrono::{DateTime, Utc};
use iced::{
    widget::{button, column, container, row, scrollable, text, text_input, Space},
    Alignment, Element, Length,
};

use jellyadmin::model::{Device, User};

use super::{entry, section, warning, Message};
use crate::{app::error::Error, utils::format_last_seen};

#[allow(clippy::too_many_arguments)]
pub fn device_details<'a>(
    device: &'a Device,
    custom_name: &'a str,
    can_save: bool,
    processing: bool,
    current_date: DateTime<Utc>,
    is_presenting_success: bool,
    error: Option<&'a Error>,
) -> Element<'a, Message> {
    let header = row![
        text(device.display_name()).size(24),
        Space::with_width(Length::Fill),
        if processing {
            text("Updating...")
        } else {
            text("")
        },
        button(text("Refresh"))
            .style(button::secondary)
            .on_press_maybe((!processing).then_some(Message::Refresh)),
        button(text("Save")).on_press_maybe(can_save.then_some(Message::Save)),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let mut content = column![header].spacing(20);

    if let Some(e) = error {
        content = content.push(warning(e, Message::DismissError));
    }

    if is_presenting_success {
        content = content.push(success(custom_name));
    }

    if let Some(user) = device.last_user() {
        content = content.push(user_section(user, device.date_last_activity, current_date));
    }

    content = content
        .push(section(
            "Custom device name",
            text_input("Name", custom_name).on_input(Message::CustomNameEdited),
        ))
        .push(section(
            "Device",
            column![
                entry("Client", device.app_name.as_deref()),
                entry("Device", device.name.as_deref()),
                entry("Version", device.app_version.as_deref()),
            ]
            .spacing(10),
        ));

    scrollable(content.padding(20)).into()
}

fn user_section<'a>(
    user: User,
    last_activity: Option<DateTime<Utc>>,
    current_date: DateTime<Utc>,
) -> Element<'a, Message> {
    section(
        "Last user",
        button(
            row![
                text(user.name),
                Space::with_width(Length::Fill),
                text(format_last_seen(last_activity, current_date)),
                text(">"),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
        )
        .style(button::text)
        .width(Length::Fill)
        .on_press(Message::SelectLastUser),
    )
}

fn success<'a>(custom_name: &str) -> Element<'a, Message> {
    container(
        row![
            column![
                text("Success"),
                text(format!("Custom device name saved as '{}'", custom_name)),
            ]
            .spacing(5)
            .width(Length::Fill),
            button(text("Dismiss")).on_press(Message::DismissSuccess),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .padding(15)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}
