/// Transient toast rendering.
use iced::widget::{button, container, row, text};
use iced::{Alignment, Element, Length};

use crate::state::notify::{Toast, ToastKind};
use crate::Message;

/// Full-screen layer that floats the toast card in the bottom-right corner.
/// Stacked over the app; only the card itself takes clicks.
pub fn overlay(toast: &Toast) -> Element<'_, Message> {
    let marker = match toast.kind {
        ToastKind::Success => "✅",
        ToastKind::Info => "ℹ️",
    };

    let card = container(
        row![
            text(marker),
            text(toast.message.as_str()),
            button(text("✕"))
                .style(button::text)
                .on_press(Message::ToastDismissed),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .style(container::rounded_box)
    .padding(12);

    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Right)
        .align_y(iced::alignment::Vertical::Bottom)
        .padding(16)
        .into()
}
