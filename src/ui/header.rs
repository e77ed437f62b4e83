/// Top bar: stall name, the live order total, the search box and the
/// popular-only toggle.
use iced::widget::{button, column, container, horizontal_space, row, text, text_input};
use iced::{Alignment, Element, Length, Theme};

use crate::state::filter::FilterState;
use crate::Message;

pub fn view(total: f64, filters: &FilterState) -> Element<'_, Message> {
    let title_row = row![
        text("🏔️ Himalaya Imbiss").size(26),
        horizontal_space(),
        text(format!("${:.2}", total)).size(26),
    ]
    .align_y(Alignment::Center);

    let search = text_input("Search menu...", &filters.search)
        .on_input(Message::SearchChanged)
        .padding(8)
        .width(Length::Fill);

    let popular_label = if filters.popular_only {
        "★ Popular Items"
    } else {
        "☆ Popular Items"
    };
    let popular_toggle = button(text(popular_label))
        .style(if filters.popular_only {
            button::success
        } else {
            button::secondary
        })
        .on_press(Message::PopularToggled(!filters.popular_only))
        .padding(8);

    let controls = row![search, popular_toggle]
        .spacing(8)
        .align_y(Alignment::Center);

    container(column![title_row, controls].spacing(12))
        .width(Length::Fill)
        .padding(14)
        .style(bar_style)
        .into()
}

/// Solid accent-colored bar
fn bar_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.primary.base.color.into()),
        text_color: Some(palette.primary.base.text),
        ..container::Style::default()
    }
}
