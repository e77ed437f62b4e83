/// The browsable menu: category pills and the card grid.
///
/// Cards for multi-size items open an inline size picker instead of adding
/// straight away; single-size items add the regular size on the first click.
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::state::catalog::{MenuEntry, Variant};
use crate::Message;

/// One pill per category, the selected one highlighted
pub fn category_row<'a>(categories: &'a [String], selected: &str) -> Element<'a, Message> {
    let mut pills = row![].spacing(8);

    for category in categories {
        let style = if category == selected {
            button::primary
        } else {
            button::secondary
        };

        pills = pills.push(
            button(text(category.as_str()))
                .style(style)
                .on_press(Message::CategorySelected(category.clone()))
                .padding(8),
        );
    }

    pills.into()
}

/// The card grid for the currently visible entries
pub fn menu_grid<'a>(entries: &[&'a MenuEntry], size_prompt: Option<u32>) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = entries
        .iter()
        .map(|entry| menu_card(entry, size_prompt == Some(entry.id)))
        .collect();

    Wrap::with_elements(cards)
        .spacing(12.0)
        .line_spacing(12.0)
        .into()
}

fn menu_card(entry: &MenuEntry, picking_size: bool) -> Element<'_, Message> {
    let mut badges = row![].spacing(6);
    if entry.has_variants() {
        badges = badges.push(text("Multiple Sizes").size(12));
    }
    if entry.popular {
        badges = badges.push(text("⭐ Popular").size(12));
    }

    let mut prices = column![text(format!("${:.2}", entry.price)).size(20)].align_x(Alignment::End);
    if let Some(price) = entry.small_price {
        prices = prices.push(text(format!("Small: ${:.2}", price)).size(13));
    }
    if let Some(price) = entry.kids_price {
        prices = prices.push(text(format!("Kids: ${:.2}", price)).size(13));
    }

    let header = row![
        column![text(entry.name.as_str()).size(16), badges]
            .spacing(4)
            .width(Length::Fill),
        prices,
    ]
    .spacing(8);

    let actions: Element<'_, Message> = if picking_size {
        size_picker(entry)
    } else if entry.has_variants() {
        // Two sizes or more: ask which one before adding
        button(text("Add to Order"))
            .on_press(Message::PickSize(entry.id))
            .width(Length::Fill)
            .into()
    } else {
        button(text("Add to Order"))
            .on_press(Message::AddToOrder(entry.id, Variant::Regular))
            .width(Length::Fill)
            .into()
    };

    container(column![header, actions].spacing(10))
        .style(container::rounded_box)
        .padding(12)
        .width(230)
        .into()
}

/// Inline replacement for the card's add button while a size is being chosen
fn size_picker(entry: &MenuEntry) -> Element<'_, Message> {
    let mut choices = column![
        text("Choose Size").size(14),
        button(text(format!("Regular (${:.2})", entry.price)))
            .on_press(Message::AddToOrder(entry.id, Variant::Regular))
            .width(Length::Fill),
    ]
    .spacing(6);

    if let Some(price) = entry.small_price {
        choices = choices.push(
            button(text(format!("Small (${:.2})", price)))
                .style(button::secondary)
                .on_press(Message::AddToOrder(entry.id, Variant::Small))
                .width(Length::Fill),
        );
    }

    if let Some(price) = entry.kids_price {
        choices = choices.push(
            button(text(format!("Kids (${:.2})", price)))
                .style(button::secondary)
                .on_press(Message::AddToOrder(entry.id, Variant::Kids))
                .width(Length::Fill),
        );
    }

    choices
        .push(
            button(text("Cancel"))
                .style(button::text)
                .on_press(Message::CancelSizePrompt)
                .width(Length::Fill),
        )
        .into()
}
