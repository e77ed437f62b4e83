/// Current-order panel: line items with quantity controls, the bill total,
/// the complete/clear actions, and the cash change calculator.
use iced::widget::{
    button, column, container, horizontal_rule, horizontal_space, row, text, text_input,
};
use iced::{Alignment, Element, Length};

use crate::state::cash;
use crate::state::catalog::Variant;
use crate::state::order::{Order, OrderLine};
use crate::Message;

pub fn view<'a>(order: &'a Order, cash_open: bool, cash_input: &'a str) -> Element<'a, Message> {
    let mut header = row![text("🛒 Current Order").size(20), horizontal_space()]
        .align_y(Alignment::Center)
        .spacing(8);
    if !order.is_empty() {
        header = header.push(
            button(text("🗑"))
                .style(button::danger)
                .on_press(Message::ClearOrder),
        );
    }

    if order.is_empty() {
        let placeholder = column![
            header,
            text("Your order is empty"),
            text("Add items from the menu to get started").size(13),
        ]
        .spacing(12);

        return container(placeholder)
            .style(container::rounded_box)
            .padding(16)
            .width(Length::Fill)
            .into();
    }

    let mut lines = column![].spacing(10);
    for line in order.lines() {
        lines = lines.push(line_row(line));
    }

    let total = order.total();
    let total_row = row![
        text("Total").size(18),
        horizontal_space(),
        text(format!("${:.2}", total)).size(18),
    ]
    .align_y(Alignment::Center);

    let panel = column![
        header,
        lines,
        horizontal_rule(1),
        total_row,
        button(text("🧾 Complete Order"))
            .on_press(Message::ClearOrder)
            .width(Length::Fill)
            .padding(10),
        cash_section(total, cash_open, cash_input),
    ]
    .spacing(12);

    container(panel)
        .style(container::rounded_box)
        .padding(16)
        .width(Length::Fill)
        .into()
}

fn line_row(line: &OrderLine) -> Element<'_, Message> {
    let mut name_row = row![text(line.name.as_str()).size(15)]
        .spacing(6)
        .align_y(Alignment::Center);
    if line.variant != Variant::Regular {
        name_row = name_row.push(text(line.variant.label()).size(12));
    }

    let quantity_controls = row![
        button(text("-"))
            .style(button::secondary)
            .on_press(Message::ChangeQuantity(line.entry_id, line.variant, -1)),
        text(line.quantity.to_string()).size(15),
        button(text("+"))
            .style(button::secondary)
            .on_press(Message::ChangeQuantity(line.entry_id, line.variant, 1)),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    row![
        column![
            name_row,
            text(format!("${:.2} × {}", line.unit_price, line.quantity)).size(13),
            quantity_controls,
        ]
        .spacing(4)
        .width(Length::Fill),
        text(format!("${:.2}", line.line_total())).size(15),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

/// Collapsed: a single button. Expanded: the received/change breakdown,
/// recomputed on every keystroke. Closing resets the input.
fn cash_section<'a>(total: f64, open: bool, input: &'a str) -> Element<'a, Message> {
    if !open {
        return button(text("Calculate Change"))
            .style(button::success)
            .on_press(Message::CashOpened)
            .width(Length::Fill)
            .padding(10)
            .into();
    }

    let mut section = column![
        text("Calculate Change").size(16),
        row![
            text("Total Amount"),
            horizontal_space(),
            text(format!("${:.2}", total)).size(18),
        ]
        .align_y(Alignment::Center),
        text_input("Enter amount", input)
            .on_input(Message::CashInputChanged)
            .padding(8),
    ]
    .spacing(10);

    if !input.is_empty() {
        let change = cash::compute_change(total, input);
        let change_style = if change.sufficient {
            text::success
        } else {
            text::danger
        };

        section = section.push(
            row![
                column![
                    text("Received").size(13),
                    text(format!("${:.2}", change.received)),
                ]
                .spacing(2),
                horizontal_space(),
                column![
                    text("Change").size(13),
                    text(format!("${:.2}", change.change)).style(change_style),
                ]
                .spacing(2),
            ]
            .align_y(Alignment::Center),
        );
    }

    section
        .push(
            button(text("Close"))
                .style(button::secondary)
                .on_press(Message::CashClosed)
                .width(Length::Fill),
        )
        .into()
}
