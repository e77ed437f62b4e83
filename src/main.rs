use iced::widget::{column, row, scrollable, stack};
use iced::{Element, Length, Task, Theme};

// Declare the state and view modules
mod state;
mod ui;

use state::catalog::{Catalog, Variant};
use state::filter::{self, FilterState};
use state::notify::{self, ToastKind, Toasts};
use state::order::Order;

/// Main application state
struct HimalayaPos {
    /// The stall menu, fixed for the lifetime of the process
    catalog: Catalog,
    /// Category pills, derived from the catalog once at startup
    categories: Vec<String>,
    /// The order being assembled at the counter
    order: Order,
    /// Current menu filters
    filters: FilterState,
    /// Single-slot toast state
    toasts: Toasts,
    /// Menu entry whose size picker is open, if any
    size_prompt: Option<u32>,
    /// Whether the cash calculator section is expanded
    cash_open: bool,
    /// Raw contents of the cash-received box
    cash_input: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Add one unit of a menu entry in the given size
    AddToOrder(u32, Variant),
    /// Open the size picker on a multi-size entry
    PickSize(u32),
    /// Close the size picker without adding anything
    CancelSizePrompt,
    /// Bump an order line's quantity up or down
    ChangeQuantity(u32, Variant, i32),
    /// Complete or clear the order; both empty it
    ClearOrder,
    /// A category pill was clicked
    CategorySelected(String),
    /// The search box changed
    SearchChanged(String),
    /// The popular-only toggle was flipped
    PopularToggled(bool),
    /// Expand the cash calculator
    CashOpened,
    /// Collapse the cash calculator and reset its input
    CashClosed,
    /// The cash-received box changed
    CashInputChanged(String),
    /// The toast's close button was clicked
    ToastDismissed,
    /// A toast's auto-dismiss timer fired
    ToastExpired(u64),
}

impl HimalayaPos {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let catalog = Catalog::builtin();
        let categories = filter::available_categories(&catalog);

        println!(
            "🏔️ Himalaya Imbiss POS ready, {} items on the menu",
            catalog.len()
        );

        (
            HimalayaPos {
                catalog,
                categories,
                order: Order::new(),
                filters: FilterState::default(),
                toasts: Toasts::default(),
                size_prompt: None,
                cash_open: false,
                cash_input: String::new(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AddToOrder(id, variant) => {
                self.size_prompt = None;

                let Some(entry) = self.catalog.entry(id) else {
                    return Task::none();
                };
                self.order.add(entry, variant);

                let message = format!("Added {}{} to order", entry.name, variant.toast_suffix());
                self.show_toast(message, ToastKind::Success)
            }
            Message::PickSize(id) => {
                self.size_prompt = Some(id);
                Task::none()
            }
            Message::CancelSizePrompt => {
                self.size_prompt = None;
                Task::none()
            }
            Message::ChangeQuantity(id, variant, delta) => {
                self.order.change_quantity(id, variant, delta);
                Task::none()
            }
            Message::ClearOrder => {
                self.order.clear();
                println!("🧾 Order completed");
                self.show_toast("Order completed successfully!".to_string(), ToastKind::Info)
            }
            Message::CategorySelected(category) => {
                self.filters.category = category;
                Task::none()
            }
            Message::SearchChanged(query) => {
                self.filters.search = query;
                Task::none()
            }
            Message::PopularToggled(show) => {
                self.filters.popular_only = show;
                Task::none()
            }
            Message::CashOpened => {
                self.cash_open = true;
                Task::none()
            }
            Message::CashClosed => {
                self.cash_open = false;
                self.cash_input.clear();
                Task::none()
            }
            Message::CashInputChanged(input) => {
                self.cash_input = input;
                Task::none()
            }
            Message::ToastDismissed => {
                self.toasts.dismiss();
                Task::none()
            }
            Message::ToastExpired(seq) => {
                self.toasts.expire(seq);
                Task::none()
            }
        }
    }

    /// Show a toast and schedule its auto-dismiss timer.
    /// The sequence number ties the timer to this toast; a timer that
    /// outlives its toast expires nothing.
    fn show_toast(&mut self, message: String, kind: ToastKind) -> Task<Message> {
        let seq = self.toasts.emit(message, kind);
        Task::perform(expire_later(seq), Message::ToastExpired)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let visible = filter::visible_entries(&self.catalog, &self.filters);

        let menu_pane = column![
            ui::menu::category_row(&self.categories, &self.filters.category),
            ui::menu::menu_grid(&visible, self.size_prompt),
        ]
        .spacing(12);

        let body = row![
            scrollable(menu_pane)
                .width(Length::FillPortion(2))
                .height(Length::Fill),
            scrollable(ui::sidebar::view(&self.order, self.cash_open, &self.cash_input))
                .width(Length::FillPortion(1))
                .height(Length::Fill),
        ]
        .spacing(16)
        .padding(16);

        let screen = column![ui::header::view(self.order.total(), &self.filters), body];

        match self.toasts.active() {
            Some(toast) => stack![screen, ui::toast::overlay(toast)].into(),
            None => screen.into(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    iced::application("Himalaya Imbiss", HimalayaPos::update, HimalayaPos::view)
        .theme(HimalayaPos::theme)
        .window_size((1180.0, 760.0))
        .centered()
        .run_with(HimalayaPos::new)
}

/// Sleep out the toast display window, then hand the sequence number back
/// so `update` can expire the matching toast
async fn expire_later(seq: u64) -> u64 {
    tokio::time::sleep(notify::AUTO_DISMISS).await;
    seq
}
