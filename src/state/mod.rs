/// State management module
///
/// This module handles all application state, including:
/// - The compiled-in menu catalog (catalog.rs)
/// - The running order and its total (order.rs)
/// - Menu filtering and the category list (filter.rs)
/// - The cash change calculator (cash.rs)
/// - The single-slot toast state (notify.rs)
///
/// Nothing in here touches the UI; these are plain data structures and
/// functions that the update loop drives.

pub mod cash;
pub mod catalog;
pub mod filter;
pub mod notify;
pub mod order;
