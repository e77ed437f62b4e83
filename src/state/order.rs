/// The running order: the list of lines the customer has asked for so far.
///
/// Lines are keyed by `(entry id, size)`. Adding the same key again bumps the
/// quantity instead of creating a second line, and a line whose quantity
/// drops to zero disappears from the order. Insertion order is what the
/// customer saw, so it is never re-sorted.
use super::catalog::{MenuEntry, Variant};

/// One `(item, size, quantity)` entry in the current order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    /// Catalog id of the menu entry this line was created from
    pub entry_id: u32,
    /// Display name, captured when the line was created
    pub name: String,
    /// Size this line was ordered in
    pub variant: Variant,
    /// Unit price resolved when the line was created.
    /// Kept as resolved, so later catalog changes never reprice an open order.
    pub unit_price: f64,
    /// Always at least 1 while the line is stored
    pub quantity: u32,
}

impl OrderLine {
    /// Price of this line: unit price times quantity
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// The current order being assembled at the counter
#[derive(Debug, Default)]
pub struct Order {
    lines: Vec<OrderLine>,
}

impl Order {
    /// Create an empty order
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `entry` in the given size.
    ///
    /// Merges into the existing line for the same `(id, size)` key if there
    /// is one, otherwise appends a fresh line with quantity 1 at the end.
    pub fn add(&mut self, entry: &MenuEntry, variant: Variant) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.entry_id == entry.id && line.variant == variant)
        {
            line.quantity += 1;
        } else {
            self.lines.push(OrderLine {
                entry_id: entry.id,
                name: entry.name.clone(),
                variant,
                unit_price: entry.price_for(variant),
                quantity: 1,
            });
        }
    }

    /// Adjust a line's quantity by `delta` (may be negative).
    ///
    /// Quantity floors at zero; a line driven to zero is removed. Adjusting a
    /// key that is not in the order does nothing.
    pub fn change_quantity(&mut self, entry_id: u32, variant: Variant, delta: i32) {
        let Some(index) = self
            .lines
            .iter()
            .position(|line| line.entry_id == entry_id && line.variant == variant)
        else {
            return;
        };

        let line = &mut self.lines[index];
        let new_quantity = (i64::from(line.quantity) + i64::from(delta)).max(0) as u32;

        if new_quantity == 0 {
            self.lines.remove(index);
        } else {
            line.quantity = new_quantity;
        }
    }

    /// Empty the order. Backs both "Complete Order" and the clear button.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line totals. Always recomputed from the lines.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(OrderLine::line_total).sum()
    }

    /// The order lines in the sequence the customer added them
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Whether nothing has been added yet
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn momo() -> MenuEntry {
        MenuEntry {
            id: 1,
            name: "Momo".into(),
            price: 15.0,
            category: "Main".into(),
            image: String::new(),
            popular: true,
            small_price: Some(10.0),
            kids_price: None,
        }
    }

    fn spring_roll() -> MenuEntry {
        MenuEntry {
            id: 6,
            name: "Spring Roll".into(),
            price: 2.50,
            category: "Sides".into(),
            image: String::new(),
            popular: false,
            small_price: None,
            kids_price: None,
        }
    }

    #[test]
    fn test_repeat_adds_merge_into_one_line() {
        let mut order = Order::new();
        let momo = momo();

        order.add(&momo, Variant::Regular);
        order.add(&momo, Variant::Regular);
        order.add(&momo, Variant::Regular);

        assert_eq!(order.lines().len(), 1);
        assert_eq!(order.lines()[0].quantity, 3);
        assert_eq!(order.total(), 45.0);
    }

    #[test]
    fn test_sizes_are_separate_lines() {
        let mut order = Order::new();
        let momo = momo();

        order.add(&momo, Variant::Regular);
        order.add(&momo, Variant::Small);
        order.add(&momo, Variant::Regular);

        let lines = order.lines();
        assert_eq!(lines.len(), 2);

        assert_eq!(lines[0].variant, Variant::Regular);
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[0].unit_price, 15.0);

        assert_eq!(lines[1].variant, Variant::Small);
        assert_eq!(lines[1].quantity, 1);
        assert_eq!(lines[1].unit_price, 10.0);

        assert_eq!(order.total(), 40.0);
    }

    #[test]
    fn test_decrement_below_zero_removes_line() {
        let mut order = Order::new();
        let momo = momo();

        order.add(&momo, Variant::Regular);
        order.add(&momo, Variant::Regular);
        order.add(&momo, Variant::Small);

        // Floors at zero even when the delta overshoots
        order.change_quantity(1, Variant::Regular, -5);

        assert_eq!(order.lines().len(), 1);
        assert_eq!(order.lines()[0].variant, Variant::Small);
        assert_eq!(order.total(), 10.0);
    }

    #[test]
    fn test_change_quantity_updates_in_place() {
        let mut order = Order::new();
        order.add(&momo(), Variant::Regular);
        order.add(&spring_roll(), Variant::Regular);

        order.change_quantity(1, Variant::Regular, 2);

        // Position preserved, quantity updated
        assert_eq!(order.lines()[0].entry_id, 1);
        assert_eq!(order.lines()[0].quantity, 3);
        assert_eq!(order.lines()[1].entry_id, 6);
        assert_eq!(order.total(), 45.0 + 2.50);
    }

    #[test]
    fn test_change_quantity_on_missing_key_is_a_noop() {
        let mut order = Order::new();
        order.add(&momo(), Variant::Regular);

        order.change_quantity(6, Variant::Regular, 1);
        order.change_quantity(1, Variant::Small, -1);

        assert_eq!(order.lines().len(), 1);
        assert_eq!(order.lines()[0].quantity, 1);
    }

    #[test]
    fn test_clear_empties_the_order() {
        let mut order = Order::new();
        order.add(&momo(), Variant::Regular);
        order.add(&spring_roll(), Variant::Regular);
        assert!(!order.is_empty());

        order.clear();

        assert!(order.is_empty());
        assert_eq!(order.total(), 0.0);
    }

    #[test]
    fn test_unit_price_is_captured_at_add_time() {
        let mut order = Order::new();
        let mut momo = momo();

        order.add(&momo, Variant::Regular);
        // A repriced catalog entry must not reprice the open order
        momo.price = 99.0;
        order.add(&momo, Variant::Regular);

        assert_eq!(order.lines()[0].unit_price, 15.0);
        assert_eq!(order.total(), 30.0);
    }

    #[test]
    fn test_zero_price_item_leaves_total_unchanged() {
        let mut order = Order::new();
        order.add(&momo(), Variant::Small);

        let freebie = MenuEntry {
            id: 9,
            name: "Tap Water".into(),
            price: 0.0,
            category: "Drinks".into(),
            image: String::new(),
            popular: false,
            small_price: None,
            kids_price: None,
        };
        order.add(&freebie, Variant::Regular);

        assert_eq!(order.lines().len(), 2);
        assert_eq!(order.total(), 10.0);
    }
}
