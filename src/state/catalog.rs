/// The menu catalog: a compiled-in, read-only list of everything the stall
/// sells. Entries never change while the app is running; the order and the
/// view filter only ever borrow from it.

/// One purchasable entry on the menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    /// Unique catalog id
    pub id: u32,
    /// Display name (e.g. "Momo")
    pub name: String,
    /// Regular price in dollars
    pub price: f64,
    /// Category label used for grouping ("Main", "Sides", "Drinks")
    pub category: String,
    /// Display image reference; opaque, never fetched or validated
    #[allow(dead_code)]
    pub image: String,
    /// Shown with a star badge and matched by the popular-only filter
    pub popular: bool,
    /// Price of the small portion, if the item comes in one
    pub small_price: Option<f64>,
    /// Price of the kids portion, if the item comes in one
    pub kids_price: Option<f64>,
}

/// Size choice for an order line. Every entry has a regular size; small and
/// kids exist only where the catalog carries a price for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Regular,
    Small,
    Kids,
}

impl Variant {
    /// Human-readable size name, used on buttons and order-line badges
    pub fn label(&self) -> &'static str {
        match self {
            Variant::Regular => "Regular",
            Variant::Small => "Small",
            Variant::Kids => "Kids",
        }
    }

    /// Suffix appended to the "Added ... to order" toast message
    pub fn toast_suffix(&self) -> &'static str {
        match self {
            Variant::Regular => "",
            Variant::Small => " (Small)",
            Variant::Kids => " (Kids)",
        }
    }
}

impl MenuEntry {
    /// Whether this entry offers any size besides regular
    pub fn has_variants(&self) -> bool {
        self.small_price.is_some() || self.kids_price.is_some()
    }

    /// Resolve the unit price for a size choice.
    /// Falls back to the regular price when the catalog carries no price for
    /// the requested size.
    pub fn price_for(&self, variant: Variant) -> f64 {
        match variant {
            Variant::Regular => self.price,
            Variant::Small => self.small_price.unwrap_or(self.price),
            Variant::Kids => self.kids_price.unwrap_or(self.price),
        }
    }
}

/// The full stall menu
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<MenuEntry>,
}

impl Catalog {
    /// The stall's menu, compiled into the binary
    pub fn builtin() -> Self {
        let entries = vec![
            MenuEntry {
                id: 1,
                name: "Momo".into(),
                price: 15.0,
                category: "Main".into(),
                image: "https://images.unsplash.com/photo-1626776876729-bab4369a5a5a?w=800"
                    .into(),
                popular: true,
                small_price: Some(10.0),
                kids_price: None,
            },
            MenuEntry {
                id: 2,
                name: "Vegi Momo".into(),
                price: 15.0,
                category: "Main".into(),
                image: "https://images.unsplash.com/photo-1541696432-82c6da8ce7bf?w=800"
                    .into(),
                popular: false,
                small_price: Some(10.0),
                kids_price: None,
            },
            MenuEntry {
                id: 3,
                name: "Chicken Chowmein".into(),
                price: 12.0,
                category: "Main".into(),
                image: "https://images.unsplash.com/photo-1585032226651-759b368d7246?w=800"
                    .into(),
                popular: true,
                small_price: Some(8.0),
                kids_price: None,
            },
            MenuEntry {
                id: 4,
                name: "Vegi Chowmein".into(),
                price: 8.0,
                category: "Main".into(),
                image: "https://greenbowl2soul.com/wp-content/uploads/2023/03/vegetable-chow-mein.jpg"
                    .into(),
                popular: false,
                small_price: Some(6.0),
                kids_price: None,
            },
            MenuEntry {
                id: 5,
                name: "Rice + Curry/Sweet&Sour".into(),
                price: 12.0,
                category: "Main".into(),
                image: "https://images.unsplash.com/photo-1603133872878-684f208fb84b?w=800"
                    .into(),
                popular: false,
                small_price: Some(8.0),
                kids_price: None,
            },
            MenuEntry {
                id: 6,
                name: "Spring Roll".into(),
                price: 2.50,
                category: "Sides".into(),
                image: "https://www.elmundoeats.com/wp-content/uploads/2024/02/A-stack-of-crispy-spring-rolls-on-a-plate-1024x1536.jpg"
                    .into(),
                popular: false,
                small_price: None,
                kids_price: None,
            },
            MenuEntry {
                id: 7,
                name: "Red Bull".into(),
                price: 3.0,
                category: "Drinks".into(),
                image: "https://upload.wikimedia.org/wikipedia/commons/6/6b/8.4_floz_can_of_Red_Bull_Energy_Drink.jpg"
                    .into(),
                popular: false,
                small_price: None,
                kids_price: None,
            },
            MenuEntry {
                id: 8,
                name: "Soft Drinks".into(),
                price: 2.50,
                category: "Drinks".into(),
                image: "https://images.unsplash.com/photo-1527960471264-932f39eb5846?w=800"
                    .into(),
                popular: false,
                small_price: None,
                kids_price: None,
            },
        ];

        Catalog { entries }
    }

    /// All entries in menu order
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Look up an entry by id
    pub fn entry(&self, id: u32) -> Option<&MenuEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Number of entries on the menu
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
