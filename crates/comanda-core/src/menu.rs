//! # Menu Catalog
//!
//! The fixed menu of the stand, compiled into the binary.
//!
//! ## Why Compiled-In?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The menu changes a few times a year, by editing this file.            │
//! │  Orders reference items by MENU KEY, a plain string:                   │
//! │                                                                         │
//! │      "{category} - {name}"     e.g. "Bebidas - Jugos"                  │
//! │                                                                         │
//! │  Keys are looked up WHOLE. Item names may themselves contain the       │
//! │  " - " separator ("Mix Dog - Jumbo"), so a key can never be safely     │
//! │  split back into its parts.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Item names are kept in the stand's own Spanish wording so printed
//! summaries match the physical menu board.

use crate::money::Money;

// =============================================================================
// Menu Item
// =============================================================================

/// One sellable item: category, display name, unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    /// Menu board section the item appears under.
    pub category: &'static str,

    /// Display name shown to the operator and on summaries.
    pub name: &'static str,

    /// Unit price. Every item on the menu costs something.
    pub price: Money,
}

impl MenuItem {
    /// Returns the item's menu key, `"{category} - {name}"`.
    ///
    /// ## Example
    /// ```rust
    /// use comanda_core::menu;
    ///
    /// let item = menu::find("Bebidas - Jugos").unwrap();
    /// assert_eq!(item.key(), "Bebidas - Jugos");
    /// ```
    pub fn key(&self) -> String {
        format!("{} - {}", self.category, self.name)
    }
}

/// Shorthand for the table below.
const fn item(category: &'static str, name: &'static str, cents: i64) -> MenuItem {
    MenuItem {
        category,
        name,
        price: Money::from_cents(cents),
    }
}

// =============================================================================
// The Menu
// =============================================================================

/// The full catalog, in menu-board order.
pub const MENU: &[MenuItem] = &[
    // Hamburguesas
    item("Hamburguesas", "Italiana", 225),
    item("Hamburguesas", "Francesa", 300),
    item("Hamburguesas", "Española", 300),
    item("Hamburguesas", "Americana", 300),
    item("Hamburguesas", "4 Estaciones", 300),
    item("Hamburguesas", "Mexicana", 300),
    item("Hamburguesas", "Especial", 300),
    item("Hamburguesas", "Suprema", 350),
    item("Hamburguesas", "Papi Burguer", 250),
    item("Hamburguesas", "A su gusto (Jumbo)", 500),
    item("Hamburguesas", "Triple Burguer", 600),
    item("Hamburguesas", "Doble Burguer", 450),
    // Hot Dogs
    item("Hot Dogs", "Especial Mixto", 225),
    item("Hot Dogs", "Especial de Pollo", 225),
    item("Hot Dogs", "Hot Dog con salame", 225),
    item("Hot Dogs", "Mix Dog - Jumbo", 225),
    item("Hot Dogs", "Champi Dog", 225),
    item("Hot Dogs", "Hot Dog con cebolla", 175),
    // Papas Fritas
    item("Papas Fritas", "Salchipapa (1.50)", 150),
    item("Papas Fritas", "Salchipapa (1.75)", 175),
    item("Papas Fritas", "Papi carne", 225),
    item("Papas Fritas", "Papi Pollo", 225),
    item("Papas Fritas", "Salchipapa especial", 325),
    item("Papas Fritas", "Papa Mix", 325),
    item("Papas Fritas", "Papa Wlady", 500),
    // Sanduches
    item("Sanduches", "Cubano", 200),
    item("Sanduches", "Vegetariano", 200),
    item("Sanduches", "Sanduche de Pollo", 200),
    // Bebidas
    item("Bebidas", "Colas Pequeñas", 75),
    item("Bebidas", "Jugos", 150),
    item("Bebidas", "Batidos", 175),
    item("Bebidas", "Jamaica", 50),
    // Porciónes
    item("Porciónes", "Papas Fritas (0.50)", 50),
    item("Porciónes", "Papas Fritas (1.00)", 100),
    item("Porciónes", "Huevo Frito", 50),
    item("Porciónes", "Presa de Pollo", 150),
];

// =============================================================================
// Lookups
// =============================================================================

/// Returns the distinct categories in menu-board order.
pub fn categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for item in MENU {
        if !seen.contains(&item.category) {
            seen.push(item.category);
        }
    }
    seen
}

/// Returns the items of one category, preserving menu order.
pub fn items_in(category: &str) -> Vec<&'static MenuItem> {
    MENU.iter().filter(|i| i.category == category).collect()
}

/// Finds an item by its whole menu key.
///
/// The key is compared against `item.key()` in full; it is never split,
/// because names may contain the separator.
pub fn find(key: &str) -> Option<&'static MenuItem> {
    MENU.iter().find(|i| i.key() == key)
}

// =============================================================================
// Unit Tests
// =============================================================================
