//! # Order Lifecycle
//!
//! Pure operations over the order collection: building a new order from a
//! cart selection, updating status or payment, and querying.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Lifecycle                                   │
//! │                                                                         │
//! │  1. BUILD                                                              │
//! │     └── build_order(menu, existing, ...) → Order { InProgress }        │
//! │         (caller appends it to the loaded collection and saves)         │
//! │                                                                         │
//! │  2. STATUS UPDATES (free-form, operator driven)                        │
//! │     └── set_status(id, Delivered)                                      │
//! │     └── set_status(id, Paid) + set_payment(id, DeUna)                  │
//! │     └── set_status(id, Cancelled)                                      │
//! │                                                                         │
//! │  3. CLOSING                                                            │
//! │     └── Paid orders of the day feed the closing report;                │
//! │         the day's rows are then purged by the store's close_day        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here takes the collection as a plain slice and never touches
//! a file; the store layer wraps these in load/save cycles.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{CoreError, CoreResult};
use crate::menu::MenuItem;
use crate::money::Money;
use crate::types::{LineItem, Order, OrderStatus, PaymentMethod};
use crate::validation;

/// Separator between line-item segments in the persisted summary column.
const SUMMARY_SEPARATOR: &str = " | ";

// =============================================================================
// Id Assignment
// =============================================================================

/// Returns the id for the next order: 1 for an empty collection, else the
/// maximum existing id plus one. Deleted ids are never reused, so a day's
/// closing purge cannot cause a later order to collide with an older
/// exported report.
///
/// ## Example
/// ```rust
/// use comanda_core::order::next_id;
///
/// assert_eq!(next_id(&[]), 1);
/// ```
pub fn next_id(existing: &[Order]) -> u32 {
    existing.iter().map(|o| o.id).max().map_or(1, |max| max + 1)
}

// =============================================================================
// Building Orders
// =============================================================================

/// Builds a new order from a cart selection.
///
/// ## Arguments
/// * `menu` - The catalog to price against (normally [`crate::menu::MENU`])
/// * `existing` - The currently loaded order collection, for id assignment
/// * `customer` - Raw customer label as typed; trimmed here
/// * `selection` - Cart lines; zero-quantity lines are dropped first
/// * `initial_status` - Usually `InProgress`; a walk-up sale settled on the
///   spot may start directly at `Paid`
/// * `payment_method` - Settlement method (meaningful once `Paid`)
/// * `now` - Order timestamp, supplied by the caller (time is an input)
///
/// ## Errors
/// * [`EmptyCustomerLabel`](CoreError::EmptyCustomerLabel) - blank label
/// * [`EmptyCart`](CoreError::EmptyCart) - no positive-quantity lines, or
///   a zero total
/// * [`UnknownMenuItem`](CoreError::UnknownMenuItem) - a line references a
///   key the menu does not have; a correctly rendered cart cannot produce
///   this, so it indicates a caller bug rather than operator input
///
/// ## Returns
/// The built order. Never persisted here: the caller appends it to the
/// collection it loaded and saves the whole collection back.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use comanda_core::menu::MENU;
/// use comanda_core::order::build_order;
/// use comanda_core::types::{LineItem, OrderStatus, PaymentMethod};
///
/// let now = NaiveDate::from_ymd_opt(2024, 5, 17)
///     .unwrap()
///     .and_hms_opt(12, 30, 0)
///     .unwrap();
/// let cart = vec![LineItem::new("Bebidas - Jugos", 2)];
///
/// let order = build_order(
///     MENU,
///     &[],
///     "Mesa 3",
///     &cart,
///     OrderStatus::InProgress,
///     PaymentMethod::Cash,
///     now,
/// )
/// .unwrap();
///
/// assert_eq!(order.id, 1);
/// assert_eq!(order.total.cents(), 300);
/// ```
pub fn build_order(
    menu: &[MenuItem],
    existing: &[Order],
    customer: &str,
    selection: &[LineItem],
    initial_status: OrderStatus,
    payment_method: PaymentMethod,
    now: NaiveDateTime,
) -> CoreResult<Order> {
    let customer = validation::validate_customer_label(customer)?;

    // Lines the operator left at quantity 0 are simply not part of the order
    let items: Vec<LineItem> = selection
        .iter()
        .filter(|line| line.quantity > 0)
        .cloned()
        .collect();

    if items.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    let mut total = Money::zero();
    for line in &items {
        let item = menu
            .iter()
            .find(|i| i.key() == line.key)
            .ok_or_else(|| CoreError::UnknownMenuItem(line.key.clone()))?;
        total += item.price.multiply_quantity(line.quantity);
    }

    if !total.is_positive() {
        return Err(CoreError::EmptyCart);
    }

    Ok(Order {
        id: next_id(existing),
        customer,
        created_at: now,
        items,
        total,
        status: initial_status,
        payment_method,
    })
}

// =============================================================================
// Mutations
// =============================================================================

/// Sets the status of the order with the given id.
///
/// ## Errors
/// [`OrderNotFound`](CoreError::OrderNotFound) if no order has that id;
/// the collection is left untouched in that case.
pub fn set_status(orders: &mut [Order], id: u32, new_status: OrderStatus) -> CoreResult<()> {
    let order = orders
        .iter_mut()
        .find(|o| o.id == id)
        .ok_or(CoreError::OrderNotFound(id))?;

    order.status = new_status;
    Ok(())
}

/// Sets the payment method of the order with the given id.
///
/// ## Errors
/// [`OrderNotFound`](CoreError::OrderNotFound) if no order has that id.
pub fn set_payment(orders: &mut [Order], id: u32, method: PaymentMethod) -> CoreResult<()> {
    let order = orders
        .iter_mut()
        .find(|o| o.id == id)
        .ok_or(CoreError::OrderNotFound(id))?;

    order.payment_method = method;
    Ok(())
}

// =============================================================================
// Queries
// =============================================================================

/// True if the order matches a free-text query.
///
/// ## Matching Rules
/// - Empty (or all-whitespace) query matches everything
/// - Case-insensitive substring match on the customer label, OR
/// - Substring match on the decimal string of the id
///
/// ## Example
/// ```text
/// query "bert" matches customer "Berta Coello"
/// query "4"    matches id 42 and id 4
/// query "bert" does NOT match id 42
/// ```
pub fn matches_query(order: &Order, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }

    if order
        .customer
        .to_lowercase()
        .contains(&query.to_lowercase())
    {
        return true;
    }

    order.id.to_string().contains(query)
}

/// Filters orders by a free-text query, preserving input order.
pub fn search<'a>(orders: &'a [Order], query: &str) -> Vec<&'a Order> {
    orders.iter().filter(|o| matches_query(o, query)).collect()
}

/// Orders created on the given business day, preserving input order.
pub fn orders_on(orders: &[Order], date: NaiveDate) -> Vec<&Order> {
    orders.iter().filter(|o| o.is_on(date)).collect()
}

/// Orders whose status is in the given set, preserving input order.
///
/// An empty status set matches nothing (the caller's multiselect with
/// everything unchecked shows an empty table, not the full one).
pub fn with_status<'a>(orders: &'a [Order], statuses: &[OrderStatus]) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|o| statuses.contains(&o.status))
        .collect()
}

/// Sum of totals over any view of orders.
///
/// ## Example
/// ```rust
/// use comanda_core::order::{total_of, with_status};
/// # use comanda_core::types::Order;
/// # fn demo(orders: &[Order]) {
/// use comanda_core::types::OrderStatus;
///
/// let paid = with_status(orders, &[OrderStatus::Paid]);
/// let revenue = total_of(paid);
/// # let _ = revenue;
/// # }
/// ```
pub fn total_of<'a, I>(orders: I) -> Money
where
    I: IntoIterator<Item = &'a Order>,
{
    orders.into_iter().map(|o| o.total).sum()
}

// =============================================================================
// Line-Item Summary (persisted wire form)
// =============================================================================

/// Renders line items into the persisted summary column.
///
/// ## Grammar
/// `"{quantity}x {menu key}"` segments joined by `" | "`:
///
/// ```text
/// 2x Hamburguesas - Italiana | 1x Bebidas - Jugos
/// ```
///
/// [`parse_summary`] reconstructs the same items from this exact grammar.
pub fn summary(items: &[LineItem]) -> String {
    items
        .iter()
        .map(|line| format!("{}x {}", line.quantity, line.key))
        .collect::<Vec<_>>()
        .join(SUMMARY_SEPARATOR)
}

/// Parses a persisted summary column back into line items.
///
/// Returns `None` when any segment deviates from the grammar (hand-edited
/// legacy files); the caller then falls back to an empty item list and
/// treats the stored total as authoritative. Keys are NOT checked against
/// the current menu: a renamed menu item must not make old rows unreadable.
pub fn parse_summary(summary: &str) -> Option<Vec<LineItem>> {
    let summary = summary.trim();
    if summary.is_empty() {
        return Some(Vec::new());
    }

    let mut items = Vec::new();
    for segment in summary.split(SUMMARY_SEPARATOR) {
        // Quantity runs up to the first 'x'; keys may contain 'x' freely
        let (qty, rest) = segment.split_once('x')?;
        let key = rest.strip_prefix(' ')?;

        if qty.is_empty() || !qty.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let quantity: i64 = qty.parse().ok()?;
        if quantity <= 0 || key.is_empty() {
            return None;
        }

        items.push(LineItem::new(key, quantity));
    }

    Some(items)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MENU;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    }

    fn stub_order(id: u32, customer: &str, status: OrderStatus) -> Order {
        Order {
            id,
            customer: customer.to_string(),
            created_at: noon(),
            items: vec![LineItem::new("Bebidas - Jugos", 1)],
            total: Money::from_cents(150),
            status,
            payment_method: PaymentMethod::Cash,
        }
    }

    #[test]
    fn test_next_id_empty() {
        assert_eq!(next_id(&[]), 1);
    }

    #[test]
    fn test_next_id_is_max_plus_one() {
        let orders = vec![
            stub_order(3, "a", OrderStatus::Paid),
            stub_order(1, "b", OrderStatus::Paid),
            stub_order(4, "c", OrderStatus::Paid),
        ];
        assert_eq!(next_id(&orders), 5);
    }

    #[test]
    fn test_build_order_totals_cart() {
        let cart = vec![
            LineItem::new("Hamburguesas - Italiana", 2), // 2 × $2.25
            LineItem::new("Bebidas - Jugos", 1),         // 1 × $1.50
        ];

        let order = build_order(
            MENU,
            &[],
            "Berta Coello",
            &cart,
            OrderStatus::InProgress,
            PaymentMethod::Cash,
            noon(),
        )
        .unwrap();

        assert_eq!(order.id, 1);
        assert_eq!(order.customer, "Berta Coello");
        assert_eq!(order.total, Money::from_cents(600));
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.status, OrderStatus::InProgress);
    }

    #[test]
    fn test_build_order_drops_zero_quantity_lines() {
        let cart = vec![
            LineItem::new("Hamburguesas - Italiana", 0),
            LineItem::new("Bebidas - Jamaica", 3),
        ];

        let order = build_order(
            MENU,
            &[],
            "Mesa 1",
            &cart,
            OrderStatus::Paid,
            PaymentMethod::DeUna,
            noon(),
        )
        .unwrap();

        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].key, "Bebidas - Jamaica");
        assert_eq!(order.total, Money::from_cents(150));
    }

    #[test]
    fn test_build_order_rejects_blank_customer() {
        let cart = vec![LineItem::new("Bebidas - Jugos", 1)];
        let err = build_order(
            MENU,
            &[],
            "   ",
            &cart,
            OrderStatus::InProgress,
            PaymentMethod::Cash,
            noon(),
        )
        .unwrap_err();
        assert_eq!(err, CoreError::EmptyCustomerLabel);
    }

    #[test]
    fn test_build_order_rejects_empty_cart() {
        let err = build_order(
            MENU,
            &[],
            "Mesa 2",
            &[],
            OrderStatus::InProgress,
            PaymentMethod::Cash,
            noon(),
        )
        .unwrap_err();
        assert_eq!(err, CoreError::EmptyCart);

        // All-zero quantities are the same as an empty cart
        let cart = vec![LineItem::new("Bebidas - Jugos", 0)];
        let err = build_order(
            MENU,
            &[],
            "Mesa 2",
            &cart,
            OrderStatus::InProgress,
            PaymentMethod::Cash,
            noon(),
        )
        .unwrap_err();
        assert_eq!(err, CoreError::EmptyCart);
    }

    #[test]
    fn test_build_order_rejects_unknown_key() {
        let cart = vec![LineItem::new("Bebidas - Cerveza", 1)];
        let err = build_order(
            MENU,
            &[],
            "Mesa 2",
            &cart,
            OrderStatus::InProgress,
            PaymentMethod::Cash,
            noon(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownMenuItem("Bebidas - Cerveza".to_string())
        );
    }

    #[test]
    fn test_build_order_assigns_next_id() {
        let existing = vec![stub_order(7, "x", OrderStatus::Paid)];
        let cart = vec![LineItem::new("Bebidas - Jugos", 1)];

        let order = build_order(
            MENU,
            &existing,
            "Mesa 2",
            &cart,
            OrderStatus::InProgress,
            PaymentMethod::Cash,
            noon(),
        )
        .unwrap();
        assert_eq!(order.id, 8);
    }

    #[test]
    fn test_set_status() {
        let mut orders = vec![stub_order(1, "a", OrderStatus::InProgress)];

        set_status(&mut orders, 1, OrderStatus::Delivered).unwrap();
        assert_eq!(orders[0].status, OrderStatus::Delivered);

        let err = set_status(&mut orders, 99, OrderStatus::Paid).unwrap_err();
        assert_eq!(err, CoreError::OrderNotFound(99));
        assert_eq!(orders[0].status, OrderStatus::Delivered);
    }

    #[test]
    fn test_set_payment() {
        let mut orders = vec![stub_order(1, "a", OrderStatus::Paid)];

        set_payment(&mut orders, 1, PaymentMethod::Jep).unwrap();
        assert_eq!(orders[0].payment_method, PaymentMethod::Jep);

        let err = set_payment(&mut orders, 2, PaymentMethod::Cash).unwrap_err();
        assert_eq!(err, CoreError::OrderNotFound(2));
    }

    #[test]
    fn test_search_by_customer_substring() {
        let orders = vec![
            stub_order(1, "Berta Coello", OrderStatus::InProgress),
            stub_order(2, "Mesa 4", OrderStatus::InProgress),
        ];

        let hits = search(&orders, "bert");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].customer, "Berta Coello");

        // "bert" is not a substring of "42", so id alone must not match
        let orders = vec![stub_order(42, "Mesa 4", OrderStatus::InProgress)];
        assert!(search(&orders, "bert").is_empty());
    }

    #[test]
    fn test_search_by_id_substring() {
        let orders = vec![
            stub_order(42, "Mesa 4", OrderStatus::InProgress),
            stub_order(7, "Mesa 7", OrderStatus::InProgress),
        ];

        let hits = search(&orders, "42");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 42);

        // "4" is a substring of id "42" and of "Mesa 4"; id 7 stays out
        let hits = search(&orders, "4");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 42);
    }

    #[test]
    fn test_search_empty_query_matches_all() {
        let orders = vec![
            stub_order(1, "a", OrderStatus::InProgress),
            stub_order(2, "b", OrderStatus::Paid),
        ];
        assert_eq!(search(&orders, "").len(), 2);
        assert_eq!(search(&orders, "  ").len(), 2);
    }

    #[test]
    fn test_orders_on_day() {
        let mut early = stub_order(1, "a", OrderStatus::Paid);
        early.created_at = NaiveDate::from_ymd_opt(2024, 5, 16)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        let orders = vec![early, stub_order(2, "b", OrderStatus::Paid)];

        let day = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
        let todays = orders_on(&orders, day);
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].id, 2);
    }

    #[test]
    fn test_with_status_and_total() {
        let orders = vec![
            stub_order(1, "a", OrderStatus::Paid),
            stub_order(2, "b", OrderStatus::InProgress),
            stub_order(3, "c", OrderStatus::Paid),
        ];

        let paid = with_status(&orders, &[OrderStatus::Paid]);
        assert_eq!(paid.len(), 2);
        assert_eq!(total_of(paid), Money::from_cents(300));

        assert!(with_status(&orders, &[]).is_empty());
        assert_eq!(total_of(&orders), Money::from_cents(450));
    }

    #[test]
    fn test_summary_round_trip() {
        let items = vec![
            LineItem::new("Hamburguesas - Italiana", 2),
            LineItem::new("Hot Dogs - Mix Dog - Jumbo", 1),
            LineItem::new("Bebidas - Jugos", 12),
        ];

        let rendered = summary(&items);
        assert_eq!(
            rendered,
            "2x Hamburguesas - Italiana | 1x Hot Dogs - Mix Dog - Jumbo | 12x Bebidas - Jugos"
        );
        assert_eq!(parse_summary(&rendered).unwrap(), items);
    }

    #[test]
    fn test_parse_summary_empty() {
        assert_eq!(parse_summary("").unwrap(), Vec::<LineItem>::new());
        assert_eq!(parse_summary("   ").unwrap(), Vec::<LineItem>::new());
    }

    #[test]
    fn test_parse_summary_rejects_malformed() {
        // No quantity marker at all
        assert!(parse_summary("Hamburguesas - Italiana").is_none());
        // Non-numeric quantity
        assert!(parse_summary("twox Bebidas - Jugos").is_none());
        // Zero quantity
        assert!(parse_summary("0x Bebidas - Jugos").is_none());
        // One bad segment poisons the whole summary
        assert!(parse_summary("2x Bebidas - Jugos | garbage").is_none());
    }
}
