//! # Domain Types
//!
//! Core domain types used throughout Comanda.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Order       │   │    Expense      │   │  DrawerOpening  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  date           │   │  date           │       │
//! │  │  customer       │   │  description    │   │  opening_float  │       │
//! │  │  created_at     │   │  amount         │   └─────────────────┘       │
//! │  │  items          │   └─────────────────┘                             │
//! │  │  total          │                                                    │
//! │  │  status         │   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  payment_method │   │  OrderStatus    │   │ PaymentMethod   │       │
//! │  └─────────────────┘   │  ─────────────  │   │  ─────────────  │       │
//! │                        │  InProgress     │   │  Cash           │       │
//! │  ┌─────────────────┐   │  Delivered      │   │  DeUna          │       │
//! │  │    LineItem     │   │  Paid           │   │  JardinAzuayo   │       │
//! │  │  ─────────────  │   │  Cancelled      │   │  Jep            │       │
//! │  │  key (menu key) │   └─────────────────┘   └─────────────────┘       │
//! │  │  quantity       │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There are no relations enforced across the three persisted collections;
//! anything cross-entity (a day's sales against a day's expenses) is
//! computed at query time by comparing calendar dates.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation;

// =============================================================================
// Order Status
// =============================================================================

/// The status of an order in its lifecycle.
///
/// Transitions are free-form: the operator moves an order between any two
/// statuses with an explicit update. Only `Paid` orders count as revenue
/// in the daily closing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Taken, being prepared.
    InProgress,
    /// Handed to the customer, not yet settled.
    Delivered,
    /// Settled. The only status that counts toward sales.
    Paid,
    /// Abandoned or mistaken order. Kept for the day's record.
    Cancelled,
}

impl OrderStatus {
    /// Stable token for this status, identical to the persisted CSV form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::InProgress => "InProgress",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Paid => "Paid",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::InProgress
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How an order was (or will be) settled: cash, or one of the transfer
/// providers the stand accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Physical cash into the drawer.
    Cash,
    /// De Una mobile transfer.
    DeUna,
    /// Jardín Azuayo account transfer.
    JardinAzuayo,
    /// JEP account transfer.
    Jep,
}

impl PaymentMethod {
    /// Every method, in reconciliation order. The closing report and its
    /// export list per-method sales in exactly this order; it mirrors the
    /// declaration order above (`method as usize` indexes it).
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::DeUna,
        PaymentMethod::JardinAzuayo,
        PaymentMethod::Jep,
    ];

    /// Stable token for this method, identical to the persisted CSV form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::DeUna => "DeUna",
            PaymentMethod::JardinAzuayo => "JardinAzuayo",
            PaymentMethod::Jep => "Jep",
        }
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Cash
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One line of an order: a menu key and how many of it.
///
/// The same shape doubles as the caller's cart selection handed to
/// [`build_order`](crate::order::build_order). Only the key is stored;
/// unit prices always come from the menu at order time, and the frozen
/// result lives in `Order::total`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// Whole menu key, `"{category} - {name}"`.
    pub key: String,

    /// Count ordered. Positive in every persisted order.
    pub quantity: i64,
}

impl LineItem {
    /// Creates a line item.
    pub fn new(key: impl Into<String>, quantity: i64) -> Self {
        LineItem {
            key: key.into(),
            quantity,
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer order.
///
/// ## Invariants (for persisted orders)
/// - `id` is unique within the collection and never reused
/// - `customer` is non-empty
/// - `total` is positive and equals the menu math of `items` at the time
///   the order was built (the stored total stays authoritative even if
///   menu prices later change)
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Positive integer id, assigned as max existing + 1.
    pub id: u32,

    /// Customer name or table label, as the operator typed it (trimmed).
    pub customer: String,

    /// When the order was taken, local business time.
    pub created_at: NaiveDateTime,

    /// Ordered lines. May be empty for legacy rows whose summary column
    /// could not be parsed back; `total` remains authoritative.
    pub items: Vec<LineItem>,

    /// Frozen total at order time.
    pub total: Money,

    /// Lifecycle status.
    pub status: OrderStatus,

    /// How the order is settled. Meaningful once the order is `Paid`;
    /// defaults to cash before that.
    pub payment_method: PaymentMethod,
}

impl Order {
    /// True if the order belongs to the given business day.
    #[inline]
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.created_at.date() == date
    }
}

// =============================================================================
// Expense
// =============================================================================

/// A cash outlay of the business day (ingredients, gas bottle, change run).
///
/// Serialized field names match the persisted CSV header:
/// `Date,Description,Amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Expense {
    /// Day the expense was paid.
    pub date: NaiveDate,

    /// What the money went on. Non-empty.
    pub description: String,

    /// Amount paid. Strictly positive.
    pub amount: Money,
}

impl Expense {
    /// Creates a validated expense.
    ///
    /// ## Errors
    /// - [`EmptyDescription`](crate::CoreError::EmptyDescription) if the
    ///   trimmed description is empty
    /// - [`NonPositiveAmount`](crate::CoreError::NonPositiveAmount) if the
    ///   amount is zero or negative
    pub fn new(date: NaiveDate, description: &str, amount: Money) -> CoreResult<Self> {
        let description = validation::validate_description(description)?;
        validation::validate_expense_amount(amount)?;

        Ok(Expense {
            date,
            description,
            amount,
        })
    }
}

// =============================================================================
// Drawer Opening
// =============================================================================

/// The cash float counted into the drawer when a business day opens.
///
/// At most one per date; opening an already-open day reports the existing
/// record instead of appending a second one.
///
/// Serialized field names match the persisted CSV header:
/// `Date,OpeningFloat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DrawerOpening {
    /// The business day.
    pub date: NaiveDate,

    /// Float counted in at open. Zero is valid (opening without change).
    pub opening_float: Money,
}

impl DrawerOpening {
    /// Creates a validated drawer opening.
    ///
    /// ## Errors
    /// [`NegativeOpeningFloat`](crate::CoreError::NegativeOpeningFloat) if
    /// the float is negative.
    pub fn new(date: NaiveDate, opening_float: Money) -> CoreResult<Self> {
        validation::validate_opening_float(opening_float)?;

        Ok(DrawerOpening {
            date,
            opening_float,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
