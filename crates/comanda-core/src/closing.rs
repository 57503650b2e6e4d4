//! # Daily Closing Calculator
//!
//! Reconciles one business day: opening float, sales split by payment
//! method, expenses, net profit, and the expected cash in the drawer.
//!
//! ## Closing Math
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Daily Closing                                    │
//! │                                                                         │
//! │  opening         = drawer opening recorded for the date (else 0.00)    │
//! │  sales[method]   = Σ total of the day's PAID orders, per method        │
//! │  total sales     = Σ over all methods                                  │
//! │  total expenses  = Σ of the day's expenses                             │
//! │                                                                         │
//! │  net profit      = total sales − total expenses                        │
//! │  cash on hand    = opening + sales[Cash] − total expenses              │
//! │                                                                         │
//! │  Every expense is assumed paid from the cash float. The stand keeps    │
//! │  one till; transfers never fund an expense directly.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculator is pure. It never deletes anything; the destructive
//! close-and-reset that purges the day's rows lives in the store layer and
//! runs only after the operator has seen (and usually exported) this
//! report.

use chrono::NaiveDate;

use crate::money::Money;
use crate::types::{DrawerOpening, Expense, Order, OrderStatus, PaymentMethod};

// =============================================================================
// Closing Report
// =============================================================================

/// The reconciled figures for one business day, plus the day's rows for
/// display.
#[derive(Debug, Clone, PartialEq)]
pub struct ClosingReport {
    /// The day being closed.
    pub date: NaiveDate,

    /// Opening float recorded for the day, 0.00 when the day was never
    /// formally opened.
    pub opening: Money,

    /// Paid sales per method, indexed in [`PaymentMethod::ALL`] order.
    pub method_sales: [Money; 4],

    /// Σ over `method_sales`.
    pub total_sales: Money,

    /// Σ of the day's expenses.
    pub total_expenses: Money,

    /// `total_sales − total_expenses`. Negative on a loss-making day.
    pub net_profit: Money,

    /// Cash expected in the drawer:
    /// `opening + method_sales[Cash] − total_expenses`.
    pub cash_on_hand: Money,

    /// Every order of the day, any status, in stored order.
    pub orders: Vec<Order>,

    /// Every expense of the day, in stored order.
    pub expenses: Vec<Expense>,
}

impl ClosingReport {
    /// Paid sales for one payment method.
    #[inline]
    pub fn sales(&self, method: PaymentMethod) -> Money {
        self.method_sales[method as usize]
    }
}

// =============================================================================
// Computation
// =============================================================================

/// Computes the closing report for `date` from full store snapshots.
///
/// ## Arguments
/// * `date` - The business day to reconcile
/// * `orders` - The whole order collection; filtered by calendar date here
/// * `expenses` - The whole expense collection
/// * `openings` - The whole drawer collection; the first record matching
///   `date` wins if legacy data ever held duplicates
///
/// Pure and permutation-invariant: integer-cent addition means the row
/// order of the inputs cannot change a single figure.
pub fn compute_closing(
    date: NaiveDate,
    orders: &[Order],
    expenses: &[Expense],
    openings: &[DrawerOpening],
) -> ClosingReport {
    let opening = openings
        .iter()
        .find(|o| o.date == date)
        .map(|o| o.opening_float)
        .unwrap_or_default();

    let day_orders: Vec<Order> = orders.iter().filter(|o| o.is_on(date)).cloned().collect();

    let mut method_sales = [Money::zero(); 4];
    for order in &day_orders {
        if order.status == OrderStatus::Paid {
            method_sales[order.payment_method as usize] += order.total;
        }
    }
    let total_sales: Money = method_sales.iter().copied().sum();

    let day_expenses: Vec<Expense> = expenses.iter().filter(|e| e.date == date).cloned().collect();
    let total_expenses: Money = day_expenses.iter().map(|e| e.amount).sum();

    let net_profit = total_sales - total_expenses;
    let cash_on_hand = opening + method_sales[PaymentMethod::Cash as usize] - total_expenses;

    ClosingReport {
        date,
        opening,
        method_sales,
        total_sales,
        total_expenses,
        net_profit,
        cash_on_hand,
        orders: day_orders,
        expenses: day_expenses,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
