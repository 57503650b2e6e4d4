//! # Closing Report Rows
//!
//! Turns a [`ClosingReport`](crate::closing::ClosingReport) into the fixed
//! `(Concept, Amount)` rows of the exported closing file.
//!
//! ## Row Order Is a Contract
//! The stand's owner reads the exported files into a spreadsheet that
//! references rows by position. The eight concepts below, in this exact
//! order, must never be reordered or renamed:
//!
//! ```text
//! 1 Opening                    the drawer float
//! 2 Cash Sales                 paid orders settled in cash
//! 3 De Una Transfers           paid orders settled by De Una
//! 4 Jardin Azuayo Transfers    paid orders settled by Jardín Azuayo
//! 5 JEP Transfers              paid orders settled by JEP
//! 6 Expenses                   the day's outlays
//! 7 Net Profit                 sales minus expenses
//! 8 Cash on Hand               expected cash in the drawer
//! ```
//!
//! Rows 2-5 follow [`PaymentMethod::ALL`](crate::types::PaymentMethod::ALL)
//! order. Amounts render through `Money::to_decimal_string`, always two
//! decimals.

use crate::closing::ClosingReport;
use crate::money::Money;
use crate::types::PaymentMethod;

/// One `(Concept, Amount)` row of the exported closing report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRow {
    /// Fixed concept label.
    pub concept: &'static str,

    /// The reconciled amount.
    pub amount: Money,
}

/// Builds the eight fixed rows from a computed closing.
pub fn rows(report: &ClosingReport) -> [ReportRow; 8] {
    let row = |concept, amount| ReportRow { concept, amount };

    [
        row("Opening", report.opening),
        row("Cash Sales", report.sales(PaymentMethod::Cash)),
        row("De Una Transfers", report.sales(PaymentMethod::DeUna)),
        row(
            "Jardin Azuayo Transfers",
            report.sales(PaymentMethod::JardinAzuayo),
        ),
        row("JEP Transfers", report.sales(PaymentMethod::Jep)),
        row("Expenses", report.total_expenses),
        row("Net Profit", report.net_profit),
        row("Cash on Hand", report.cash_on_hand),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
