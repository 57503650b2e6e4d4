//! # Error Types
//!
//! Domain-specific error types for comanda-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  comanda-core errors (this file)                                       │
//! │  └── CoreError        - Validation failures + domain rule violations   │
//! │                                                                         │
//! │  comanda-store errors (separate crate)                                 │
//! │  └── StoreError       - File I/O and malformed-store failures          │
//! │                                                                         │
//! │  Flow: CoreError → StoreError::Domain → caller displays message        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (order id, menu key, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent rejected input or domain rule violations.
/// None of them mutate state: the action that raised one simply did not
/// happen, and prior persisted data is unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Customer label was empty after trimming.
    ///
    /// ## When This Occurs
    /// - Order form submitted with a blank name/table field
    #[error("customer label must not be empty")]
    EmptyCustomerLabel,

    /// Order submitted with no sellable lines.
    ///
    /// ## When This Occurs
    /// - Every line in the selection has quantity zero
    /// - The selection itself is empty
    /// - The computed total is zero
    #[error("order must contain at least one item")]
    EmptyCart,

    /// Expense description was empty after trimming.
    #[error("expense description must not be empty")]
    EmptyDescription,

    /// Amount must be strictly greater than zero.
    ///
    /// ## When This Occurs
    /// - Recording an expense of 0.00 or a negative amount
    #[error("amount must be greater than zero")]
    NonPositiveAmount,

    /// Opening float must not be negative (zero is a valid float).
    #[error("opening float must not be negative")]
    NegativeOpeningFloat,

    /// No order with the given id exists in the collection.
    ///
    /// ## When This Occurs
    /// - Status/payment update against an id that was purged by a daily
    ///   close, or mistyped by the operator
    ///
    /// The store leaves the persisted file untouched when this surfaces
    /// mid read-modify-write.
    #[error("order not found: {0}")]
    OrderNotFound(u32),

    /// A selection line referenced a key that is not on the menu.
    ///
    /// ## When This Occurs
    /// Only through a caller bug: a correctly rendered cart can only offer
    /// keys taken from the menu itself. Distinct from the validation
    /// variants above, which are expected operator mistakes.
    #[error("menu item not found: {0}")]
    UnknownMenuItem(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
