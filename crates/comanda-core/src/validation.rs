//! # Validation Module
//!
//! Input validation for operator-entered values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation (external collaborator)                         │
//! │  ├── Collects primitives: strings, quantities, dates, enum picks       │
//! │  └── Immediate feedback, but NOT trusted                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Trims and rejects empty labels/descriptions                       │
//! │  └── Rejects non-positive amounts and negative floats                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Constructors (Expense::new, build_order, ...)                │
//! │  └── Nothing invalid reaches a persisted collection                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use comanda_core::validation::validate_customer_label;
//!
//! assert_eq!(validate_customer_label("  Berta  ").unwrap(), "Berta");
//! assert!(validate_customer_label("   ").is_err());
//! ```

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer label (name or table identifier).
///
/// ## Rules
/// - Must not be empty after trimming
///
/// ## Returns
/// The trimmed label, owned.
pub fn validate_customer_label(label: &str) -> CoreResult<String> {
    let label = label.trim();

    if label.is_empty() {
        return Err(CoreError::EmptyCustomerLabel);
    }

    Ok(label.to_string())
}

/// Validates an expense description.
///
/// ## Rules
/// - Must not be empty after trimming
///
/// ## Returns
/// The trimmed description, owned.
pub fn validate_description(description: &str) -> CoreResult<String> {
    let description = description.trim();

    if description.is_empty() {
        return Err(CoreError::EmptyDescription);
    }

    Ok(description.to_string())
}

// =============================================================================
// Money Validators
// =============================================================================

/// Validates an expense amount.
///
/// ## Rules
/// - Must be strictly positive; a free expense is a data-entry mistake
pub fn validate_expense_amount(amount: Money) -> CoreResult<()> {
    if !amount.is_positive() {
        return Err(CoreError::NonPositiveAmount);
    }

    Ok(())
}

/// Validates a drawer opening float.
///
/// ## Rules
/// - Must be zero or positive (opening with an empty drawer is allowed)
pub fn validate_opening_float(opening_float: Money) -> CoreResult<()> {
    if opening_float.is_negative() {
        return Err(CoreError::NegativeOpeningFloat);
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
