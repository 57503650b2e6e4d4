//! # comanda-core: Pure Business Logic for Comanda
//!
//! This crate is the **heart** of Comanda, the food-stand order and cash
//! drawer tracker. It contains all business logic as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Comanda Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               Presentation (external collaborator)              │   │
//! │  │     order form ──► orders table ──► closing view ──► exports    │   │
//! │  │     Collects primitives, displays results. No domain math.      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ comanda-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   menu    │  │   money   │  │   order   │  │  closing  │  │   │
//! │  │   │  catalog  │  │   Money   │  │  builder  │  │ reconcile │  │   │
//! │  │   │  lookups  │  │   cents   │  │  queries  │  │  + report │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CLOCK • PURE FUNCTIONS                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  comanda-store (CSV layer)                      │   │
//! │  │        flat-file repositories, atomic saves, exports            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Order, Expense, DrawerOpening, enums)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`menu`] - The compiled-in menu catalog and key lookups
//! - [`order`] - Order building, mutation, and query functions
//! - [`closing`] - Daily closing reconciliation
//! - [`report`] - Fixed closing-report rows for export
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input =
//!    same output. Even "now" is a parameter, never a clock read.
//! 2. **No I/O**: File access lives in comanda-store, nowhere here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid
//!    float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use comanda_core::menu::MENU;
//! use comanda_core::order::build_order;
//! use comanda_core::{LineItem, OrderStatus, PaymentMethod};
//!
//! let now = NaiveDate::from_ymd_opt(2024, 5, 17)
//!     .unwrap()
//!     .and_hms_opt(12, 30, 0)
//!     .unwrap();
//!
//! // The caller's cart: two Italianas and a juice
//! let cart = vec![
//!     LineItem::new("Hamburguesas - Italiana", 2),
//!     LineItem::new("Bebidas - Jugos", 1),
//! ];
//!
//! let order = build_order(
//!     MENU,
//!     &[], // no orders yet today
//!     "Mesa 3",
//!     &cart,
//!     OrderStatus::InProgress,
//!     PaymentMethod::Cash,
//!     now,
//! )
//! .unwrap();
//!
//! assert_eq!(order.id, 1);
//! assert_eq!(order.total.cents(), 600); // 2 × $2.25 + $1.50
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod closing;
pub mod error;
pub mod menu;
pub mod money;
pub mod order;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use comanda_core::Money` instead of
// `use comanda_core::money::Money`

pub use closing::{compute_closing, ClosingReport};
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use report::ReportRow;
pub use types::{DrawerOpening, Expense, LineItem, Order, OrderStatus, PaymentMethod};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Customer label filled in for legacy order rows that predate the
/// customer column.
///
/// ## Why Spanish?
/// Backfilled rows show up in the same tables as live ones; the operator
/// reads "Sin nombre" the way the stand has always written nameless
/// orders, so migrated history does not look foreign.
pub const PLACEHOLDER_CUSTOMER: &str = "Sin nombre";
