//! # Comanda Store
//!
//! Flat-file persistence for the food stand. Every collection lives in one
//! CSV file under a single data directory, and every mutation rewrites the
//! whole file atomically. No daemon, no locks, no schema migrations; the
//! files stay readable in any spreadsheet.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          Store                              │
//! │            (data dir handle + repository access)            │
//! └─────────────┬───────────────┬───────────────┬───────────────┘
//!               │               │               │
//!     ┌─────────▼────────┐ ┌────▼───────────┐ ┌─▼──────────────┐
//!     │ OrderRepository  │ │ ExpenseRepo-   │ │ DrawerRepo-    │
//!     │   orders.csv     │ │ sitory         │ │ sitory         │
//!     │                  │ │  expenses.csv  │ │  drawer.csv    │
//!     └──────────────────┘ └────────────────┘ └────────────────┘
//!               │               │               │
//!               └───────────────┴───────────────┘
//!                               │
//!                    read_store / write_atomic
//!                  (tempfile + rename, same volume)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use comanda_store::{Store, StoreConfig};
//! use comanda_core::Money;
//! use chrono::NaiveDate;
//!
//! # fn main() -> comanda_store::StoreResult<()> {
//! let store = Store::new(StoreConfig::new("./data"))?;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
//! store.drawer().open_day(today, Money::from_cents(1000))?;
//!
//! let orders = store.orders().load()?;
//! println!("{} orders on file", orders.len());
//! # Ok(())
//! # }
//! ```

use std::fs;

use chrono::NaiveDate;
use tracing::info;

pub mod config;
pub mod error;
pub mod export;
pub mod repository;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use export::{dump_all, write_closing_report};
pub use repository::drawer::{DrawerRepository, OpenOutcome};
pub use repository::expense::ExpenseRepository;
pub use repository::order::OrderRepository;

/// Handle over the stand's data directory.
///
/// Construction ensures the directory exists; the repositories it hands
/// out are cheap path wrappers, so a `Store` can be cloned freely.
#[derive(Debug, Clone)]
pub struct Store {
    config: StoreConfig,
    orders: OrderRepository,
    expenses: ExpenseRepository,
    drawer: DrawerRepository,
}

impl Store {
    /// Opens (creating if needed) the data directory and wires up the
    /// three repositories.
    pub fn new(config: StoreConfig) -> StoreResult<Self> {
        fs::create_dir_all(config.data_dir())?;
        info!(data_dir = %config.data_dir().display(), "Store opened");

        let orders = OrderRepository::new(config.orders_path());
        let expenses = ExpenseRepository::new(config.expenses_path());
        let drawer = DrawerRepository::new(config.drawer_path());

        Ok(Store {
            config,
            orders,
            expenses,
            drawer,
        })
    }

    /// The configuration this store was opened with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The order repository.
    pub fn orders(&self) -> &OrderRepository {
        &self.orders
    }

    /// The expense repository.
    pub fn expenses(&self) -> &ExpenseRepository {
        &self.expenses
    }

    /// The drawer repository.
    pub fn drawer(&self) -> &DrawerRepository {
        &self.drawer
    }

    /// Ends a business day by removing its rows from all three stores.
    ///
    /// Destructive: run it only after the closing report for the day has
    /// been written. The three purges are separate load/save cycles, so if
    /// the process dies between them a re-run finishes the job.
    pub fn close_day(&self, date: NaiveDate) -> StoreResult<()> {
        let orders = self.orders.purge_day(date)?;
        let expenses = self.expenses.purge_day(date)?;
        let openings = self.drawer.purge_day(date)?;

        info!(%date, orders, expenses, openings, "Day closed");
        Ok(())
    }

    /// Empties every store. The administrative start-from-zero reset.
    pub fn reset_all(&self) -> StoreResult<()> {
        self.orders.clear()?;
        self.expenses.clear()?;
        self.drawer.clear()?;

        info!(data_dir = %self.config.data_dir().display(), "All stores reset");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use comanda_core::{DrawerOpening, Expense, LineItem, Money, Order, OrderStatus, PaymentMethod};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn order_on(id: u32, d: u32) -> Order {
        Order {
            id,
            customer: format!("Mesa {id}"),
            created_at: day(d).and_hms_opt(12, 0, 0).unwrap(),
            items: vec![LineItem::new("Bebidas - Jugos", 1)],
            total: Money::from_cents(150),
            status: OrderStatus::Paid,
            payment_method: PaymentMethod::Cash,
        }
    }

    #[test]
    fn test_new_creates_the_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("stand").join("data");

        let store = Store::new(StoreConfig::new(&nested)).unwrap();
        assert!(nested.is_dir());
        assert!(store.orders().load().unwrap().is_empty());
    }

    #[test]
    fn test_close_day_purges_all_three_stores() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(StoreConfig::new(dir.path())).unwrap();

        store
            .orders()
            .save(&[order_on(1, 17), order_on(2, 18)])
            .unwrap();
        store
            .expenses()
            .save(&[
                Expense::new(day(17), "Gas", Money::from_cents(550)).unwrap(),
                Expense::new(day(18), "Pan", Money::from_cents(200)).unwrap(),
            ])
            .unwrap();
        store.drawer().open_day(day(17), Money::from_cents(1000)).unwrap();
        store.drawer().open_day(day(18), Money::from_cents(1500)).unwrap();

        store.close_day(day(17)).unwrap();

        // The 18th survives untouched in every store
        let orders = store.orders().load().unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, 2);

        let expenses = store.expenses().load().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].description, "Pan");

        let openings = store.drawer().load().unwrap();
        assert_eq!(
            openings,
            vec![DrawerOpening::new(day(18), Money::from_cents(1500)).unwrap()]
        );
    }

    #[test]
    fn test_reset_all_empties_every_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(StoreConfig::new(dir.path())).unwrap();

        store.orders().save(&[order_on(1, 17)]).unwrap();
        store
            .expenses()
            .add(Expense::new(day(17), "Gas", Money::from_cents(550)).unwrap())
            .unwrap();
        store.drawer().open_day(day(17), Money::from_cents(1000)).unwrap();

        store.reset_all().unwrap();

        assert!(store.orders().load().unwrap().is_empty());
        assert!(store.expenses().load().unwrap().is_empty());
        assert!(store.drawer().load().unwrap().is_empty());
    }
}
