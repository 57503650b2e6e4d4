//! # Order Repository
//!
//! Flat-file persistence for the order collection.
//!
//! ## On-Disk Schema
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  orders.csv                                                             │
//! │                                                                         │
//! │  ID,CustomerLabel,CreatedAt,LineItemSummary,Total,Status,PaymentMethod │
//! │  1,Berta Coello,2024-05-17 12:30:00,2x Hamburguesas - Italiana,4.50,   │
//! │      Paid,Cash                                                          │
//! │                                                                         │
//! │  LEGACY FILES (older seasons of the stand) may lack three columns.     │
//! │  Load backfills them by a fixed rule, one per column:                  │
//! │                                                                         │
//! │    ID            → positional index + 1 (also accepts floats: "3.0")   │
//! │    CustomerLabel → "Sin nombre"                                        │
//! │    PaymentMethod → Cash                                                │
//! │                                                                         │
//! │  Anything else that fails to parse is a Malformed error; the summary   │
//! │  column alone degrades softly (empty items, stored Total stays         │
//! │  authoritative) because hand-edited summaries were common.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use comanda_core::order::{matches_query, parse_summary, set_payment, set_status, summary};
use comanda_core::{Money, Order, OrderStatus, PaymentMethod, PLACEHOLDER_CUSTOMER};

use crate::error::{StoreError, StoreResult};
use crate::repository::{read_store, write_atomic};

/// Timestamp wire format for the `CreatedAt` column.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Legacy rows written by the previous system carry fractional seconds.
const TIMESTAMP_FORMAT_SUBSEC: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Header row, written even for an empty store.
const HEADERS: [&str; 7] = [
    "ID",
    "CustomerLabel",
    "CreatedAt",
    "LineItemSummary",
    "Total",
    "Status",
    "PaymentMethod",
];

// =============================================================================
// Row Mapping
// =============================================================================

/// One CSV row of the order store.
///
/// The three Option fields are the ones legacy files may lack; serde's
/// `default` lets a file without those headers still deserialize, and the
/// conversion below applies the backfill rules.
#[derive(Debug, Serialize, Deserialize)]
struct OrderRow {
    /// Kept as a string on the way in: legacy files hold floats ("3.0")
    /// where an integer id belongs.
    #[serde(rename = "ID", default)]
    id: Option<String>,

    #[serde(rename = "CustomerLabel", default)]
    customer: Option<String>,

    #[serde(rename = "CreatedAt")]
    created_at: String,

    #[serde(rename = "LineItemSummary")]
    summary: String,

    #[serde(rename = "Total")]
    total: Money,

    #[serde(rename = "Status")]
    status: OrderStatus,

    #[serde(rename = "PaymentMethod", default)]
    payment_method: Option<PaymentMethod>,
}

impl OrderRow {
    fn from_order(order: &Order) -> Self {
        OrderRow {
            id: Some(order.id.to_string()),
            customer: Some(order.customer.clone()),
            created_at: order.created_at.format(TIMESTAMP_FORMAT).to_string(),
            summary: summary(&order.items),
            total: order.total,
            status: order.status,
            payment_method: Some(order.payment_method),
        }
    }

    /// Converts a parsed row into a domain order, applying the legacy
    /// backfill rules. `index` is the 0-based row position, used both for
    /// id backfill and for error context.
    fn into_order(self, index: usize, file: &str) -> StoreResult<Order> {
        let id = match self.id.as_deref().map(str::trim) {
            None | Some("") => {
                debug!(row = index, "Backfilled missing order id");
                (index as u32) + 1
            }
            Some(raw) => parse_legacy_id(raw).ok_or_else(|| {
                StoreError::malformed(file, format!("row {}: invalid order id {:?}", index + 1, raw))
            })?,
        };

        let customer = match self.customer {
            Some(label) if !label.trim().is_empty() => label,
            _ => {
                debug!(row = index, "Backfilled missing customer label");
                PLACEHOLDER_CUSTOMER.to_string()
            }
        };

        let created_at = parse_timestamp(&self.created_at).ok_or_else(|| {
            StoreError::malformed(
                file,
                format!(
                    "row {}: invalid timestamp {:?}",
                    index + 1,
                    self.created_at
                ),
            )
        })?;

        // Unparseable summaries degrade: the stored total is authoritative
        let items = match parse_summary(&self.summary) {
            Some(items) => items,
            None => {
                debug!(row = index, "Summary column did not parse, keeping empty items");
                Vec::new()
            }
        };

        Ok(Order {
            id,
            customer,
            created_at,
            items,
            total: self.total,
            status: self.status,
            payment_method: self.payment_method.unwrap_or_default(),
        })
    }
}

/// Parses an id cell, accepting plain integers and the integer-valued
/// floats older files carry ("3.0" → 3, "3.5" → rejected).
fn parse_legacy_id(raw: &str) -> Option<u32> {
    if let Ok(id) = raw.parse::<u32>() {
        return Some(id);
    }

    let (whole, fraction) = raw.split_once('.')?;
    if fraction.is_empty() || !fraction.bytes().all(|b| b == b'0') {
        return None;
    }
    whole.parse().ok()
}

/// Parses the `CreatedAt` column, trying the current wire format first and
/// the legacy sub-second form as a fallback.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT_SUBSEC))
        .ok()
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for the order store file.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    path: PathBuf,
}

impl OrderRepository {
    /// Creates a repository over the given store file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        OrderRepository { path: path.into() }
    }

    /// The store file's name, for error context.
    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Loads the whole order collection.
    ///
    /// An absent file is an empty store. Legacy files missing the `ID`,
    /// `CustomerLabel`, or `PaymentMethod` columns load through the
    /// backfill rules documented on [`OrderRow`].
    pub fn load(&self) -> StoreResult<Vec<Order>> {
        let Some(bytes) = read_store(&self.path)? else {
            debug!(path = %self.path.display(), "Order store absent, starting empty");
            return Ok(Vec::new());
        };

        let file = self.file_name();
        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let mut orders = Vec::new();
        for (index, row) in reader.deserialize::<OrderRow>().enumerate() {
            let row = row.map_err(|e| StoreError::malformed(&file, e.to_string()))?;
            orders.push(row.into_order(index, &file)?);
        }

        debug!(path = %self.path.display(), count = orders.len(), "Loaded orders");
        Ok(orders)
    }

    /// Loads the collection, downgrading a malformed store to an empty one
    /// with a warning so the session can continue.
    pub fn load_or_default(&self) -> StoreResult<Vec<Order>> {
        match self.load() {
            Ok(orders) => Ok(orders),
            Err(StoreError::Malformed { file, detail }) => {
                warn!(%file, %detail, "Order store is malformed, continuing empty");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    /// Atomically replaces the store with the given collection.
    pub fn save(&self, orders: &[Order]) -> StoreResult<()> {
        self.write_to(&self.path, orders)?;
        debug!(path = %self.path.display(), count = orders.len(), "Saved orders");
        Ok(())
    }

    /// Serializes the collection to an arbitrary path (dumps reuse this).
    pub(crate) fn write_to(&self, path: &Path, orders: &[Order]) -> StoreResult<()> {
        let file = self.file_name();

        // Header is written by hand so even an empty store keeps it
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer
            .write_record(HEADERS)
            .map_err(|e| StoreError::malformed(&file, e.to_string()))?;
        for order in orders {
            writer
                .serialize(OrderRow::from_order(order))
                .map_err(|e| StoreError::malformed(&file, e.to_string()))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| StoreError::malformed(&file, e.to_string()))?;

        write_atomic(path, &bytes)
    }

    /// Sets the status of one order: load, mutate, save.
    ///
    /// On [`OrderNotFound`](comanda_core::CoreError::OrderNotFound) the
    /// file is left untouched.
    pub fn update_status(&self, id: u32, new_status: OrderStatus) -> StoreResult<()> {
        let mut orders = self.load()?;
        set_status(&mut orders, id, new_status)?;
        self.save(&orders)?;

        info!(id, status = %new_status, "Order status updated");
        Ok(())
    }

    /// Sets the payment method of one order: load, mutate, save.
    pub fn update_payment(&self, id: u32, method: PaymentMethod) -> StoreResult<()> {
        let mut orders = self.load()?;
        set_payment(&mut orders, id, method)?;
        self.save(&orders)?;

        info!(id, method = %method, "Order payment method updated");
        Ok(())
    }

    /// Loads and filters by free-text query, returning owned matches in
    /// stored order.
    pub fn search(&self, query: &str) -> StoreResult<Vec<Order>> {
        let orders = self.load()?;
        Ok(orders
            .into_iter()
            .filter(|o| matches_query(o, query))
            .collect())
    }

    /// Removes every order of the given business day. Part of the
    /// destructive daily close. Returns how many rows were removed.
    pub fn purge_day(&self, date: NaiveDate) -> StoreResult<usize> {
        let orders = self.load()?;
        let before = orders.len();
        let kept: Vec<Order> = orders.into_iter().filter(|o| !o.is_on(date)).collect();
        let removed = before - kept.len();
        self.save(&kept)?;

        info!(%date, removed, "Purged day's orders");
        Ok(removed)
    }

    /// Empties the store. The administrative full reset.
    pub fn clear(&self) -> StoreResult<()> {
        self.save(&[])?;
        info!(path = %self.path.display(), "Order store cleared");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use comanda_core::{CoreError, LineItem};
    use std::fs;

    fn repo(dir: &tempfile::TempDir) -> OrderRepository {
        OrderRepository::new(dir.path().join("orders.csv"))
    }

    fn order(id: u32, customer: &str, day: u32, status: OrderStatus) -> Order {
        Order {
            id,
            customer: customer.to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 5, day)
                .unwrap()
                .and_hms_opt(12, 30, 0)
                .unwrap(),
            items: vec![
                LineItem::new("Hamburguesas - Italiana", 2),
                LineItem::new("Hot Dogs - Mix Dog - Jumbo", 1),
            ],
            total: Money::from_cents(675),
            status,
            payment_method: PaymentMethod::Cash,
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(repo(&dir).load().unwrap().is_empty());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);

        let mut second = order(2, "Mesa 4", 18, OrderStatus::Paid);
        second.payment_method = PaymentMethod::JardinAzuayo;
        let orders = vec![order(1, "Berta Coello", 17, OrderStatus::InProgress), second];

        repo.save(&orders).unwrap();
        assert_eq!(repo.load().unwrap(), orders);
    }

    #[test]
    fn test_empty_save_keeps_header() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);

        repo.save(&[]).unwrap();

        let raw = fs::read_to_string(dir.path().join("orders.csv")).unwrap();
        assert_eq!(
            raw,
            "ID,CustomerLabel,CreatedAt,LineItemSummary,Total,Status,PaymentMethod\n"
        );
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_legacy_columns_are_backfilled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        fs::write(
            &path,
            "CreatedAt,LineItemSummary,Total,Status\n\
             2024-05-17 12:30:00,2x Bebidas - Jugos,3.00,Paid\n\
             2024-05-17 13:00:00,1x Bebidas - Jamaica,0.50,Delivered\n",
        )
        .unwrap();

        let orders = OrderRepository::new(&path).load().unwrap();
        assert_eq!(orders.len(), 2);

        assert_eq!(orders[0].id, 1);
        assert_eq!(orders[1].id, 2);
        assert_eq!(orders[0].customer, PLACEHOLDER_CUSTOMER);
        assert_eq!(orders[0].payment_method, PaymentMethod::Cash);
        assert_eq!(orders[0].total, Money::from_cents(300));
        assert_eq!(orders[0].items, vec![LineItem::new("Bebidas - Jugos", 2)]);
    }

    #[test]
    fn test_legacy_float_ids_are_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        fs::write(
            &path,
            "ID,CustomerLabel,CreatedAt,LineItemSummary,Total,Status,PaymentMethod\n\
             3.0,Berta,2024-05-17 12:30:00.123456,1x Bebidas - Jugos,1.50,Paid,DeUna\n",
        )
        .unwrap();

        let orders = OrderRepository::new(&path).load().unwrap();
        assert_eq!(orders[0].id, 3);
        assert_eq!(orders[0].payment_method, PaymentMethod::DeUna);
        // Sub-second legacy timestamps load too
        assert_eq!(
            orders[0].created_at,
            NaiveDate::from_ymd_opt(2024, 5, 17)
                .unwrap()
                .and_hms_opt(12, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_unparseable_summary_degrades_to_empty_items() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        fs::write(
            &path,
            "ID,CustomerLabel,CreatedAt,LineItemSummary,Total,Status,PaymentMethod\n\
             1,Berta,2024-05-17 12:30:00,hand-edited nonsense,9.99,Paid,Cash\n",
        )
        .unwrap();

        let orders = OrderRepository::new(&path).load().unwrap();
        assert!(orders[0].items.is_empty());
        assert_eq!(orders[0].total, Money::from_cents(999));
    }

    #[test]
    fn test_malformed_store_errors_and_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        fs::write(
            &path,
            "ID,CustomerLabel,CreatedAt,LineItemSummary,Total,Status,PaymentMethod\n\
             1,Berta,2024-05-17 12:30:00,1x Bebidas - Jugos,not-money,Paid,Cash\n",
        )
        .unwrap();

        let repo = OrderRepository::new(&path);
        assert!(matches!(
            repo.load().unwrap_err(),
            StoreError::Malformed { .. }
        ));
        // The tolerant path downgrades to empty so the session continues
        assert!(repo.load_or_default().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_status_token_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");
        fs::write(
            &path,
            "ID,CustomerLabel,CreatedAt,LineItemSummary,Total,Status,PaymentMethod\n\
             1,Berta,2024-05-17 12:30:00,1x Bebidas - Jugos,1.50,Entregado,Cash\n",
        )
        .unwrap();

        assert!(matches!(
            OrderRepository::new(&path).load().unwrap_err(),
            StoreError::Malformed { .. }
        ));
    }

    #[test]
    fn test_update_status_persists() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);
        repo.save(&[order(1, "Berta", 17, OrderStatus::InProgress)])
            .unwrap();

        repo.update_status(1, OrderStatus::Paid).unwrap();

        assert_eq!(repo.load().unwrap()[0].status, OrderStatus::Paid);
    }

    #[test]
    fn test_update_status_missing_id_leaves_store_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);
        let orders = vec![order(1, "Berta", 17, OrderStatus::InProgress)];
        repo.save(&orders).unwrap();

        let err = repo.update_status(99, OrderStatus::Paid).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Domain(CoreError::OrderNotFound(99))
        ));
        assert_eq!(repo.load().unwrap(), orders);
    }

    #[test]
    fn test_update_payment_persists() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);
        repo.save(&[order(1, "Berta", 17, OrderStatus::Paid)]).unwrap();

        repo.update_payment(1, PaymentMethod::Jep).unwrap();

        assert_eq!(repo.load().unwrap()[0].payment_method, PaymentMethod::Jep);
    }

    #[test]
    fn test_search_returns_owned_matches() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);
        repo.save(&[
            order(1, "Berta Coello", 17, OrderStatus::Paid),
            order(2, "Mesa 4", 17, OrderStatus::Paid),
        ])
        .unwrap();

        let hits = repo.search("bert").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].customer, "Berta Coello");
    }

    #[test]
    fn test_purge_day_removes_only_that_day() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);
        repo.save(&[
            order(1, "a", 17, OrderStatus::Paid),
            order(2, "b", 18, OrderStatus::Paid),
            order(3, "c", 17, OrderStatus::Cancelled),
        ])
        .unwrap();

        let removed = repo
            .purge_day(NaiveDate::from_ymd_opt(2024, 5, 17).unwrap())
            .unwrap();
        assert_eq!(removed, 2);

        let remaining = repo.load().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
    }

    #[test]
    fn test_clear_empties_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);
        repo.save(&[order(1, "a", 17, OrderStatus::Paid)]).unwrap();

        repo.clear().unwrap();
        assert!(repo.load().unwrap().is_empty());
    }
}
