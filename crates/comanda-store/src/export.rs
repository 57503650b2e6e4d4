//! # CSV Exports
//!
//! Files written for humans rather than for the store itself: the daily
//! closing report handed to the owner, and full dumps of every store for
//! off-site backup. Both go through the same atomic write path as the
//! stores, so a crashed export never leaves a half-written file behind.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use comanda_core::report::rows;
use comanda_core::ClosingReport;

use crate::error::{StoreError, StoreResult};
use crate::repository::write_atomic;
use crate::Store;

/// Writes the eight-row closing report for one business day.
///
/// The file lands at `{dir}/closing_report_{date}.csv` with a fixed
/// `Concept,Amount` layout so spreadsheets can be compared day over day.
/// Returns the path written.
pub fn write_closing_report(report: &ClosingReport, dir: &Path) -> StoreResult<PathBuf> {
    let file = format!("closing_report_{}.csv", report.date);
    let path = dir.join(&file);

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["Concept", "Amount"])
        .map_err(|e| StoreError::malformed(&file, e.to_string()))?;
    for row in rows(report) {
        writer
            .write_record([row.concept, &row.amount.to_decimal_string()])
            .map_err(|e| StoreError::malformed(&file, e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| StoreError::malformed(&file, e.to_string()))?;

    write_atomic(&path, &bytes)?;
    info!(path = %path.display(), date = %report.date, "Closing report written");
    Ok(path)
}

/// Dumps every store to `{dir}/{store}_dump_{today}.csv` for backup.
///
/// Each dump is a faithful re-serialization of the live store, so a dump
/// can be copied back over the original file to restore it. Returns the
/// paths written, orders first.
pub fn dump_all(store: &Store, dir: &Path, today: NaiveDate) -> StoreResult<Vec<PathBuf>> {
    let orders_path = dir.join(format!("orders_dump_{today}.csv"));
    let expenses_path = dir.join(format!("expenses_dump_{today}.csv"));
    let drawer_path = dir.join(format!("drawer_dump_{today}.csv"));

    let orders = store.orders().load()?;
    store.orders().write_to(&orders_path, &orders)?;

    let expenses = store.expenses().load()?;
    store.expenses().write_to(&expenses_path, &expenses)?;

    let openings = store.drawer().load()?;
    store.drawer().write_to(&drawer_path, &openings)?;

    info!(dir = %dir.display(), %today, "All stores dumped");
    Ok(vec![orders_path, expenses_path, drawer_path])
}

// =============================================================================
// Unit Tests
// =============================================================================
