//! # Expense Repository
//!
//! Flat-file persistence for the petty-cash expense ledger.
//!
//! The on-disk row is [`Expense`] itself (`Date,Description,Amount`), so no
//! separate row mapping exists here. Amounts ride the two-decimal money wire
//! format and dates are ISO `YYYY-MM-DD`.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use comanda_core::Expense;

use crate::error::{StoreError, StoreResult};
use crate::repository::{read_store, write_atomic};

/// Header row, written even for an empty store.
const HEADERS: [&str; 3] = ["Date", "Description", "Amount"];

/// Repository for the expense store file.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Creates a repository over the given store file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ExpenseRepository { path: path.into() }
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Loads the whole expense ledger. An absent file is an empty ledger.
    pub fn load(&self) -> StoreResult<Vec<Expense>> {
        let Some(bytes) = read_store(&self.path)? else {
            debug!(path = %self.path.display(), "Expense store absent, starting empty");
            return Ok(Vec::new());
        };

        let file = self.file_name();
        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let mut expenses = Vec::new();
        for row in reader.deserialize::<Expense>() {
            expenses.push(row.map_err(|e| StoreError::malformed(&file, e.to_string()))?);
        }

        debug!(path = %self.path.display(), count = expenses.len(), "Loaded expenses");
        Ok(expenses)
    }

    /// Loads the ledger, downgrading a malformed store to an empty one with
    /// a warning so the session can continue.
    pub fn load_or_default(&self) -> StoreResult<Vec<Expense>> {
        match self.load() {
            Ok(expenses) => Ok(expenses),
            Err(StoreError::Malformed { file, detail }) => {
                warn!(%file, %detail, "Expense store is malformed, continuing empty");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    /// Atomically replaces the store with the given ledger.
    pub fn save(&self, expenses: &[Expense]) -> StoreResult<()> {
        self.write_to(&self.path, expenses)?;
        debug!(path = %self.path.display(), count = expenses.len(), "Saved expenses");
        Ok(())
    }

    /// Serializes the ledger to an arbitrary path (dumps reuse this).
    pub(crate) fn write_to(&self, path: &Path, expenses: &[Expense]) -> StoreResult<()> {
        let file = self.file_name();

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer
            .write_record(HEADERS)
            .map_err(|e| StoreError::malformed(&file, e.to_string()))?;
        for expense in expenses {
            writer
                .serialize(expense)
                .map_err(|e| StoreError::malformed(&file, e.to_string()))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| StoreError::malformed(&file, e.to_string()))?;

        write_atomic(path, &bytes)
    }

    /// Appends one expense: load, push, save.
    pub fn add(&self, expense: Expense) -> StoreResult<()> {
        let mut expenses = self.load()?;
        info!(date = %expense.date, amount = %expense.amount, "Expense recorded");
        expenses.push(expense);
        self.save(&expenses)
    }

    /// Removes every expense of the given business day. Part of the
    /// destructive daily close. Returns how many rows were removed.
    pub fn purge_day(&self, date: NaiveDate) -> StoreResult<usize> {
        let expenses = self.load()?;
        let before = expenses.len();
        let kept: Vec<Expense> = expenses.into_iter().filter(|e| e.date != date).collect();
        let removed = before - kept.len();
        self.save(&kept)?;

        info!(%date, removed, "Purged day's expenses");
        Ok(removed)
    }

    /// Empties the store. The administrative full reset.
    pub fn clear(&self) -> StoreResult<()> {
        self.save(&[])?;
        info!(path = %self.path.display(), "Expense store cleared");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use comanda_core::Money;
    use std::fs;

    fn repo(dir: &tempfile::TempDir) -> ExpenseRepository {
        ExpenseRepository::new(dir.path().join("expenses.csv"))
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
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

        let expenses = vec![
            Expense::new(day(17), "Gas para la freidora", Money::from_cents(550)).unwrap(),
            Expense::new(day(17), "Almuerzo señora", Money::from_cents(300)).unwrap(),
        ];
        repo.save(&expenses).unwrap();

        assert_eq!(repo.load().unwrap(), expenses);
    }

    #[test]
    fn test_wire_format() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);
        repo.save(&[
            Expense::new(day(17), "Hielo", Money::from_cents(125)).unwrap()
        ])
        .unwrap();

        let raw = fs::read_to_string(dir.path().join("expenses.csv")).unwrap();
        assert_eq!(raw, "Date,Description,Amount\n2024-05-17,Hielo,1.25\n");
    }

    #[test]
    fn test_empty_save_keeps_header() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);
        repo.save(&[]).unwrap();

        let raw = fs::read_to_string(dir.path().join("expenses.csv")).unwrap();
        assert_eq!(raw, "Date,Description,Amount\n");
    }

    #[test]
    fn test_add_appends() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);

        repo.add(Expense::new(day(17), "Gas", Money::from_cents(550)).unwrap())
            .unwrap();
        repo.add(Expense::new(day(18), "Pan", Money::from_cents(200)).unwrap())
            .unwrap();

        let expenses = repo.load().unwrap();
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].description, "Gas");
        assert_eq!(expenses[1].description, "Pan");
    }

    #[test]
    fn test_malformed_store_errors_and_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expenses.csv");
        fs::write(&path, "Date,Description,Amount\n2024-05-17,Gas,oops\n").unwrap();

        let repo = ExpenseRepository::new(&path);
        assert!(matches!(
            repo.load().unwrap_err(),
            StoreError::Malformed { .. }
        ));
        assert!(repo.load_or_default().unwrap().is_empty());
    }

    #[test]
    fn test_purge_day_removes_only_that_day() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);
        repo.save(&[
            Expense::new(day(17), "Gas", Money::from_cents(550)).unwrap(),
            Expense::new(day(18), "Pan", Money::from_cents(200)).unwrap(),
        ])
        .unwrap();

        let removed = repo.purge_day(day(17)).unwrap();
        assert_eq!(removed, 1);

        let remaining = repo.load().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].description, "Pan");
    }

    #[test]
    fn test_clear_empties_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);
        repo.save(&[Expense::new(day(17), "Gas", Money::from_cents(550)).unwrap()])
            .unwrap();

        repo.clear().unwrap();
        assert!(repo.load().unwrap().is_empty());
    }
}
