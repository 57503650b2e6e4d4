//! # Drawer Repository
//!
//! Flat-file persistence for the cash-drawer opening log.
//!
//! One row per opened business day (`Date,OpeningFloat`). Opening is
//! idempotent: a second open of the same day returns the float already on
//! record instead of appending a duplicate, so the first opening of a day
//! always wins.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use comanda_core::{DrawerOpening, Money};

use crate::error::{StoreError, StoreResult};
use crate::repository::{read_store, write_atomic};

/// Header row, written even for an empty store.
const HEADERS: [&str; 2] = ["Date", "OpeningFloat"];

/// Result of [`DrawerRepository::open_day`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The day had no opening yet; this one was recorded.
    Opened(DrawerOpening),
    /// The day was already open; the recorded opening is returned and the
    /// requested float is discarded.
    AlreadyOpen(DrawerOpening),
}

/// Repository for the drawer store file.
#[derive(Debug, Clone)]
pub struct DrawerRepository {
    path: PathBuf,
}

impl DrawerRepository {
    /// Creates a repository over the given store file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DrawerRepository { path: path.into() }
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Loads the whole opening log. An absent file is an empty log.
    pub fn load(&self) -> StoreResult<Vec<DrawerOpening>> {
        let Some(bytes) = read_store(&self.path)? else {
            debug!(path = %self.path.display(), "Drawer store absent, starting empty");
            return Ok(Vec::new());
        };

        let file = self.file_name();
        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let mut openings = Vec::new();
        for row in reader.deserialize::<DrawerOpening>() {
            openings.push(row.map_err(|e| StoreError::malformed(&file, e.to_string()))?);
        }

        debug!(path = %self.path.display(), count = openings.len(), "Loaded drawer openings");
        Ok(openings)
    }

    /// Loads the log, downgrading a malformed store to an empty one with a
    /// warning so the session can continue.
    pub fn load_or_default(&self) -> StoreResult<Vec<DrawerOpening>> {
        match self.load() {
            Ok(openings) => Ok(openings),
            Err(StoreError::Malformed { file, detail }) => {
                warn!(%file, %detail, "Drawer store is malformed, continuing empty");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    /// Atomically replaces the store with the given log.
    pub fn save(&self, openings: &[DrawerOpening]) -> StoreResult<()> {
        self.write_to(&self.path, openings)?;
        debug!(path = %self.path.display(), count = openings.len(), "Saved drawer openings");
        Ok(())
    }

    /// Serializes the log to an arbitrary path (dumps reuse this).
    pub(crate) fn write_to(&self, path: &Path, openings: &[DrawerOpening]) -> StoreResult<()> {
        let file = self.file_name();

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer
            .write_record(HEADERS)
            .map_err(|e| StoreError::malformed(&file, e.to_string()))?;
        for opening in openings {
            writer
                .serialize(opening)
                .map_err(|e| StoreError::malformed(&file, e.to_string()))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| StoreError::malformed(&file, e.to_string()))?;

        write_atomic(path, &bytes)
    }

    /// Opens the drawer for a business day with the given float.
    ///
    /// Checks for an existing row first: opening an already-open day is a
    /// no-op that reports the float on record, never a second row.
    pub fn open_day(&self, date: NaiveDate, opening_float: Money) -> StoreResult<OpenOutcome> {
        let mut openings = self.load()?;

        if let Some(existing) = openings.iter().find(|o| o.date == date) {
            info!(%date, float = %existing.opening_float, "Drawer already open");
            return Ok(OpenOutcome::AlreadyOpen(existing.clone()));
        }

        let opening = DrawerOpening::new(date, opening_float)?;
        openings.push(opening.clone());
        self.save(&openings)?;

        info!(%date, float = %opening_float, "Drawer opened");
        Ok(OpenOutcome::Opened(opening))
    }

    /// The recorded opening for a day, if the drawer was opened.
    pub fn opening_for(&self, date: NaiveDate) -> StoreResult<Option<DrawerOpening>> {
        let openings = self.load()?;
        Ok(openings.into_iter().find(|o| o.date == date))
    }

    /// Removes the opening row of the given business day. Part of the
    /// destructive daily close. Returns how many rows were removed.
    pub fn purge_day(&self, date: NaiveDate) -> StoreResult<usize> {
        let openings = self.load()?;
        let before = openings.len();
        let kept: Vec<DrawerOpening> = openings.into_iter().filter(|o| o.date != date).collect();
        let removed = before - kept.len();
        self.save(&kept)?;

        info!(%date, removed, "Purged day's drawer opening");
        Ok(removed)
    }

    /// Empties the store. The administrative full reset.
    pub fn clear(&self) -> StoreResult<()> {
        self.save(&[])?;
        info!(path = %self.path.display(), "Drawer store cleared");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
