//! # Repository Module
//!
//! Flat-file repository implementations for Comanda.
//!
//! ## The Whole-File Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Every Mutation Is One Cycle                             │
//! │                                                                         │
//! │  Caller action (mark order paid)                                       │
//! │       │                                                                 │
//! │       │  store.orders().update_status(3, Paid)                         │
//! │       ▼                                                                 │
//! │  OrderRepository                                                       │
//! │  ├── 1. load()      read and parse the WHOLE file                      │
//! │  ├── 2. mutate      pure comanda-core function on the Vec              │
//! │  └── 3. save()      serialize the WHOLE Vec, write temp, rename        │
//! │                                                                         │
//! │  The rename is atomic: a crash mid-save leaves the old file intact.    │
//! │  A few hundred rows a day make the full rewrite effectively free.      │
//! │                                                                         │
//! │  Swapping the backing store later means reimplementing load/save       │
//! │  behind the same methods; the pure layer never notices.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`order::OrderRepository`] - the order collection
//! - [`expense::ExpenseRepository`] - the expense collection
//! - [`drawer::DrawerRepository`] - one opening float per opened day

pub mod drawer;
pub mod expense;
pub mod order;

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::StoreResult;

/// Reads a store file whole. A file that does not exist yet is an empty
/// store, not an error.
pub(crate) fn read_store(path: &Path) -> StoreResult<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Replaces a store file atomically: write a temp file in the same
/// directory, flush it, then rename it over the target. Readers see either
/// the old contents or the new, never a partial write.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> StoreResult<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    // Flush to disk before the rename publishes the file
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
