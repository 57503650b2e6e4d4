//! # Store Configuration
//!
//! Data directory and file-name configuration for the flat-file stores.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Data Directory Layout                              │
//! │                                                                         │
//! │  <data_dir>/                                                            │
//! │  ├── orders.csv      the order collection                              │
//! │  ├── expenses.csv    the expense collection                            │
//! │  └── drawer.csv      one opening-float row per opened day              │
//! │                                                                         │
//! │  Exports (closing reports, raw dumps) go wherever the caller points    │
//! │  them; they are not part of the store.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};

// =============================================================================
// Configuration
// =============================================================================

/// Flat-file store configuration.
///
/// ## Example
/// ```rust
/// use comanda_store::StoreConfig;
///
/// let config = StoreConfig::new("./data").orders_file("pedidos.csv");
/// assert!(config.orders_path().ends_with("pedidos.csv"));
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding all three store files. Created on `Store::new`.
    pub data_dir: PathBuf,

    /// Order store file name.
    /// Default: "orders.csv"
    pub orders_file: String,

    /// Expense store file name.
    /// Default: "expenses.csv"
    pub expenses_file: String,

    /// Drawer store file name.
    /// Default: "drawer.csv"
    pub drawer_file: String,
}

impl StoreConfig {
    /// Creates a configuration with the default file names.
    ///
    /// ## Arguments
    /// * `data_dir` - Directory for the store files. Created if missing.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            orders_file: "orders.csv".to_string(),
            expenses_file: "expenses.csv".to_string(),
            drawer_file: "drawer.csv".to_string(),
        }
    }

    /// Sets the order store file name.
    pub fn orders_file(mut self, name: impl Into<String>) -> Self {
        self.orders_file = name.into();
        self
    }

    /// Sets the expense store file name.
    pub fn expenses_file(mut self, name: impl Into<String>) -> Self {
        self.expenses_file = name.into();
        self
    }

    /// Sets the drawer store file name.
    pub fn drawer_file(mut self, name: impl Into<String>) -> Self {
        self.drawer_file = name.into();
        self
    }

    /// Full path of the order store file.
    pub fn orders_path(&self) -> PathBuf {
        self.data_dir.join(&self.orders_file)
    }

    /// Full path of the expense store file.
    pub fn expenses_path(&self) -> PathBuf {
        self.data_dir.join(&self.expenses_file)
    }

    /// Full path of the drawer store file.
    pub fn drawer_path(&self) -> PathBuf {
        self.data_dir.join(&self.drawer_file)
    }

    /// The data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_names() {
        let config = StoreConfig::new("/tmp/comanda");
        assert_eq!(config.orders_path(), PathBuf::from("/tmp/comanda/orders.csv"));
        assert_eq!(
            config.expenses_path(),
            PathBuf::from("/tmp/comanda/expenses.csv")
        );
        assert_eq!(config.drawer_path(), PathBuf::from("/tmp/comanda/drawer.csv"));
    }

    #[test]
    fn test_config_builder() {
        let config = StoreConfig::new("/tmp/comanda")
            .orders_file("pedidos.csv")
            .expenses_file("gastos.csv")
            .drawer_file("caja.csv");

        assert_eq!(config.orders_file, "pedidos.csv");
        assert_eq!(config.expenses_file, "gastos.csv");
        assert_eq!(config.drawer_file, "caja.csv");
    }
}
