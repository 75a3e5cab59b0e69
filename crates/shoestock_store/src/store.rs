//! The in-memory inventory store.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::models::Shoe;
use crate::reader::{InventoryReader, LinePolicy};
use crate::writer::InventoryWriter;

/// Shoe inventory backed by a delimited text file.
///
/// Records keep their file order. Every mutation works on the in-memory
/// list; [`InventoryStore::save`] persists by rewriting the whole file.
#[derive(Debug)]
pub struct InventoryStore {
    path: PathBuf,
    shoes: Vec<Shoe>,
}

impl InventoryStore {
    /// Load the inventory from `path`.
    pub fn load(path: impl AsRef<Path>, policy: LinePolicy) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let shoes = InventoryReader::read_file(&path, policy)?;
        info!("Loaded {} shoe records from {:?}", shoes.len(), path);
        Ok(Self { path, shoes })
    }

    /// Create a new, empty inventory file at `path` and open it.
    pub fn init(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        if path.exists() {
            return Err(StoreError::AlreadyExists(path));
        }

        InventoryWriter::write_file(&path, &[])?;
        info!("Initialized empty inventory at {:?}", path);
        Ok(Self {
            path,
            shoes: Vec::new(),
        })
    }

    /// Persist the current records, overwriting the backing file.
    pub fn save(&self) -> StoreResult<()> {
        InventoryWriter::write_file(&self.path, &self.shoes)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records, in load order.
    pub fn shoes(&self) -> &[Shoe] {
        &self.shoes
    }

    pub fn len(&self) -> usize {
        self.shoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shoes.is_empty()
    }

    /// Append a record to the in-memory list.
    pub fn add(&mut self, shoe: Shoe) {
        debug!("Adding shoe {}", shoe.code);
        self.shoes.push(shoe);
    }

    /// First record whose code matches exactly.
    pub fn search_by_code(&self, code: &str) -> Option<&Shoe> {
        self.shoes.iter().find(|s| s.code == code)
    }

    /// Record with the lowest quantity, first occurrence on ties.
    pub fn lowest_stock(&self) -> Option<&Shoe> {
        self.shoes
            .iter()
            .reduce(|best, s| if s.quantity < best.quantity { s } else { best })
    }

    /// Record with the highest quantity, first occurrence on ties.
    pub fn highest_stock(&self) -> Option<&Shoe> {
        self.shoes
            .iter()
            .reduce(|best, s| if s.quantity > best.quantity { s } else { best })
    }

    /// Increase the quantity of the record with `code` by `amount` and
    /// return the updated quantity.
    pub fn restock(&mut self, code: &str, amount: u32) -> StoreResult<u32> {
        let shoe = self
            .shoes
            .iter_mut()
            .find(|s| s.code == code)
            .ok_or_else(|| StoreError::ShoeNotFound(code.to_string()))?;

        shoe.quantity += amount;
        info!("Restocked {}: quantity now {}", code, shoe.quantity);
        Ok(shoe.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> InventoryStore {
        InventoryStore {
            path: PathBuf::from("unused.txt"),
            shoes: vec![
                Shoe::new("UK", "SKU2345", "Boot", 40.0, 5),
                Shoe::new("US", "SKU8888", "Sneaker", 20.0, 50),
                Shoe::new("ZA", "SKU1111", "Sandal", 15.0, 5),
                Shoe::new("ZA", "SKU7777", "Trainer", 90.0, 50),
            ],
        }
    }

    #[test]
    fn test_search_by_code() {
        let store = sample_store();
        assert_eq!(store.search_by_code("SKU8888").unwrap().product, "Sneaker");
        assert!(store.search_by_code("SKU0000").is_none());
    }

    #[test]
    fn test_lowest_stock_first_on_ties() {
        let store = sample_store();
        // SKU2345 and SKU1111 both sit at 5; the earlier record wins.
        assert_eq!(store.lowest_stock().unwrap().code, "SKU2345");
    }

    #[test]
    fn test_highest_stock_first_on_ties() {
        let store = sample_store();
        // SKU8888 and SKU7777 both sit at 50; the earlier record wins.
        assert_eq!(store.highest_stock().unwrap().code, "SKU8888");
    }

    #[test]
    fn test_empty_store_has_no_extremes() {
        let store = InventoryStore {
            path: PathBuf::from("unused.txt"),
            shoes: Vec::new(),
        };
        assert!(store.lowest_stock().is_none());
        assert!(store.highest_stock().is_none());
    }

    #[test]
    fn test_restock_updates_only_target() {
        let mut store = sample_store();
        let updated = store.restock("SKU2345", 45).unwrap();

        assert_eq!(updated, 50);
        assert_eq!(store.search_by_code("SKU2345").unwrap().quantity, 50);
        assert_eq!(store.search_by_code("SKU1111").unwrap().quantity, 5);
    }

    #[test]
    fn test_restock_unknown_code() {
        let mut store = sample_store();
        let err = store.restock("SKU0000", 10).unwrap_err();
        assert!(matches!(err, StoreError::ShoeNotFound(code) if code == "SKU0000"));
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut store = sample_store();
        store.add(Shoe::new("FR", "SKU5555", "Loafer", 60.0, 12));

        assert_eq!(store.len(), 5);
        assert_eq!(store.shoes().last().unwrap().code, "SKU5555");
    }
}
