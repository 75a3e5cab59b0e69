//! Sale-item command - show the highest-stocked shoe.

use std::path::Path;

use anyhow::Result;

use shoestock_store::{InventoryStore, LinePolicy};

pub fn execute(file: &Path, policy: LinePolicy) -> Result<()> {
    let store = InventoryStore::load(file, policy)?;

    let shoe = match store.highest_stock() {
        Some(shoe) => shoe,
        None => anyhow::bail!("The inventory is empty"),
    };

    println!("The following item is on sale:");
    println!("{}", shoe);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoestock_store::Shoe;
    use tempfile::tempdir;

    #[test]
    fn test_sale_item_on_empty_inventory() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("inventory.txt");
        InventoryStore::init(&path).unwrap();

        let err = execute(&path, LinePolicy::Strict).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_sale_item_with_stock() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("inventory.txt");
        let mut store = InventoryStore::init(&path).unwrap();
        store.add(Shoe::new("UK", "SKU2345", "Boot", 40.0, 5));
        store.add(Shoe::new("US", "SKU8888", "Sneaker", 20.0, 50));
        store.save().unwrap();

        execute(&path, LinePolicy::Strict).unwrap();
    }
}
