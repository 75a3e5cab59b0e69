//! Add command - add a shoe record without entering the menu.

use std::path::Path;

use anyhow::Result;
use clap::Args;
use tracing::info;

use shoestock_store::{InventoryStore, LinePolicy, Shoe, ShoeValidator};

#[derive(Args)]
pub struct AddArgs {
    /// Country the shoe is sourced from
    #[arg(long)]
    pub country: String,

    /// Unique shoe code, e.g. SKU12345
    #[arg(long)]
    pub code: String,

    /// Brand or product name
    #[arg(long)]
    pub product: String,

    /// Price for one pair
    #[arg(long)]
    pub cost: f64,

    /// Pairs in stock
    #[arg(long)]
    pub quantity: u32,
}

pub fn execute(file: &Path, policy: LinePolicy, args: AddArgs) -> Result<()> {
    let mut store = InventoryStore::load(file, policy)?;

    let code = args.code.trim().to_uppercase();
    if store.search_by_code(&code).is_some() {
        anyhow::bail!("A shoe with code {} already exists", code);
    }

    let shoe = Shoe::new(
        args.country.trim(),
        code.as_str(),
        args.product.trim(),
        args.cost,
        args.quantity,
    );

    let result = ShoeValidator::validate_shoe(&shoe);
    if !result.valid {
        for error in &result.errors {
            eprintln!("   - {}", error);
        }
        anyhow::bail!("Shoe validation failed");
    }

    info!("Adding shoe '{}' to {:?}", shoe.code, file);
    store.add(shoe);
    store.save()?;

    println!("✅ Shoe {} added to {}", code, file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(code: &str) -> AddArgs {
        AddArgs {
            country: "South Africa".to_string(),
            code: code.to_string(),
            product: "Air Max".to_string(),
            cost: 2450.0,
            quantity: 20,
        }
    }

    #[test]
    fn test_add_persists_record() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("inventory.txt");
        InventoryStore::init(&path).unwrap();

        execute(&path, LinePolicy::Strict, args("sku12345")).unwrap();

        let store = InventoryStore::load(&path, LinePolicy::Strict).unwrap();
        // Codes are stored upper-cased.
        let shoe = store.search_by_code("SKU12345").unwrap();
        assert_eq!(shoe.country, "South Africa");
        assert_eq!(shoe.quantity, 20);
    }

    #[test]
    fn test_add_rejects_duplicate_code() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("inventory.txt");
        InventoryStore::init(&path).unwrap();

        execute(&path, LinePolicy::Strict, args("SKU12345")).unwrap();
        let err = execute(&path, LinePolicy::Strict, args("SKU12345")).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_add_rejects_invalid_fields() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("inventory.txt");
        InventoryStore::init(&path).unwrap();

        let mut bad = args("NOTASKU");
        bad.country = "UK99".to_string();
        let err = execute(&path, LinePolicy::Strict, bad).unwrap_err();
        assert!(err.to_string().contains("validation failed"));

        // Nothing was written.
        let store = InventoryStore::load(&path, LinePolicy::Strict).unwrap();
        assert!(store.is_empty());
    }
}
