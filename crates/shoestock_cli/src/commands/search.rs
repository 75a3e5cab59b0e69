//! Search command - look up a shoe by code.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use shoestock_store::{InventoryStore, LinePolicy};

#[derive(Args)]
pub struct SearchArgs {
    /// Shoe code to look for, e.g. SKU12345
    pub code: String,
}

pub fn execute(file: &Path, policy: LinePolicy, json_output: bool, args: SearchArgs) -> Result<()> {
    let store = InventoryStore::load(file, policy)?;
    let code = args.code.trim().to_uppercase();

    match store.search_by_code(&code) {
        Some(shoe) if json_output => println!("{}", serde_json::to_string_pretty(shoe)?),
        Some(shoe) => println!("{}", shoe),
        None => anyhow::bail!("No shoe with code: {}", code),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoestock_store::Shoe;
    use tempfile::tempdir;

    #[test]
    fn test_search_miss_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("inventory.txt");
        let mut store = InventoryStore::init(&path).unwrap();
        store.add(Shoe::new("UK", "SKU2345", "Boot", 40.0, 5));
        store.save().unwrap();

        let hit = SearchArgs { code: "sku2345".to_string() };
        execute(&path, LinePolicy::Strict, false, hit).unwrap();

        let miss = SearchArgs { code: "SKU0000".to_string() };
        let err = execute(&path, LinePolicy::Strict, false, miss).unwrap_err();
        assert!(err.to_string().contains("No shoe with code"));
    }
}
