//! Validate command - check every record against the field rules.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use shoestock_store::{InventoryStore, LinePolicy, ShoeValidator};

pub fn execute(file: &Path, policy: LinePolicy) -> Result<()> {
    info!("Validating inventory at {:?}", file);

    let store = InventoryStore::load(file, policy)?;
    let result = ShoeValidator::validate_inventory(store.shoes());

    for warning in &result.warnings {
        println!("⚠️  {}", warning);
    }

    if result.valid {
        println!("✅ {} records passed validation", store.len());
        return Ok(());
    }

    println!("❌ Validation failed:");
    for error in &result.errors {
        println!("   - {}", error);
    }
    anyhow::bail!("Inventory validation failed");
}
