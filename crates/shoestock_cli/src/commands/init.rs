//! Init command - create a new inventory file.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use shoestock_store::InventoryStore;

pub fn execute(file: &Path) -> Result<()> {
    info!("Initializing inventory at {:?}", file);

    let store = InventoryStore::init(file)?;

    println!("✅ Created empty inventory at {}", store.path().display());
    println!();
    println!("Next steps:");
    println!("  shoestock add --country 'South Africa' --code SKU12345 \\");
    println!("      --product 'Air Max' --cost 2450 --quantity 20");

    Ok(())
}
