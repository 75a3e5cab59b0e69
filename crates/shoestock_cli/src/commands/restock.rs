//! Restock command - top up the lowest-stocked shoe.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use shoestock_store::{InventoryStore, LinePolicy};

#[derive(Args)]
pub struct RestockArgs {
    /// Pairs to add to the lowest-stocked shoe
    pub amount: u32,
}

pub fn execute(file: &Path, policy: LinePolicy, args: RestockArgs) -> Result<()> {
    let mut store = InventoryStore::load(file, policy)?;

    let lowest = match store.lowest_stock() {
        Some(shoe) => shoe,
        None => anyhow::bail!("The inventory is empty"),
    };
    println!("Lowest stock: {}", lowest);
    let code = lowest.code.clone();

    let updated = store.restock(&code, args.amount)?;
    store.save()?;

    println!("Restocked {}: quantity now {}", code, updated);
    Ok(())
}
