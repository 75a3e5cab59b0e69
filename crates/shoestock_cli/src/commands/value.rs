//! Value command - total stock value per shoe.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use shoestock_store::{format_rands, InventoryStore, LinePolicy, Shoe};

#[derive(Serialize)]
struct ValueRow {
    code: String,
    total_value: f64,
}

pub fn execute(file: &Path, policy: LinePolicy, json_output: bool) -> Result<()> {
    let store = InventoryStore::load(file, policy)?;

    if json_output {
        let rows: Vec<ValueRow> = store
            .shoes()
            .iter()
            .map(|s| ValueRow {
                code: s.code.clone(),
                total_value: s.total_value(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    print!("{}", render_report(store.shoes()));
    Ok(())
}

/// Render per-record totals plus a grand total.
pub(crate) fn render_report(shoes: &[Shoe]) -> String {
    let mut out = String::new();
    let mut grand_total = 0.0;

    for shoe in shoes {
        let value = shoe.total_value();
        grand_total += value;
        out.push_str(&format!(
            "Total value for {}: {}\n",
            shoe.code,
            format_rands(value)
        ));
    }

    out.push_str(&format!("Grand total: {}\n", format_rands(grand_total)));
    out
}
