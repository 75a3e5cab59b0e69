//! View command - list every shoe.

use std::path::Path;

use anyhow::Result;

use shoestock_store::{format_rands, InventoryStore, LinePolicy, Shoe};

use crate::table;

pub fn execute(file: &Path, policy: LinePolicy, json_output: bool) -> Result<()> {
    let store = InventoryStore::load(file, policy)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(store.shoes())?);
        return Ok(());
    }

    if store.is_empty() {
        println!("The inventory is empty.");
        return Ok(());
    }

    print!("{}", render_table(store.shoes()));
    Ok(())
}

/// Render records as a padded plain-text table.
pub(crate) fn render_table(shoes: &[Shoe]) -> String {
    let rows: Vec<Vec<String>> = shoes
        .iter()
        .map(|s| {
            vec![
                s.country.clone(),
                s.code.clone(),
                s.product.clone(),
                format_rands(s.cost),
                s.quantity.to_string(),
            ]
        })
        .collect();

    table::render(&["Country", "Code", "Product", "Cost", "Quantity"], &rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_lists_all_records() {
        let shoes = vec![
            Shoe::new("UK", "SKU2345", "Boot", 40.0, 5),
            Shoe::new("South Africa", "SKU8888", "Sneaker", 3200.0, 50),
        ];
        let rendered = render_table(&shoes);

        assert!(rendered.starts_with("Country"));
        assert!(rendered.contains("SKU2345"));
        assert!(rendered.contains("R3,200.00"));
        // Header + separator + two records.
        assert_eq!(rendered.lines().count(), 4);
    }
}
