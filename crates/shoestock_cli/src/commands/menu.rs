//! Interactive inventory menu.
//!
//! Default mode when no subcommand is given: a numbered menu driving the
//! capture / view / restock / search / report cycle against one loaded
//! store, saving after every successful mutation.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use shoestock_store::{InventoryStore, LinePolicy, Shoe};

use crate::commands::{value, view};
use crate::prompt;

const MENU: &str = "
Would you like to:
  1. View all shoes
  2. Capture a shoe
  3. Restock shoes
  4. Search for a shoe
  5. Show total value per shoe
  6. Show the sale item
  7. Quit
";

pub fn execute(file: &Path, policy: LinePolicy) -> Result<()> {
    let mut store = InventoryStore::load(file, policy)?;
    println!("Loaded {} shoes from {}", store.len(), file.display());

    loop {
        println!("{}", MENU);
        let selection = prompt::read_input("Enter selection: ")?;
        debug!("Menu selection: {:?}", selection);

        match selection.parse::<u32>() {
            Ok(1) => view_all(&store),
            Ok(2) => capture_shoe(&mut store)?,
            Ok(3) => restock_lowest(&mut store)?,
            Ok(4) => search_shoe(&store)?,
            Ok(5) => print!("{}", value::render_report(store.shoes())),
            Ok(6) => sale_item(&store),
            Ok(7) => {
                println!("Goodbye!");
                return Ok(());
            }
            _ => println!("Invalid input given. Select a valid number."),
        }
    }
}

fn view_all(store: &InventoryStore) {
    if store.is_empty() {
        println!("The inventory is empty.");
        return;
    }
    print!("{}", view::render_table(store.shoes()));
}

fn capture_shoe(store: &mut InventoryStore) -> Result<()> {
    println!("\nEnter 'x' at any time to cancel.\n");

    let Some(country) = prompt::prompt_name("Enter the country the shoe is from: ")? else {
        println!("Capture cancelled.");
        return Ok(());
    };

    let code = loop {
        let Some(code) = prompt::prompt_code("Enter the shoe code (e.g. SKU12345): ")? else {
            println!("Capture cancelled.");
            return Ok(());
        };
        if store.search_by_code(&code).is_some() {
            println!("A shoe with code {} already exists.", code);
        } else {
            break code;
        }
    };

    let Some(product) = prompt::prompt_name("Enter what brand shoe it is: ")? else {
        println!("Capture cancelled.");
        return Ok(());
    };

    let Some(cost) = prompt::prompt_cost("Enter the price for one pair: ")? else {
        println!("Capture cancelled.");
        return Ok(());
    };

    let Some(quantity) = prompt::prompt_quantity("Enter the amount of pairs: ")? else {
        println!("Capture cancelled.");
        return Ok(());
    };

    store.add(Shoe::new(country, code, product, cost, quantity));
    store.save()?;
    println!("Shoe successfully captured.");
    Ok(())
}

fn restock_lowest(store: &mut InventoryStore) -> Result<()> {
    let Some(lowest) = store.lowest_stock() else {
        println!("The inventory is empty.");
        return Ok(());
    };
    println!("\nThe following shoe has the lowest stock:");
    println!("{}", lowest);
    let code = lowest.code.clone();

    let confirm = prompt::read_input("Would you like to restock this shoe? [y/N]: ")?;
    if !confirm.eq_ignore_ascii_case("y") {
        println!("Restock cancelled.");
        return Ok(());
    }

    let Some(amount) =
        prompt::prompt_quantity("Enter the amount you want to restock with (or 'x' to cancel): ")?
    else {
        println!("Restock cancelled.");
        return Ok(());
    };

    let updated = store.restock(&code, amount)?;
    store.save()?;
    println!("Updated quantity: {}", updated);
    println!("Inventory file updated.");
    Ok(())
}

fn search_shoe(store: &InventoryStore) -> Result<()> {
    let code = prompt::read_input("Enter the shoe code you are looking for: ")?.to_uppercase();

    match store.search_by_code(&code) {
        Some(shoe) => {
            println!("Shoe found!");
            println!("{}", shoe);
        }
        None => println!("Invalid code or shoe not found."),
    }
    Ok(())
}

fn sale_item(store: &InventoryStore) {
    match store.highest_stock() {
        Some(shoe) => {
            println!("The following item is on sale:");
            println!("{}", shoe);
        }
        None => println!("The inventory is empty."),
    }
}
