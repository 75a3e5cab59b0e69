//! CLI command definitions.
//!
//! Running `shoestock` with no subcommand opens the interactive menu;
//! each subcommand is the scripted equivalent of one menu operation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod add;
pub mod init;
pub mod menu;
pub mod restock;
pub mod sale_item;
pub mod search;
pub mod validate;
pub mod value;
pub mod view;

/// shoestock - shoe warehouse inventory manager
#[derive(Parser)]
#[command(name = "shoestock")]
#[command(version, about = "shoestock - shoe warehouse inventory manager")]
#[command(long_about = r#"
shoestock manages a shoe inventory kept in a flat, comma-delimited text
file. Run it with no arguments for the interactive menu, or use the
subcommands for scripted access.

COMMANDS:
  init       → Create a new, empty inventory file
  add        → Add a shoe record
  view       → List every shoe
  search     → Look up a shoe by code
  restock    → Restock the lowest-stocked shoe
  value      → Total stock value per shoe
  sale-item  → Show the highest-stocked (sale) item
  validate   → Check every record against the field rules

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Validation failure
  4 - Inventory data error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the inventory file
    #[arg(
        long,
        global = true,
        env = "SHOESTOCK_FILE",
        default_value = "inventory.txt"
    )]
    pub file: PathBuf,

    /// Skip malformed inventory lines with a warning instead of failing
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Output format for reporting commands: table or json
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new, empty inventory file
    Init,

    /// Add a shoe record to the inventory
    Add(add::AddArgs),

    /// List every shoe in the inventory
    View,

    /// Look up a shoe by its code
    Search(search::SearchArgs),

    /// Restock the lowest-stocked shoe
    Restock(restock::RestockArgs),

    /// Show the total stock value per shoe
    Value,

    /// Show the highest-stocked (sale) item
    #[command(name = "sale-item")]
    SaleItem,

    /// Check every record against the field rules
    Validate,
}
