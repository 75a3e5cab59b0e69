//! # shoestock_store
//!
//! Flat-file shoe inventory storage: the record model, the delimited file
//! reader/writer pair, the in-memory [`InventoryStore`], and record
//! validation.
//!
//! The backing format is a plain text file, one record per line, comma
//! delimited, with a fixed header line on top:
//!
//! ```text
//! Country,Code,Product,Cost,Quantity
//! South Africa,SKU44386,Air Max,2450,20
//! ```
//!
//! All operations are synchronous and single-pass. The store loads the
//! whole file into memory, mutates the in-memory list, and persists by
//! rewriting the file.
//!
//! ## Example
//!
//! ```rust,no_run
//! use shoestock_store::{InventoryStore, LinePolicy, Shoe};
//!
//! let mut store = InventoryStore::load("inventory.txt", LinePolicy::Strict).unwrap();
//!
//! store.add(Shoe::new("South Africa", "SKU90210", "Air Max", 2450.0, 20));
//!
//! if let Some(lowest) = store.lowest_stock() {
//!     let code = lowest.code.clone();
//!     store.restock(&code, 50).unwrap();
//! }
//!
//! store.save().unwrap();
//! ```

pub mod error;
pub mod models;
pub mod reader;
pub mod store;
pub mod validator;
pub mod writer;

pub use error::{StoreError, StoreResult};
pub use models::{format_rands, Shoe, DELIMITER, FILE_HEADER};
pub use reader::{InventoryReader, LinePolicy};
pub use store::InventoryStore;
pub use validator::{ShoeValidator, ValidationResult};
pub use writer::InventoryWriter;
