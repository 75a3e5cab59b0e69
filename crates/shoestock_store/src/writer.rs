//! Inventory file writing.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::StoreResult;
use crate::models::{Shoe, DELIMITER, FILE_HEADER};

/// Writer for the delimited inventory file.
pub struct InventoryWriter;

impl InventoryWriter {
    /// Rewrite the file at `path` with the header line plus one line per
    /// record, overwriting any existing content.
    pub fn write_file(path: impl AsRef<Path>, shoes: &[Shoe]) -> StoreResult<()> {
        let path = path.as_ref();
        debug!("Writing {} records to {:?}", shoes.len(), path);

        let mut content = String::from(FILE_HEADER);
        content.push('\n');
        for shoe in shoes {
            content.push_str(&Self::serialize_line(shoe));
            content.push('\n');
        }

        fs::write(path, content)?;
        Ok(())
    }

    /// Render one record as a file line.
    pub fn serialize_line(shoe: &Shoe) -> String {
        format!(
            "{}{d}{}{d}{}{d}{}{d}{}",
            shoe.country,
            shoe.code,
            shoe.product,
            shoe.cost,
            shoe.quantity,
            d = DELIMITER
        )
    }
}
