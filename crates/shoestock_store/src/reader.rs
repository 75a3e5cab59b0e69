//! Inventory file reading.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::models::{Shoe, DELIMITER};

/// Number of delimited fields in a record line.
const FIELD_COUNT: usize = 5;

/// How [`InventoryReader::read_file`] treats a line it cannot parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinePolicy {
    /// Fail with a [`StoreError::MalformedLine`] naming the offending line.
    #[default]
    Strict,
    /// Log a warning and continue without the line.
    Lenient,
}

/// Reader for the delimited inventory file.
pub struct InventoryReader;

impl InventoryReader {
    /// Read all shoe records from `path`.
    ///
    /// The first line is a header and is never parsed. An empty file is
    /// an empty inventory. A missing file is a distinct
    /// [`StoreError::NotFound`].
    pub fn read_file(path: impl AsRef<Path>, policy: LinePolicy) -> StoreResult<Vec<Shoe>> {
        let path = path.as_ref();
        debug!("Reading inventory from {:?}", path);

        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                StoreError::NotFound(path.to_path_buf())
            } else {
                StoreError::Io(e)
            }
        })?;

        Self::parse(&content, policy)
    }

    /// Parse full file contents, header line included.
    pub fn parse(content: &str, policy: LinePolicy) -> StoreResult<Vec<Shoe>> {
        let mut shoes = Vec::new();

        // Line 1 is the header.
        for (idx, line) in content.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }

            match Self::parse_line(line) {
                Ok(shoe) => shoes.push(shoe),
                Err(message) => match policy {
                    LinePolicy::Strict => {
                        return Err(StoreError::MalformedLine {
                            line: idx + 1,
                            message,
                        });
                    }
                    LinePolicy::Lenient => {
                        warn!("Skipping malformed line {}: {}", idx + 1, message);
                    }
                },
            }
        }

        Ok(shoes)
    }

    /// Parse a single record line: `country,code,product,cost,quantity`.
    fn parse_line(line: &str) -> Result<Shoe, String> {
        let fields: Vec<&str> = line.split(DELIMITER).collect();
        if fields.len() != FIELD_COUNT {
            return Err(format!(
                "expected {} fields, found {}",
                FIELD_COUNT,
                fields.len()
            ));
        }

        let cost: f64 = fields[3]
            .trim()
            .parse()
            .map_err(|_| format!("invalid cost '{}'", fields[3].trim()))?;
        let quantity: u32 = fields[4]
            .trim()
            .parse()
            .map_err(|_| format!("invalid quantity '{}'", fields[4].trim()))?;

        Ok(Shoe::new(
            fields[0].trim(),
            fields[1].trim(),
            fields[2].trim(),
            cost,
            quantity,
        ))
    }
}
