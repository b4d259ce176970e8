//! Serialization to and from the flat delimited text format.
//!
//! One record per line, five comma-separated fields, no header, trailing
//! newline after every line. Files are written in ascending id order and a
//! load re-sorts whatever it finds, so the format stays order-canonical.
//! A malformed line aborts the entire load; there are no partial loads.

use crate::error::{Result, StockroomError};
use crate::item::{Item, DELIMITER};
use crate::sort::{first_duplicate_id, sort_by_id};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Fields per persisted line.
pub const FIELD_COUNT: usize = 5;

#[derive(Debug, Default, Clone)]
pub struct Codec {
    trace: bool,
}

impl Codec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable diagnostic trace events on file operations.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Render items as persisted lines, one per record, each terminated by
    /// a newline. Collection order is preserved.
    pub fn serialize(&self, items: &[Item]) -> String {
        let mut out = String::new();
        for item in items {
            out.push_str(&item.to_line());
            out.push('\n');
        }
        out
    }

    /// Parse persisted lines back into a sorted collection.
    ///
    /// Empty lines are skipped. Every other line must split into exactly
    /// [`FIELD_COUNT`] fields (each trimmed of surrounding whitespace
    /// before parsing). Any malformed line or duplicate id fails the whole
    /// load.
    pub fn deserialize(&self, input: &str) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        for (number, line) in input.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            items.push(parse_line(line, number + 1)?);
        }

        let items = sort_by_id(items);
        if let Some(id) = first_duplicate_id(&items) {
            return Err(StockroomError::DuplicateId(id));
        }
        Ok(items)
    }

    /// Read and deserialize the file at `path`.
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Item>> {
        let path = path.as_ref();
        if self.trace {
            debug!(path = %path.display(), "codec: read");
        }
        let content = fs::read_to_string(path)?;
        self.deserialize(&content)
    }

    /// Serialize items and write them to the file at `path`.
    pub fn write_file<P: AsRef<Path>>(&self, path: P, items: &[Item]) -> Result<()> {
        let path = path.as_ref();
        if self.trace {
            debug!(path = %path.display(), count = items.len(), "codec: write");
        }
        fs::write(path, self.serialize(items))?;
        Ok(())
    }
}

fn parse_line(line: &str, number: usize) -> Result<Item> {
    let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(StockroomError::InvalidFieldCount {
            line: number,
            found: fields.len(),
        });
    }
    Item::parse(fields[0], fields[1], fields[2], fields[3], fields[4])
}
