//! Tabular output port trait.

use crate::domain::error::StockDataError;
use crate::domain::price_table::PriceTable;
use std::path::Path;

pub trait TableWriterPort {
    /// Write the whole table to `path`, replacing any existing file.
    fn write_table(&self, table: &PriceTable, path: &Path) -> Result<(), StockDataError>;
}
