//! CSV price table writer.

use crate::domain::dates::format_date;
use crate::domain::error::StockDataError;
use crate::domain::price_table::PriceTable;
use crate::ports::table_port::TableWriterPort;
use csv::WriterBuilder;
use std::path::Path;

pub const DATE_COLUMN: &str = "date";

pub struct CsvTableWriter {
    delimiter: u8,
}

impl CsvTableWriter {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl Default for CsvTableWriter {
    fn default() -> Self {
        Self::new(b',')
    }
}

impl TableWriterPort for CsvTableWriter {
    fn write_table(&self, table: &PriceTable, path: &Path) -> Result<(), StockDataError> {
        let mut wtr = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_path(path)?;

        let mut header = Vec::with_capacity(table.columns.len() + 1);
        header.push(DATE_COLUMN);
        header.extend(table.columns.iter().map(String::as_str));
        wtr.write_record(&header)?;

        for row in &table.rows {
            let mut record = Vec::with_capacity(row.values.len() + 1);
            record.push(format_date(row.date));
            record.extend(
                row.values
                    .iter()
                    .map(|v| v.map(|price| price.to_string()).unwrap_or_default()),
            );
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        tracing::debug!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.columns.len(),
            "price table written"
        );
        Ok(())
    }
}
