//! Tabular export and CSV encoding.
//!
//! Records are projected through an ordered column spec into a [`Table`], then
//! encoded as header-first CSV with standard quoting by the `csv` crate. The encoded
//! bytes live in memory inside a [`CsvExport`]; nothing touches the filesystem, so
//! there is no temporary file to clean up on any exit path.

use crate::{
    core::models::{HolderRecord, InscriptionRecord},
    errors::{Error, Result},
};

/// A named column and how to read it from a record. `None` renders as an empty cell.
pub struct Column<R> {
    pub header: &'static str,
    pub accessor: fn(&R) -> Option<String>,
}

impl<R> Column<R> {
    #[must_use]
    pub const fn new(header: &'static str, accessor: fn(&R) -> Option<String>) -> Self {
        Self { header, accessor }
    }
}

/// Header row plus string cells, one row per record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Encodes the table as CSV, header first.
    pub fn to_csv(&self) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.into_inner().map_err(|e| Error::Io(e.into_error()))
    }
}

/// Projects `records` through `columns`.
pub fn to_table<R>(records: &[R], columns: &[Column<R>]) -> Table {
    let headers = columns.iter().map(|c| c.header.to_string()).collect();
    let rows = records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|c| (c.accessor)(record).unwrap_or_default())
                .collect()
        })
        .collect();
    Table { headers, rows }
}

/// Column spec for inscription listings.
#[must_use]
pub fn inscription_columns() -> Vec<Column<InscriptionRecord>> {
    vec![
        Column::new("InscriptionID", |r: &InscriptionRecord| Some(r.inscription_id.clone())),
        Column::new("InscriptionNumber", |r: &InscriptionRecord| {
            r.inscription_number.map(|n| n.to_string())
        }),
    ]
}

/// Column spec for holder snapshots.
#[must_use]
pub fn holder_columns() -> Vec<Column<HolderRecord>> {
    vec![
        Column::new("Address", |r: &HolderRecord| Some(r.address.clone())),
        Column::new("Count", |r: &HolderRecord| Some(r.item_count.to_string())),
    ]
}

/// An encoded CSV ready to be attached to a reply.
#[derive(Debug, Clone)]
pub struct CsvExport {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub row_count: usize,
}

impl CsvExport {
    /// Encodes `table` and names the file `{entity}_{slug}.csv`.
    pub fn new(entity: &str, slug: &str, table: &Table) -> Result<Self> {
        Ok(Self {
            file_name: Self::file_name(entity, slug),
            bytes: table.to_csv()?,
            row_count: table.rows.len(),
        })
    }

    /// `{entity}_{slug}.csv`, with anything but ASCII alphanumerics, `-` and `_`
    /// in the slug replaced by `_`.
    #[must_use]
    pub fn file_name(entity: &str, slug: &str) -> String {
        let safe_slug: String = slug
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("{entity}_{safe_slug}.csv")
    }
}
