use crate::error::LoadError;
use crate::record::RawRecord;
use core_types::Table;
use std::io::Read;
use std::path::Path;

/// Reads the sales table at `path`.
///
/// The first malformed row aborts the whole load; there is no partial table.
pub fn load(path: impl AsRef<Path>) -> Result<Table, LoadError> {
    let path = path.as_ref();
    let reader = builder()
        .from_path(path)
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let table = read_table(reader)?;
    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        categories = table.categories().len(),
        "Sales data loaded."
    );
    Ok(table)
}

/// Same as [`load`] but over any reader, e.g. an in-memory buffer.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Table, LoadError> {
    read_table(builder().from_reader(reader))
}

fn builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).trim(csv::Trim::All);
    builder
}

fn read_table<R: Read>(mut reader: csv::Reader<R>) -> Result<Table, LoadError> {
    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let raw: RawRecord = record.deserialize(Some(&headers))?;
        rows.push(raw.into_transaction(line)?);
    }
    Ok(Table::new(rows))
}
