use std::{fs, path::Path};

use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;

use crate::error::ImportError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Reads every data row of a UTF-8 CSV file with a header line.
pub fn read_records<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>, ImportError> {
    let bytes = fs::read(path).map_err(|source| ImportError::io(path, source))?;
    parse_records(&bytes).map_err(|source| ImportError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// A leading byte-order mark is skipped and header names are trimmed; cells
/// are left as they are. Short rows are accepted and their missing trailing
/// cells read as blank.
pub fn parse_records<R: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<R>, csv::Error> {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    ReaderBuilder::new()
        .trim(Trim::Headers)
        .flexible(true)
        .from_reader(body)
        .deserialize()
        .collect()
}
